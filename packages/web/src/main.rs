use dioxus::prelude::*;

use ui::{AuthProvider, Navbar, Toaster};
use views::admin::{
    AdminCategories, AdminDashboard, AdminIngredients, AdminOrders, AdminPromotions, AdminShell,
    AdminStores, AdminTemplates, AdminUsers,
};
use views::{Checkout, ForgotPassword, Home, Login, Order, Register, VerifyOtp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicShell)]
        #[route("/")]
        Home {},
        #[route("/order")]
        Order {},
        #[route("/checkout?:status&:order_id")]
        Checkout { status: String, order_id: String },
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/verify-otp/:email")]
    VerifyOtp { email: String },
    #[route("/forgot-password")]
    ForgotPassword {},
    #[nest("/admin")]
        #[layout(AdminShell)]
            #[route("/")]
            AdminDashboard {},
            #[route("/users")]
            AdminUsers {},
            #[route("/orders")]
            AdminOrders {},
            #[route("/ingredients")]
            AdminIngredients {},
            #[route("/categories")]
            AdminCategories {},
            #[route("/promotions")]
            AdminPromotions {},
            #[route("/stores")]
            AdminStores {},
            #[route("/templates")]
            AdminTemplates {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("failed to start tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use axum::routing::post;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Fail fast on a broken environment instead of on the first request.
    if let Err(e) = api::config::get() {
        tracing::error!("configuration error: {e}");
        std::process::exit(1);
    }

    // Custom routes first, then the Dioxus application (pages + server fns).
    let router = axum::Router::new()
        .route("/api/media/delete", post(media_delete))
        .route("/api/payment/callback", post(payment_callback))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(TraceLayer::new_for_http());

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("server error");
}

/// Signed Cloudinary deletion. The browser posts a public id; the signing
/// happens here where the API secret lives.
#[cfg(feature = "server")]
async fn media_delete(
    axum::Json(request): axum::Json<api::media::DeleteRequest>,
) -> axum::Json<api::media::DeleteResponse> {
    let config = match api::config::get() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("media delete without config: {e}");
            return axum::Json(api::media::DeleteResponse {
                success: false,
                message: e,
            });
        }
    };

    match api::media::destroy(&config.cloudinary, &request.public_id).await {
        Ok(response) => axum::Json(response),
        Err(e) => {
            tracing::warn!("cloudinary destroy failed: {e}");
            axum::Json(api::media::DeleteResponse {
                success: false,
                message: e,
            })
        }
    }
}

/// Payment gateway callback relay. The gateway posts its result here; we
/// forward the body to the backend and always answer 200 with an ack code,
/// which is what the gateway's retry logic keys on. The body is taken raw:
/// a typed extractor would answer 4xx on a malformed or mislabelled payload,
/// and the gateway retries anything that is not a 200.
#[cfg(feature = "server")]
async fn payment_callback(body: axum::body::Bytes) -> axum::Json<api::payment::PaymentAck> {
    let result = match api::payment::parse_callback(&body) {
        Ok(callback) => match api::config::get() {
            Ok(config) => {
                api::payment::forward_callback(&config.payment_forward_url(), &callback).await
            }
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        tracing::warn!("payment callback relay failed: {e}");
    }
    axum::Json(api::payment::ack_for(result))
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        Toaster {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Customer-facing pages share the top navigation bar.
#[component]
fn PublicShell() -> Element {
    rsx! {
        Navbar {}
        Outlet::<Route> {}
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use tower::ServiceExt;

    fn callback_router() -> axum::Router {
        axum::Router::new().route("/api/payment/callback", post(super::payment_callback))
    }

    async fn post_callback(content_type: &str, body: &'static str) -> (StatusCode, serde_json::Value) {
        let response = callback_router()
            .oneshot(
                Request::post("/api/payment/callback")
                    .header("content-type", content_type)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_truncated_callback_still_answers_200() {
        let (status, ack) = post_callback("application/json", r#"{"app_id": 1,"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ack["return_code"], -1);
    }

    #[tokio::test]
    async fn test_form_encoded_callback_still_answers_200() {
        let (status, ack) =
            post_callback("application/x-www-form-urlencoded", "app_id=1&status=paid").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ack["return_code"], -1);
    }
}
