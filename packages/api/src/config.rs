//! Runtime configuration from environment variables.

use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the process-wide configuration, loading it on first use.
pub fn get() -> Result<&'static AppConfig, String> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = AppConfig::from_env()?;
    Ok(CONFIG.get_or_init(|| config))
}

/// Backend and media-host configuration, read server-side.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the backend REST API, without a trailing slash.
    pub backend_url: String,
    /// Public site URL, used for server-side absolute links.
    pub site_url: String,
    pub cloudinary: CloudinaryConfig,
}

/// Cloudinary credentials. Cloud name, upload preset, and API key are public;
/// the API secret must stay server-side.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub upload_preset: String,
    pub api_key: String,
    pub api_secret: String,
}

impl AppConfig {
    /// Load configuration from the environment (and `.env` if present).
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let backend_url = std::env::var("BACKEND_API_URL")
            .map_err(|_| "BACKEND_API_URL not set".to_string())?
            .trim_end_matches('/')
            .to_string();
        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        Ok(Self {
            backend_url,
            site_url,
            cloudinary: CloudinaryConfig {
                cloud_name: std::env::var("CLOUDINARY_CLOUD_NAME")
                    .map_err(|_| "CLOUDINARY_CLOUD_NAME not set".to_string())?,
                upload_preset: std::env::var("CLOUDINARY_UPLOAD_PRESET")
                    .map_err(|_| "CLOUDINARY_UPLOAD_PRESET not set".to_string())?,
                api_key: std::env::var("CLOUDINARY_API_KEY")
                    .map_err(|_| "CLOUDINARY_API_KEY not set".to_string())?,
                api_secret: std::env::var("CLOUDINARY_API_SECRET")
                    .map_err(|_| "CLOUDINARY_API_SECRET not set".to_string())?,
            },
        })
    }

    /// Backend endpoint the payment relay forwards gateway callbacks to.
    pub fn payment_forward_url(&self) -> String {
        format!("{}/orders/payment-callback", self.backend_url)
    }
}
