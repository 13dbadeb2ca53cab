//! Image upload widget.
//!
//! Upload goes browser-direct to Cloudinary with an unsigned preset, so the
//! file never transits our server. Deletion goes the other way: a
//! same-origin `POST /api/media/delete`, because the destroy call must be
//! signed with the API secret and the secret never reaches the browser.

use api::media::UploadedImage;
use dioxus::prelude::*;

#[component]
pub fn ImageUpload(
    value: Option<UploadedImage>,
    onchange: EventHandler<Option<UploadedImage>>,
) -> Element {
    let mut uploading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // Public upload params (cloud name + preset), fetched once.
    let params = use_resource(|| async move {
        api::media::upload_params().await.ok()
    });

    let handle_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        let Some(Some(upload)) = params.read().clone() else {
            error.set(Some("Upload configuration unavailable".to_string()));
            return;
        };

        let Ok(bytes) = file.read_bytes().await else {
            error.set(Some("Could not read the selected file".to_string()));
            return;
        };

        uploading.set(true);
        error.set(None);
        match upload_to_cloudinary(&upload, &name, bytes.to_vec()).await {
            Ok(image) => onchange.call(Some(image)),
            Err(e) => {
                tracing::warn!("upload failed: {e}");
                error.set(Some(e));
            }
        }
        uploading.set(false);
    };

    let delete_target = value.clone();
    let handle_delete = move |_| {
        let Some(image) = delete_target.clone() else {
            return;
        };
        spawn(async move {
            uploading.set(true);
            match delete_via_server(&image.public_id).await {
                Ok(()) => onchange.call(None),
                Err(e) => error.set(Some(e)),
            }
            uploading.set(false);
        });
    };

    rsx! {
        div {
            class: "image-upload",

            if let Some(image) = &value {
                div {
                    class: "image-preview",
                    img { src: "{image.secure_url}", alt: "uploaded image" }
                    button {
                        class: "btn btn-danger btn-small",
                        disabled: uploading(),
                        onclick: handle_delete,
                        "Remove"
                    }
                }
            } else {
                label {
                    class: "image-dropzone",
                    if uploading() { "Uploading..." } else { "Choose an image" }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        style: "display: none",
                        disabled: uploading(),
                        onchange: handle_file,
                    }
                }
            }

            if let Some(err) = error() {
                p { class: "form-error", "{err}" }
            }
        }
    }
}

/// Browser-direct unsigned upload.
#[cfg(target_arch = "wasm32")]
async fn upload_to_cloudinary(
    params: &api::media::UploadParams,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<UploadedImage, String> {
    let form = reqwest::multipart::Form::new()
        .text("upload_preset", params.upload_preset.clone())
        .part(
            "file",
            reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string()),
        );

    let response: serde_json::Value = reqwest::Client::new()
        .post(api::media::upload_url(&params.cloud_name))
        .multipart(form)
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;

    match (
        response.get("secure_url").and_then(|v| v.as_str()),
        response.get("public_id").and_then(|v| v.as_str()),
    ) {
        (Some(url), Some(id)) => Ok(UploadedImage {
            secure_url: url.to_string(),
            public_id: id.to_string(),
        }),
        _ => Err(response
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .unwrap_or("upload rejected")
            .to_string()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn upload_to_cloudinary(
    _params: &api::media::UploadParams,
    _file_name: &str,
    _bytes: Vec<u8>,
) -> Result<UploadedImage, String> {
    Err("uploads only run in the browser".to_string())
}

/// Deletion through the signed same-origin route.
#[cfg(target_arch = "wasm32")]
async fn delete_via_server(public_id: &str) -> Result<(), String> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .ok_or_else(|| "no window origin".to_string())?;

    let response: api::media::DeleteResponse = reqwest::Client::new()
        .post(format!("{origin}/api/media/delete"))
        .json(&api::media::DeleteRequest {
            public_id: public_id.to_string(),
        })
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())?;

    if response.success {
        Ok(())
    } else {
        Err(response.message)
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn delete_via_server(_public_id: &str) -> Result<(), String> {
    Err("deletion only runs in the browser".to_string())
}
