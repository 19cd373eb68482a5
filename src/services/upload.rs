//! Transient upload store.
//!
//! The dashboard never persists images; it holds them as object URLs
//! for the lifetime of the session. This service does the same in
//! memory: bytes go into the directory under a `mem://` handle, and a
//! configurable delay stands in for the upload spinner the form shows.

use std::fmt::Write;
use std::time::Duration;

use rand::Rng;
use tracing::info;
use uuid::Uuid;

use crate::models::StoredUpload;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("upload not found: {0}")]
    NotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
}

impl crate::error::ErrorCode for UploadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_UPLOAD_NOT_FOUND",
            Self::Validation(_) => "E_VALIDATION",
        }
    }
}

fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a `mem://` handle with a random 16-byte hex token.
fn generate_handle() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    format!("mem://{}", bytes_to_hex(&bytes))
}

/// Store an attachment and return its record.
///
/// Sleeps for the configured simulated delay before storing.
///
/// # Errors
///
/// Returns `Validation` for an empty payload or blank filename.
pub async fn store_upload(
    state: &AppState,
    filename: &str,
    content_type: &str,
    data: Vec<u8>,
) -> Result<StoredUpload, UploadError> {
    if filename.trim().is_empty() {
        return Err(UploadError::Validation("filename is required".into()));
    }
    if data.is_empty() {
        return Err(UploadError::Validation("upload is empty".into()));
    }

    if state.config.upload_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.upload_delay_ms)).await;
    }

    let upload = StoredUpload {
        id: Uuid::new_v4(),
        url: generate_handle(),
        filename: filename.to_owned(),
        content_type: content_type.to_owned(),
        size_bytes: data.len(),
        uploaded_at: time::OffsetDateTime::now_utc(),
        data,
    };

    let mut directory = state.directory.write().await;
    directory.uploads.push(upload.clone());
    info!(upload_id = %upload.id, size = upload.size_bytes, "upload stored");
    Ok(upload)
}

/// Fetch an upload record by id.
///
/// # Errors
///
/// Returns `NotFound` if no upload has that id.
pub async fn get_upload(state: &AppState, id: Uuid) -> Result<StoredUpload, UploadError> {
    let directory = state.directory.read().await;
    directory
        .uploads
        .iter()
        .find(|upload| upload.id == id)
        .cloned()
        .ok_or(UploadError::NotFound(id))
}

/// Drop an upload, releasing its bytes.
///
/// # Errors
///
/// Returns `NotFound` if no upload has that id.
pub async fn delete_upload(state: &AppState, id: Uuid) -> Result<(), UploadError> {
    let mut directory = state.directory.write().await;
    let before = directory.uploads.len();
    directory.uploads.retain(|upload| upload.id != id);
    if directory.uploads.len() == before {
        return Err(UploadError::NotFound(id));
    }
    info!(upload_id = %id, "upload deleted");
    Ok(())
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
