// ============================================================================
// CMS API - Image upload
// File: crates/cms-api/src/handlers/upload.rs
// ============================================================================

use axum::extract::{Multipart, State};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use cms_shared::config::{AppConfig, UploadSettings};

use crate::error::ApiError;
use crate::response::{created, Created};

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

/// POST /api/admin/upload - multipart form with a `file` field
pub async fn upload_image(
    State(config): State<Arc<AppConfig>>,
    mut multipart: Multipart,
) -> Created<UploadResponse> {
    let settings = &config.uploads;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| ApiError::BadRequest("filename required".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
        file = Some((filename, data.to_vec()));
    }

    let (filename, data) = file.ok_or_else(|| ApiError::BadRequest("file required".to_string()))?;
    if data.is_empty() {
        return Err(ApiError::BadRequest("Uploaded file is empty".to_string()));
    }
    if data.len() as u64 > max_bytes(settings) {
        return Err(ApiError::BadRequest(format!(
            "File exceeds {} MB",
            settings.max_size_mb
        )));
    }

    let (extension, content_type) = image_type(&filename)?;
    let stored_name = format!("{}.{}", Uuid::new_v4(), extension);
    let target = PathBuf::from(&settings.dir).join(&stored_name);

    tokio::fs::create_dir_all(&settings.dir).await.map_err(|e| {
        error!("Cannot create upload dir {}: {}", settings.dir, e);
        ApiError::InternalError(format!("Upload directory unavailable: {}", e))
    })?;
    tokio::fs::write(&target, &data).await.map_err(|e| {
        error!("Cannot write {}: {}", target.display(), e);
        ApiError::InternalError(format!("Failed to store file: {}", e))
    })?;

    info!("Stored upload {} as {} ({} bytes)", filename, stored_name, data.len());

    Ok(created(UploadResponse {
        url: format!("{}/{}", settings.public_path.trim_end_matches('/'), stored_name),
        file_name: stored_name,
        content_type,
        size: data.len(),
    }))
}

pub fn max_bytes(settings: &UploadSettings) -> u64 {
    settings.max_size_mb * 1024 * 1024
}

/// Lower-cased extension and MIME type, accepted only for images.
fn image_type(filename: &str) -> Result<(String, String), ApiError> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .ok_or_else(|| ApiError::BadRequest(format!("File has no extension: {}", filename)))?;

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ApiError::BadRequest(format!(
            "Unsupported file type: .{}",
            extension
        )));
    }

    let mime = mime_guess::from_ext(&extension)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .ok_or_else(|| ApiError::BadRequest(format!("Not an image: .{}", extension)))?;

    Ok((extension, mime.essence_str().to_string()))
}
