use crate::constants::{DEFAULT_MIME_TYPE, DOWNLOAD_PREFIX};
use crate::error::ImageError;
use crate::record::GeneratedImage;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;

pub async fn encode_image(image_path: &str) -> Result<String, ImageError> {
    let buffer = fs::read(image_path)
        .await
        .map_err(|source| ImageError::FileRead {
            path: image_path.to_string(),
            source,
        })?;
    Ok(base64::encode(buffer))
}

pub fn guess_mime_type(image_path: &str) -> &'static str {
    let extension = Path::new(image_path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        _ => DEFAULT_MIME_TYPE,
    }
}

/// Reads a local image into a `data:<mime>;base64,...` string.
pub async fn to_data_uri(image_path: &str) -> Result<String, ImageError> {
    let encoded = encode_image(image_path).await?;
    log::debug!("Loaded {} ({} base64 chars)", image_path, encoded.len());
    Ok(format!(
        "data:{};base64,{}",
        guess_mime_type(image_path),
        encoded
    ))
}

/// Splits a data URI into mime type and payload. A string with no
/// `data:` prefix is taken as bare base64 of a PNG.
pub fn split_data_uri(input: &str) -> (String, String) {
    if let Some(rest) = input.strip_prefix("data:") {
        if let Some((header, payload)) = rest.split_once(',') {
            let mime = header.split(';').next().unwrap_or("").trim();
            let mime = if mime.is_empty() { DEFAULT_MIME_TYPE } else { mime };
            return (mime.to_string(), payload.to_string());
        }
    }
    (DEFAULT_MIME_TYPE.to_string(), input.to_string())
}

pub fn decode_data_uri(input: &str) -> Result<Vec<u8>, ImageError> {
    let rest = input.strip_prefix("data:").ok_or(ImageError::InvalidDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(ImageError::InvalidDataUri)?;
    if !header.ends_with(";base64") {
        return Err(ImageError::InvalidDataUri);
    }
    Ok(base64::decode(payload)?)
}

pub fn download_file_name(timestamp_millis: i64) -> String {
    format!("{}-{}.png", DOWNLOAD_PREFIX, timestamp_millis)
}

/// Writes the record's image into `dir` under a timestamped name.
pub async fn save_image(image: &GeneratedImage, dir: &Path) -> Result<PathBuf, ImageError> {
    let bytes = decode_data_uri(&image.url)?;
    fs::create_dir_all(dir).await?;

    let path = dir.join(download_file_name(Utc::now().timestamp_millis()));
    fs::write(&path, bytes).await?;
    log::info!("Saved image {} to {}", image.id, path.display());
    Ok(path)
}
