use base64::{Engine, engine::general_purpose::STANDARD};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Embeds an uploaded logo as a `data:` URL so it can live inside the record.
/// Content is not inspected; whatever the browser sent is what gets stored.
pub fn to_data_url(data: &[u8], content_type: Option<&str>) -> String {
    let mime = content_type
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_MIME);
    format!("data:{};base64,{}", mime, STANDARD.encode(data))
}
