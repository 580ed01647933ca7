//! Content-Type detection for static resources.

/// Fallback for unknown or missing extensions.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Returns the Content-Type for a resource path, based on its extension.
///
/// Text types carry an explicit UTF-8 charset.
///
/// ```
/// # use coyote::http::mime::from_path;
/// assert_eq!(from_path("/login.html"), "text/html;charset=utf-8");
/// assert_eq!(from_path("/favicon.ico"), "image/x-icon");
/// ```
pub fn from_path(path: &str) -> &'static str {
    let extension = path
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.contains('/'))
        .unwrap_or("");

    match extension.to_ascii_lowercase().as_str() {
        "html" | "htm" => "text/html;charset=utf-8",
        "css" => "text/css;charset=utf-8",
        "js" => "text/javascript;charset=utf-8",
        "txt" => "text/plain;charset=utf-8",
        "json" => "application/json",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "ico" => "image/x-icon",
        _ => OCTET_STREAM,
    }
}
