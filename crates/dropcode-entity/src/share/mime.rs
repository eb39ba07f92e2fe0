//! MIME type ↔ storage extension tables.
//!
//! The upload side maps a client-supplied type hint to an extension; the
//! download side maps the extension found on disk back to a content type.
//! The stored MIME hint itself is never persisted.

/// Extension used when the type hint is not in the table.
pub const FALLBACK_EXTENSION: &str = ".bin";

/// Content type served for extensions not in the table.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension of text share artifacts.
pub const TEXT_EXTENSION: &str = ".txt";

/// Order in which extensions are probed when resolving a file entry.
pub const PROBE_ORDER: [&str; 12] = [
    ".jpg", ".png", ".gif", ".webp", ".txt", ".pdf", ".json", ".js", ".ts", ".css", ".html",
    ".bin",
];

/// Map a MIME type hint to a storage extension (including the dot).
pub fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        "image/webp" => ".webp",
        "text/plain" => ".txt",
        "application/pdf" => ".pdf",
        "application/json" => ".json",
        "text/javascript" => ".js",
        "text/typescript" => ".ts",
        "text/css" => ".css",
        "text/html" => ".html",
        _ => FALLBACK_EXTENSION,
    }
}

/// Map a stored file name (or bare extension) to the content type to serve.
pub fn content_type_for_path(path: &str) -> &'static str {
    let Some((_, ext)) = path.rsplit_once('.') else {
        return FALLBACK_CONTENT_TYPE;
    };
    match ext.to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "js" => "text/javascript",
        "ts" => "text/typescript",
        "css" => "text/css",
        "html" => "text/html",
        _ => FALLBACK_CONTENT_TYPE,
    }
}
