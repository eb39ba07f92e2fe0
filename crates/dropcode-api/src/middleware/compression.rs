//! Response compression layer.

use tower_http::compression::CompressionLayer;

/// Builds a gzip compression layer for the JSON routes.
///
/// The router keeps it off `/api/download/{code}`: downloads are raw bytes
/// with an exact `Content-Length`.
pub fn build_compression_layer() -> CompressionLayer {
    CompressionLayer::new()
}
