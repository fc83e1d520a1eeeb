//! Cross-origin resource sharing policy.

use tower_http::cors::{Any, CorsLayer};

/// Permits cross-origin requests from any origin, with any method and header.
///
/// Browsers on any host may call every endpoint; there is no allow-list.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
