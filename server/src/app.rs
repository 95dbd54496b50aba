use std::path::Path;

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, header},
    middleware::{self, Next},
    response::Response,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;

use crate::routes;
use crate::state::AppState;

/// Cache policy for the feature documents and every API answer derived from them.
pub(crate) const DATA_CACHE_CONTROL: &str = "public, max-age=3600";
const IMMUTABLE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

pub(crate) fn build_app(state: AppState) -> Router {
    let static_assets = Router::new()
        .fallback_service(
            ServeDir::new(&state.static_dir)
                .precompressed_br()
                .precompressed_gzip(),
        )
        .layer(middleware::from_fn(set_static_cache_control));

    let app = Router::new()
        .route("/api/health", axum::routing::get(routes::api::health))
        .route("/api/years", axum::routing::get(routes::api::years))
        .route("/api/visible", axum::routing::get(routes::api::visible))
        .nest_service("/data", ServeDir::new(&state.data_dir))
        .layer(middleware::from_fn(set_static_cache_control));

    app.layer(CompressionLayer::new())
        .fallback_service(static_assets)
        .with_state(state)
}

async fn set_static_cache_control(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let mut response = next.run(request).await;

    if response.status().is_success()
        && let Some(cache_control) = cache_control_for_path(&path)
    {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(cache_control),
        );
    }

    response
}

fn cache_control_for_path(path: &str) -> Option<&'static str> {
    if path.starts_with("/data/") {
        Some(DATA_CACHE_CONTROL)
    } else if is_fingerprinted_bundle(path) {
        Some(IMMUTABLE_CACHE_CONTROL)
    } else {
        None
    }
}

/// Trunk names bundle outputs `<crate>-<hex hash>[_bg].<ext>`.
fn is_fingerprinted_bundle(path: &str) -> bool {
    let file = Path::new(path);
    let is_bundle_ext = file
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "wasm" | "js" | "css"));
    let Some(stem) = file.file_stem().and_then(|stem| stem.to_str()) else {
        return false;
    };

    is_bundle_ext
        && stem
            .trim_end_matches("_bg")
            .rsplit_once('-')
            .is_some_and(|(_, hash)| {
                hash.len() >= 8 && hash.chars().all(|c| c.is_ascii_hexdigit())
            })
}
