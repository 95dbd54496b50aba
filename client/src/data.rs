use menno_shared::{ARROWS_DOCUMENT, COLONIES_DOCUMENT, FeatureStore};

use crate::config::document_url;

/// Fetch both feature documents concurrently and build the store.
/// Fails as a whole if either request or parse fails.
pub async fn load_feature_store() -> Result<FeatureStore, String> {
    let colonies_url = document_url(COLONIES_DOCUMENT);
    let arrows_url = document_url(ARROWS_DOCUMENT);
    let (colonies, arrows) =
        futures::future::try_join(fetch_document(&colonies_url), fetch_document(&arrows_url))
            .await?;
    FeatureStore::from_json(&colonies, &arrows)
}

async fn fetch_document(url: &str) -> Result<String, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch error for {url}: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {} for {url}", resp.status()));
    }

    resp.text()
        .await
        .map_err(|e| format!("read error for {url}: {e}"))
}
