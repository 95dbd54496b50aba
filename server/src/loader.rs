use std::path::{Path, PathBuf};

use menno_shared::{ARROWS_DOCUMENT, COLONIES_DOCUMENT, FeatureStore};
use tracing::info;

/// Locations of the two source documents. The names are fixed so the files
/// loaded here are the ones `/data` serves to the client.
#[derive(Debug, Clone)]
pub struct DocumentPaths {
    pub colonies: PathBuf,
    pub arrows: PathBuf,
}

impl DocumentPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            colonies: dir.join(COLONIES_DOCUMENT),
            arrows: dir.join(ARROWS_DOCUMENT),
        }
    }
}

/// Read both documents concurrently and build the store only once both parse.
pub async fn load(paths: &DocumentPaths) -> Result<FeatureStore, String> {
    let (colonies, arrows) = tokio::try_join!(read(&paths.colonies), read(&paths.arrows))?;
    let store = FeatureStore::from_json(&colonies, &arrows)?;

    info!(
        colonies = store.colonies().len(),
        arrows = store.arrows().len(),
        "loaded feature documents"
    );
    Ok(store)
}

async fn read(path: &Path) -> Result<String, String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("read error for {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLONIES: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "geometry": null, "properties": {"Name": "Menno", "Est_date": 1927}}
    ]}"#;
    const ARROWS: &str = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "geometry": null, "properties": {"Est-Year": 1927}},
        {"type": "Feature", "geometry": null, "properties": {"Est-Year": 1930}}
    ]}"#;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("menno-loader-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[tokio::test]
    async fn loads_both_documents() {
        let dir = scratch_dir("ok");
        std::fs::write(dir.join(COLONIES_DOCUMENT), COLONIES).expect("write colonies");
        std::fs::write(dir.join(ARROWS_DOCUMENT), ARROWS).expect("write arrows");

        let paths = DocumentPaths::in_dir(&dir);
        let store = load(&paths).await.expect("documents should load");
        assert_eq!(store.colonies().len(), 1);
        assert_eq!(store.arrows().len(), 2);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn missing_document_fails_the_whole_load() {
        let dir = scratch_dir("missing");
        std::fs::write(dir.join(COLONIES_DOCUMENT), COLONIES).expect("write colonies");

        let paths = DocumentPaths::in_dir(&dir);
        let err = load(&paths).await.expect_err("arrows file is missing");
        assert!(err.contains(ARROWS_DOCUMENT), "unexpected error: {err}");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn malformed_document_fails_the_whole_load() {
        let dir = scratch_dir("malformed");
        std::fs::write(dir.join(COLONIES_DOCUMENT), "{").expect("write colonies");
        std::fs::write(dir.join(ARROWS_DOCUMENT), ARROWS).expect("write arrows");

        let paths = DocumentPaths::in_dir(&dir);
        let err = load(&paths).await.expect_err("colonies file is malformed");
        assert!(err.starts_with("parse error"), "unexpected error: {err}");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
