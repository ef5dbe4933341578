use crate::errors::AppError;
use crate::models::LinkTable;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("SHORTLINK_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/links.json")
}

pub fn resolve_static_dir() -> PathBuf {
    if let Ok(path) = env::var("SHORTLINK_STATIC_DIR") {
        return PathBuf::from(path);
    }

    PathBuf::from("static")
}

pub async fn load_links(path: &Path) -> LinkTable {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(links) => links,
            Err(err) => {
                error!("failed to parse link file: {err}");
                LinkTable::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => LinkTable::default(),
        Err(err) => {
            error!("failed to read link file: {err}");
            LinkTable::default()
        }
    }
}

pub async fn persist_links(path: &Path, links: &LinkTable) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(links).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LinkRecord;

    fn scratch_path(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("shortlink_{}_{}.json", std::process::id(), name));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_table() {
        let table = load_links(Path::new("/nonexistent/links.json")).await;
        assert!(table.links.is_empty());
    }

    #[tokio::test]
    async fn persisted_links_load_back() {
        let path = scratch_path("roundtrip");
        let mut table = LinkTable::default();
        table.links.insert(
            "aB3".to_owned(),
            LinkRecord {
                long_url: "https://example.com".to_owned(),
                clicks: 7,
                created_at: "2026-01-01T00:00:00+00:00".to_owned(),
            },
        );

        persist_links(&path, &table).await.expect("persist");
        let loaded = load_links(&path).await;
        let _ = fs::remove_file(&path).await;

        let record = loaded.links.get("aB3").expect("record");
        assert_eq!(record.long_url, "https://example.com");
        assert_eq!(record.clicks, 7);
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty_table() {
        let path = scratch_path("corrupt");
        fs::write(&path, b"{not json").await.expect("write");
        let loaded = load_links(&path).await;
        let _ = fs::remove_file(&path).await;
        assert!(loaded.links.is_empty());
    }
}
