use crate::ids::IdGenerator;
use crate::models::LinkTable;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub static_dir: PathBuf,
    /// Overrides the request Host header when building short URLs.
    pub base_url: Option<String>,
    pub links: Arc<Mutex<LinkTable>>,
    pub ids: Arc<IdGenerator>,
}

impl AppState {
    pub fn new(
        data_path: PathBuf,
        static_dir: PathBuf,
        base_url: Option<String>,
        links: LinkTable,
        ids: IdGenerator,
    ) -> Self {
        Self {
            data_path,
            static_dir,
            base_url,
            links: Arc::new(Mutex::new(links)),
            ids: Arc::new(ids),
        }
    }
}
