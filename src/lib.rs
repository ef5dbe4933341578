pub mod app;
pub mod codes;
pub mod errors;
pub mod handlers;
pub mod ids;
pub mod models;
pub mod qr;
pub mod state;
pub mod static_files;
pub mod storage;
pub mod ui;

pub use app::router;
pub use ids::IdGenerator;
pub use state::AppState;
pub use storage::{load_links, resolve_data_path, resolve_static_dir};
