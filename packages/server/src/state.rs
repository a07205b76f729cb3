use std::sync::Arc;

use common::storage::BlobStore;
use sea_orm::DatabaseConnection;

use crate::config::AppConfig;
use crate::providers::{ImageProvider, TextProvider};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
    pub storage: Arc<dyn BlobStore>,
    pub text: Arc<dyn TextProvider>,
    pub image: Arc<dyn ImageProvider>,
    /// Shared client for fetching generated images.
    pub http: reqwest::Client,
}
