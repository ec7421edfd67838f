use std::sync::Arc;

use common::id::IdGenerator;
use common::store::DocumentStore;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn DocumentStore>,
    pub ids: Arc<dyn IdGenerator>,
}
