use adapter::AdminSite;
use axum::extract::FromRef;
use std::sync::Arc;
use storage::Db;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub site: Arc<AdminSite>,
    pub admin_token: String,
    pub admin_capabilities: Vec<String>,
}

impl FromRef<AppState> for Db {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
