use std::sync::Arc;

use crate::clash::ClashClient;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ClashClient>,
}
