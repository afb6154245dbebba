use std::sync::Arc;

use crate::cohere::TextGenerator;
use crate::store::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub generator: Arc<dyn TextGenerator>,
}
