use std::sync::Arc;

use dictamail::Normalizer;

#[derive(Clone)]
pub struct AppState {
    pub normalizer: Arc<Normalizer>,
}

impl AppState {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer: Arc::new(normalizer),
        }
    }
}
