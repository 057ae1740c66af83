use std::sync::Arc;

use neighborly_classifier::ZeroShotClassifier;
use neighborly_db::ExchangeStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: ExchangeStore,
    pub classifier: ZeroShotClassifier,
}
