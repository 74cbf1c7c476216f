use crate::observability::metrics::Metrics;
use crate::store::Store;

pub struct AppState {
    pub store: Store,
    pub metrics: Metrics,
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

impl AppState {
    pub fn new(jwt_secret: impl Into<String>, token_ttl_minutes: i64) -> Self {
        Self {
            store: Store::new(),
            metrics: Metrics::new(),
            jwt_secret: jwt_secret.into(),
            token_ttl_minutes,
        }
    }
}
