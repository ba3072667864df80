use crate::{application::classify_text::use_case::ToxicityService, config::Config};
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn ToxicityService>,
    pub config: Config,
    pub started_at: DateTime<Utc>,
}
