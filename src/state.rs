use std::sync::Arc;

use crate::cms::SanityClient;
use crate::config::Config;
use crate::notify::NotifierRegistry;
use crate::rate_limit::WaitlistRateLimiter;
use crate::store::Stores;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub stores: Stores,
    pub notifiers: NotifierRegistry,
    pub cms: Option<SanityClient>,
    pub limiter: WaitlistRateLimiter,
}
