use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::cms::LandingContent;
use crate::error::AppError;
use crate::state::SharedState;

const DEFAULT_HERO_TITLE: &str = "Ship a landing + waitlist in a day, not a week.";
const DEFAULT_HERO_SUBTITLE: &str = "Collect leads with basic spam prevention, optional storage, \
notifications, analytics, and a minimal admin view.";

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    hero_title: String,
    hero_subtitle: String,
}

pub async fn index(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let content = match &state.cms {
        Some(cms) => cms.landing_content().await.unwrap_or_default(),
        None => LandingContent::default(),
    };

    let template = LandingTemplate {
        hero_title: content
            .hero_title
            .unwrap_or_else(|| DEFAULT_HERO_TITLE.to_string()),
        hero_subtitle: content
            .hero_subtitle
            .unwrap_or_else(|| DEFAULT_HERO_SUBTITLE.to_string()),
    };

    Ok(Html(template.render().unwrap_or_default()))
}
