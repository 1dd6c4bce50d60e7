use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use chrono::{Datelike, Utc};
use std::convert::Infallible;

use crate::config::SiteConfig;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

/// Values every page layout needs.
#[derive(Debug, Clone)]
pub struct Layout {
    pub site: SiteConfig,
    pub year: i32,
    pub is_dev: bool,
}

pub struct Template {
    pub layout: Layout,
}

impl Template {
    pub fn new(site: SiteConfig) -> Self {
        Self {
            layout: Layout {
                site,
                year: Utc::now().year(),
                is_dev: cfg!(debug_assertions),
            },
        }
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template. Error: {err}");

                (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(state.config.site.clone()))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate<'a> {
    pub layout: &'a Layout,
}
