use axum::response::IntoResponse;

use crate::{
    components::{
        ALCOHOL_SELECT, Card, FAQS, Faq, PACKAGES, QUOTE_GRID_INPUTS, SERVICES, Select, TextInput,
        VIBE_INPUT,
    },
    media::{HOME_PREVIEW, MediaItem},
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub layout: &'a Layout,
    pub services: &'a [Card],
    pub packages: &'a [Card],
    pub preview: &'a [MediaItem],
    pub faqs: &'a [Faq],
    pub grid_inputs: &'a [TextInput],
    pub vibe_input: &'a TextInput,
    pub alcohol_select: &'a Select,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        layout: &template.layout,
        services: &SERVICES,
        packages: &PACKAGES,
        preview: &HOME_PREVIEW,
        faqs: &FAQS,
        grid_inputs: &QUOTE_GRID_INPUTS,
        vibe_input: &VIBE_INPUT,
        alcohol_select: &ALCOHOL_SELECT,
    })
}
