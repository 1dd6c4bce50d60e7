use axum::response::IntoResponse;

use crate::{
    media::{GALLERY, MediaItem},
    template::{Layout, Template},
};

#[derive(askama::Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate<'a> {
    pub layout: &'a Layout,
    pub items: &'a [MediaItem],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(GalleryTemplate {
        layout: &template.layout,
        items: &GALLERY,
    })
}
