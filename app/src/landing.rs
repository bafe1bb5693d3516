//! The single page of the site, top to bottom.

use leptos::{html::div, prelude::*};
use leptos_meta::{Title, TitleProps};

use crate::{
    components::{amenities, concept, contact, downloads, footer, header, hero},
    viewport::{BrowserViewport, Viewport},
};

pub const TITLE: &str = "柏景峯 ONE PARK PEAK \u{2013} The Pinnacle of Luxury";

pub fn component() -> impl IntoView {
    with_viewport(BrowserViewport)
}

/// The page with its header listening to `viewport`.
pub fn with_viewport<V>(viewport: V) -> impl IntoView
where
    V: Viewport + 'static,
{
    div()
        .class("min-h-screen bg-[#F9F9F7] text-[#2C2C2C] font-sans selection:bg-[#C5A065] selection:text-white")
        .child((
            Title(TitleProps::builder().text(TITLE).build()),
            header::with_viewport(viewport),
            hero::component(),
            concept::component(),
            amenities::component(),
            downloads::component(),
            contact::component(),
            footer::component(),
        ))
}
