// Views, content, and interaction state for the ONE PARK PEAK landing page.
use crate::components::error_template;
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod appearance;
mod components;
pub mod content;
mod landing;
pub mod registration;
pub mod state;
pub mod viewport;

pub use components::error_template::AppError;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let stylesheet = format!("/pkg/{}.css", options.output_name);
    let html_comp = html().lang("zh-Hant-HK").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href(stylesheet)
                    .build(),
            ),
        )),
        body().class("bg-[#F9F9F7] scroll-smooth").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

/// The whole application: one route, anchors for everything else.
#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <FlatRoutes fallback=|| {
                let mut outside_errors = Errors::default();
                outside_errors.insert_with_default_key(AppError::NotFound);
                error_template::component(Some(outside_errors), None)
            }>
                <Route path=StaticSegment("") view=landing::component/>
            </FlatRoutes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        let options = LeptosOptions::builder().output_name("peak").build();
        let shell_view = shell(options);
        drop(shell_view);
    }

    #[test]
    fn test_component_function_signatures() {
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;

        let options = LeptosOptions::builder().output_name("peak").build();
        assert_eq!(&*options.output_name, "peak");
    }
}
