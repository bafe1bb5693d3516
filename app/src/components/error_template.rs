//! Error view shown for anything other than the landing page.
//!
//! On the server it also sets the response status from the first [`AppError`].

use http::status::StatusCode;
use leptos::{
    html::{div, h1, p},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Pulls the [`AppError`]s out of an error bag, defaulting to `NotFound`
/// when nothing recognisable was recorded.
fn app_errors(errors: Errors) -> Vec<AppError> {
    let found: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect();
    if found.is_empty() {
        vec![AppError::NotFound]
    } else {
        found
    }
}

pub fn component(outside_errors: Option<Errors>, errors: Option<RwSignal<Errors>>) -> impl IntoView {
    let errors = outside_errors
        .or_else(|| errors.map(|signal| signal.get_untracked()))
        .map(app_errors)
        .unwrap_or_else(|| vec![AppError::NotFound]);
    let primary = errors.first().cloned().unwrap_or(AppError::NotFound);

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(primary.status_code());
        }
    }

    div()
        .class("min-h-screen grid place-content-center px-4 bg-[#F9F9F7] text-[#2C2C2C] text-center")
        .child((
            p().class("text-sm tracking-[0.3em] uppercase mb-4 text-[#C5A065]")
                .child(primary.status_code().as_u16().to_string()),
            h1().class("text-3xl font-serif mb-8").child(primary.to_string()),
            div().class("text-xs tracking-widest uppercase border-b border-[#2C2C2C] pb-1 hover:text-[#C5A065] hover:border-[#C5A065] transition-colors").child(
                A(AProps::builder()
                    .href("/")
                    .children(ToChildren::to_children(|| "ONE PARK PEAK"))
                    .build()),
            ),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn empty_error_bag_defaults_to_not_found() {
        assert_eq!(app_errors(Errors::default()), [AppError::NotFound]);
    }

    #[test]
    fn recorded_errors_are_kept() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);
        assert_eq!(app_errors(errors), [AppError::NotFound]);
    }
}
