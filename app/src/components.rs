//! Building blocks of the landing page.
//!
//! `header` carries all of the page's interaction state; the section
//! components are static markup driven by [`crate::content`].

pub mod amenities;
pub mod concept;
pub mod contact;
pub mod downloads;
pub mod error_template;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
