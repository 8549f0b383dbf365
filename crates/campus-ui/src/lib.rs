#![forbid(unsafe_code)]
#![deny(
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Campus site page behavior controller.
//!
//! Navigation menus, smooth anchor scrolling, the header shadow, the search
//! stub, scroll reveal, card hover, category highlight and the school theme
//! switcher. Decisions live in the DOM-free [`core`] modules; the wasm-only
//! adapter paints them onto the document.

pub mod config;
pub mod core;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
