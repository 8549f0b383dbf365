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
//! Binary that starts the campus page controller inside the browser.
//!
//! Native builds have no document to drive and only explain how to build.

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_NOTICE: &str = "campus-ui drives a browser page; compile it for wasm32-unknown-unknown and load the bundle from the site.\n";

#[cfg(target_arch = "wasm32")]
fn main() {
    campus_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    std::io::stderr().write_all(NATIVE_NOTICE.as_bytes())
}
