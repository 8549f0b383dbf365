//! Core, DOM-free policy for the page behavior controller.
pub mod category;
pub mod nav;
pub mod prefs;
pub mod reveal;
pub mod scroll;
pub mod search;
pub mod state;
pub mod theme;
