//! Hip-Hop Dancer landing page: hero, flip-card event grid and call to action.
//! Rust + Yew, built to WASM with Trunk.

pub mod card;
pub mod config;
pub mod event;
pub mod page;
pub mod ui;

pub use page::{App, AppProps};
