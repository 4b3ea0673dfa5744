//! Category wheel & tile drawer.
//!
//! A small interactive widget core: spin a wheel to pick a random category,
//! then draw up to six random word tiles from it. The state machine lives in
//! [`wheel`], the validated configuration in [`category`], and presentation
//! goes through the [`render::Renderer`] boundary.

pub mod category;
pub mod render;
pub mod timer;
pub mod wheel;

#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "wasm")]
pub mod wasm;
