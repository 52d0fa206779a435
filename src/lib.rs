//! Extensible hover-tooltip overlay engine for 2D games.
//!
//! For whatever sits under the screen cursor each frame, a dynamic registry
//! of pluggable providers contributes annotation records (text plus optional
//! icon badges), and the layout engine merges them into one stacked,
//! viewport-clamped tooltip box drawn over the game.
//!
//! The engine never names concrete entity types: the host implements
//! [`tooltip::HoverWorld`] with its own terrain/object/character types and
//! adds [`HovertipPlugin`] for that world. Providers are registered per
//! category through the [`tooltip::TooltipRegistry`] resource, usually at
//! startup.

pub mod config;
pub mod constants;
pub mod paths;
pub mod theme;
pub mod tooltip;

pub use tooltip::HovertipPlugin;
