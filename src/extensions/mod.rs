//! Optional hooks layered on top of the viewport engine.

pub mod plugins;

pub use plugins::{PluginContext, PluginEvent, ViewportPlugin};
