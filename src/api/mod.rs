mod action;
mod data_controller;
mod drag_zoom_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod json_contract;
mod pan_controller;
mod plugin_dispatch;
mod plugin_registry;
mod range_controller;
mod series_controller;
mod validation;
mod visible_window_access;

pub use action::ViewportAction;
pub use engine::{ViewportEngine, ZoomState};
pub use engine_config::ViewportEngineConfig;
pub use engine_snapshot::ViewportSnapshot;
pub use json_contract::{VIEWPORT_SNAPSHOT_JSON_SCHEMA_V1, ViewportSnapshotJsonContractV1};

pub use crate::extensions::{PluginContext, PluginEvent, ViewportPlugin};
