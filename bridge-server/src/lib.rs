// Library-Root: Wiederverwendbare Logik und Module

// Module
pub mod config;
pub mod hal;
pub mod tasks;
pub mod web;

// Re-exports von bridge-core
pub use bridge_core::{
    decode_sensor_line, CommandLink, LedAction, LinkError, SensorEvent, TouchSensor, TouchState,
};

// Re-exports der Task-Bausteine für main.rs und die Tests
pub use tasks::{build_router, http_server_task, AppState};
