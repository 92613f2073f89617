//! Bridge Core - Platform-agnostic Logic und Traits
//!
//! Diese Crate enthält KEINE Serial-, HTTP- oder Async-Dependencies.
//! Sie definiert nur Typen, Traits und Pure Functions.

pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use logic::decode_sensor_line;
pub use traits::{CommandLink, LinkError};
pub use types::{LedAction, SensorEvent, TouchSensor, TouchState};
