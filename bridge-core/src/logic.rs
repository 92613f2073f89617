//! Pure Business Logic Functions
//!
//! Funktionen ohne Serial- oder HTTP-Dependencies (testbar!)

use crate::types::{SensorEvent, TouchSensor};

/// Dekodiert eine Zeile vom Mikrocontroller in ein Sensor-Event
///
/// Der Mikrocontroller sendet Ein-Zeichen-Codes, eine pro Zeile:
///
/// | Zeile | Bedeutung            |
/// |-------|----------------------|
/// | `"1"` | Sensor 1 berührt     |
/// | `"0"` | Sensor 1 losgelassen |
/// | `"3"` | Sensor 2 berührt     |
/// | `"2"` | Sensor 2 losgelassen |
///
/// Umgebender Whitespace (z.B. `\r` vor dem Newline) wird entfernt.
/// Alles andere wird ignoriert und ergibt `None`.
///
/// # Beispiele
///
/// ```
/// # use bridge_core::{decode_sensor_line, SensorEvent, TouchSensor};
/// let event = decode_sensor_line("1\r").unwrap();
/// assert_eq!(event.sensor, TouchSensor::One);
/// assert!(event.detected);
/// assert!(decode_sensor_line("hello").is_none());
/// ```
pub fn decode_sensor_line(line: &str) -> Option<SensorEvent> {
    let event = |sensor, detected| SensorEvent { sensor, detected };

    match line.trim() {
        "1" => Some(event(TouchSensor::One, true)),
        "0" => Some(event(TouchSensor::One, false)),
        "3" => Some(event(TouchSensor::Two, true)),
        "2" => Some(event(TouchSensor::Two, false)),
        _ => None,
    }
}
