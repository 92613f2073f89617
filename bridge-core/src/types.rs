//! Core Types für die Serial-Bridge
//!
//! Datenstrukturen ohne Serial- oder HTTP-Dependencies

use core::sync::atomic::{AtomicBool, Ordering};

/// Die beiden Touch-Sensoren am Mikrocontroller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchSensor {
    One,
    Two,
}

/// Sensor Event - dekodierte Zeile vom Mikrocontroller
///
/// Wird vom Serial-Reader erzeugt und auf den TouchState angewendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorEvent {
    pub sensor: TouchSensor,
    pub detected: bool,
}

/// Geteilter Sensor-Zustand: ein Flag pro Touch-Sensor
///
/// Wird vom Serial-Reader beschrieben und von den HTTP-Handlern gelesen.
/// Atomics statt blanker Flags, damit Reader-Thread und Request-Handler
/// ohne Lock gleichzeitig zugreifen können.
///
/// Beide Flags starten bei `false` und leben für die Prozess-Laufzeit.
#[derive(Debug, Default)]
pub struct TouchState {
    sensor1: AtomicBool,
    sensor2: AtomicBool,
}

impl TouchState {
    /// Erstellt einen neuen Zustand mit beiden Flags auf `false`
    pub fn new() -> Self {
        Self::default()
    }

    /// Wendet ein dekodiertes Sensor-Event auf den Zustand an
    pub fn apply(&self, event: SensorEvent) {
        let flag = match event.sensor {
            TouchSensor::One => &self.sensor1,
            TouchSensor::Two => &self.sensor2,
        };
        // Relaxed reicht: die beiden Flags stehen in keiner
        // Ordnungsbeziehung zueinander
        flag.store(event.detected, Ordering::Relaxed);
    }

    /// Aktueller Wert von Sensor 1
    pub fn sensor1(&self) -> bool {
        self.sensor1.load(Ordering::Relaxed)
    }

    /// Aktueller Wert von Sensor 2
    pub fn sensor2(&self) -> bool {
        self.sensor2.load(Ordering::Relaxed)
    }

    /// Liest beide Flags als Tupel `(sensor1, sensor2)`
    pub fn snapshot(&self) -> (bool, bool) {
        (self.sensor1(), self.sensor2())
    }
}

/// LED Action für die manuelle Steuerung
///
/// Wird vom HTTP-Handler aus dem Request-Body geparst und als
/// ASCII-Kommando auf die serielle Verbindung geschrieben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedAction {
    RedOn,
    RedOff,
    GreenOn,
    GreenOff,
}

impl LedAction {
    /// Das ASCII-Kommando für den Mikrocontroller (mit Newline-Terminator)
    pub const fn command_bytes(self) -> &'static [u8] {
        match self {
            LedAction::RedOn => b"RED_ON\n",
            LedAction::RedOff => b"RED_OFF\n",
            LedAction::GreenOn => b"GREEN_ON\n",
            LedAction::GreenOff => b"GREEN_OFF\n",
        }
    }
}

impl core::convert::TryFrom<&str> for LedAction {
    type Error = ();

    /// Parst den `action`-String aus dem Web-Protokoll
    ///
    /// Die vier Kurz-Codes sind der Wire-Contract des bestehenden
    /// Web-Clients und dürfen nicht umbenannt werden.
    fn try_from(action: &str) -> Result<Self, Self::Error> {
        match action {
            "ON" => Ok(Self::RedOn),
            "OFF" => Ok(Self::RedOff),
            "GON" => Ok(Self::GreenOn),
            "GOFF" => Ok(Self::GreenOff),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_state_starts_false() {
        let state = TouchState::new();
        assert_eq!(state.snapshot(), (false, false));
    }

    #[test]
    fn test_touch_state_apply_is_independent() {
        let state = TouchState::new();

        state.apply(SensorEvent {
            sensor: TouchSensor::One,
            detected: true,
        });
        assert_eq!(state.snapshot(), (true, false));

        state.apply(SensorEvent {
            sensor: TouchSensor::Two,
            detected: true,
        });
        assert_eq!(state.snapshot(), (true, true));

        state.apply(SensorEvent {
            sensor: TouchSensor::One,
            detected: false,
        });
        assert_eq!(state.snapshot(), (false, true));
    }

    #[test]
    fn test_led_action_command_bytes() {
        assert_eq!(LedAction::RedOn.command_bytes(), b"RED_ON\n");
        assert_eq!(LedAction::RedOff.command_bytes(), b"RED_OFF\n");
        assert_eq!(LedAction::GreenOn.command_bytes(), b"GREEN_ON\n");
        assert_eq!(LedAction::GreenOff.command_bytes(), b"GREEN_OFF\n");
    }

    #[test]
    fn test_led_action_try_from() {
        assert_eq!(LedAction::try_from("ON"), Ok(LedAction::RedOn));
        assert_eq!(LedAction::try_from("OFF"), Ok(LedAction::RedOff));
        assert_eq!(LedAction::try_from("GON"), Ok(LedAction::GreenOn));
        assert_eq!(LedAction::try_from("GOFF"), Ok(LedAction::GreenOff));
    }

    #[test]
    fn test_led_action_try_from_invalid() {
        assert_eq!(LedAction::try_from("BLINK"), Err(()));
        assert_eq!(LedAction::try_from("on"), Err(()));
        assert_eq!(LedAction::try_from(""), Err(()));
    }
}
