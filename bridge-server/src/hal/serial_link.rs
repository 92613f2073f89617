// Serial Command Link - CommandLink-Implementierungen
//
// Kapselt das serialport-Handle hinter dem CommandLink-Trait
// um Tests mit Mock-Implementierungen zu ermöglichen.

use std::io::Write;
use std::time::Duration;

use bridge_core::{CommandLink, LedAction, LinkError};
use serialport::SerialPort;

use crate::config::SERIAL_TIMEOUT_SECS;

/// Öffnet die serielle Verbindung zum Mikrocontroller
///
/// Die Verbindung wird einmal beim Start geöffnet und lebt für die
/// Prozess-Laufzeit. Über `try_clone()` bekommt der Serial-Reader ein
/// eigenes Lese-Handle, das Original wird die Schreib-Seite.
pub fn open_serial_port(device: &str, baud: u32) -> serialport::Result<Box<dyn SerialPort>> {
    serialport::new(device, baud)
        .timeout(Duration::from_secs(SERIAL_TIMEOUT_SECS))
        .open()
}

/// Production Command Link über die echte serielle Verbindung
///
/// Schreibt pro Action genau das newline-terminierte ASCII-Kommando
/// und flusht danach, damit das Kommando nicht im OS-Buffer hängt.
pub struct SerialCommandLink {
    port: Box<dyn SerialPort>,
}

impl SerialCommandLink {
    pub fn new(port: Box<dyn SerialPort>) -> Self {
        Self { port }
    }
}

impl CommandLink for SerialCommandLink {
    fn write_command(&mut self, action: LedAction) -> Result<(), LinkError> {
        self.port
            .write_all(action.command_bytes())
            .map_err(|e| LinkError::WriteFailed(e.to_string()))?;
        self.port
            .flush()
            .map_err(|e| LinkError::WriteFailed(e.to_string()))
    }
}

// ============================================================================
// Mock Implementation (nur für Tests)
// ============================================================================

#[cfg(test)]
pub struct MockCommandLink {
    /// Zuletzt geschriebene Action (für Assertions in Tests)
    pub last_action: Option<LedAction>,
    /// Anzahl der write_command() Aufrufe
    pub write_count: usize,
    /// Simuliere Fehler beim nächsten write_command()
    pub fail_next_write: bool,
}

#[cfg(test)]
impl MockCommandLink {
    pub fn new() -> Self {
        Self {
            last_action: None,
            write_count: 0,
            fail_next_write: false,
        }
    }
}

#[cfg(test)]
impl CommandLink for MockCommandLink {
    fn write_command(&mut self, action: LedAction) -> Result<(), LinkError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LinkError::WriteFailed("mock failure".into()));
        }

        self.last_action = Some(action);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
