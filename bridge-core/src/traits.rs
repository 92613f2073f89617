//! Abstraction Traits für die serielle Verbindung
//!
//! Diese Traits definieren Schnittstellen für den Geräte-Zugriff
//! ohne konkrete Implementierung.

use thiserror::Error;

use crate::types::LedAction;

/// Fehler-Typ für Schreib-Operationen auf der seriellen Verbindung
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("serial write failed: {0}")]
    WriteFailed(String),
}

/// Trait für die Kommando-Seite der seriellen Verbindung
///
/// Abstrahiert das Schreiben der LED-Kommandos an den Mikrocontroller.
///
/// # Implementierungen
/// - **Production:** SerialCommandLink (serialport-Handle)
/// - **Testing:** MockCommandLink (in-memory Mock)
pub trait CommandLink: Send {
    /// Schreibt genau das ASCII-Kommando der Action auf die Verbindung
    ///
    /// # Fehlerbehandlung
    /// Gibt `LinkError::WriteFailed` zurück wenn der Geräte-Zugriff fehlschlägt
    fn write_command(&mut self, action: LedAction) -> Result<(), LinkError>;
}
