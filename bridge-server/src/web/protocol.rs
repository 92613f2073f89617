// Web-Protokoll-Definitionen
// Definiert die JSON-Nachrichten für Client ↔ Gateway Kommunikation

use serde::{Deserialize, Serialize};

/// Antwort auf `GET /status`
///
/// Die Feldnamen sind der Wire-Contract des bestehenden Web-Clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub touch_detected: bool,
    pub touch_detected2: bool,
}

/// Request-Body von `POST /led`
///
/// `action` ist einer der vier Kurz-Codes ("ON", "OFF", "GON", "GOFF");
/// alles andere wird ohne Kommando quittiert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedRequest {
    pub action: String,
}

/// Antwort auf `POST /led`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedResponse {
    pub status: &'static str,
}

impl LedResponse {
    /// Kommando quittiert (auch bei nicht erkannter Action)
    pub const fn success() -> Self {
        Self { status: "success" }
    }

    /// Schreiben auf die serielle Verbindung fehlgeschlagen
    pub const fn error() -> Self {
        Self { status: "error" }
    }
}
