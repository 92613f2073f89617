// Projekt-Konfiguration: Konstanten für Serial und HTTP
//
// Die Werte hier sind die Defaults der CLI-Flags in main.rs.

// ============================================================================
// Serial Konfiguration
// ============================================================================

/// Geräte-Pfad der seriellen Verbindung zum Mikrocontroller
pub const DEFAULT_SERIAL_DEVICE: &str = "/dev/ttyUSB1";

/// Baudrate der seriellen Verbindung
/// Muss zur Sketch-Konfiguration auf dem Mikrocontroller passen
pub const SERIAL_BAUD_RATE: u32 = 9600;

/// Read-Timeout der seriellen Verbindung in Sekunden
/// Begrenzt gleichzeitig die Reaktionszeit des Readers auf das Shutdown-Flag
pub const SERIAL_TIMEOUT_SECS: u64 = 1;

/// Wartezeit nach einem Lese-Fehler vor erneutem Versuch in Sekunden
pub const SERIAL_RETRY_DELAY_SECS: u64 = 1;

/// Maximale Zeilenlänge des Readers in Bytes
/// Gültige Sensor-Codes sind ein einzelnes Zeichen; längere Zeilen werden
/// verworfen, damit ein Gerät ohne Newlines den Buffer nicht wachsen lässt
pub const SERIAL_MAX_LINE_BYTES: usize = 64;

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// HTTP-Port des Gateways
/// Der Server lauscht auf allen Interfaces (0.0.0.0)
pub const HTTP_PORT: u16 = 5000;
