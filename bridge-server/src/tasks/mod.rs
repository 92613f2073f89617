// Task-Modul: Enthält die beiden langlebigen Tasks der Bridge
//
// Der Serial-Reader läuft als Thread (serialport blockiert),
// der HTTP-Server als tokio-Task. Beide teilen sich den TouchState;
// die Schreib-Seite der seriellen Verbindung gehört den HTTP-Handlern.

pub mod http;
pub mod serial_reader;

// Re-export Tasks für einfachen Import
pub use http::{build_router, get_status, http_server_task, serve_index, set_led, AppState};
pub use serial_reader::{reader_loop, spawn_serial_reader};
