// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt den Zugriff auf die serielle Verbindung
// hinter dem CommandLink-Trait, um Testbarkeit zu ermöglichen.

pub mod serial_link;

pub use serial_link::{open_serial_port, SerialCommandLink};

#[cfg(test)]
pub use serial_link::MockCommandLink;
