// Web-Modul für das HTTP Gateway
// Organisiert Protokoll-Typen und die eingebettete HTML-Seite

pub mod protocol;

// HTML-Datei zur Compile-Zeit einbinden
// Die Datei wird direkt ins Binary eingebettet
pub const INDEX_HTML: &str = include_str!("index.html");
