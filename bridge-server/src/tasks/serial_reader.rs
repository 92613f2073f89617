// Serial Reader Task - Liest Sensor-Codes vom Mikrocontroller
use std::io::{ErrorKind, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bridge_core::{decode_sensor_line, TouchState};
use log::{debug, warn};
use serialport::SerialPort;

use crate::config::{SERIAL_MAX_LINE_BYTES, SERIAL_RETRY_DELAY_SECS};

/// Reader Loop - Testbare Logik ohne echte serielle Verbindung
///
/// Liest byteweise von der Verbindung und sammelt bis zum Newline.
/// Jede vollständige Zeile wird dekodiert und auf den TouchState
/// angewendet; nicht erkannte Zeilen werden ignoriert.
///
/// Der generische Parameter `R: Read` ermöglicht:
/// - Echte serielle Verbindung (Box<dyn SerialPort>) im Production-Code
/// - In-Memory Reader (std::io::Cursor) in Tests
///
/// Verhalten an den Rändern:
/// - Read-Timeout: kein neues Byte, nächste Iteration (und damit der
///   nächste Blick auf das Shutdown-Flag)
/// - Sonstiger Lese-Fehler: loggen, kurz warten, weiter versuchen
/// - Stream-Ende (`Ok(0)`): Loop endet, der Sensor-Zustand friert auf
///   seinem letzten Wert ein
/// - Zeile länger als `SERIAL_MAX_LINE_BYTES`: komplett verwerfen,
///   der Buffer bleibt gedeckelt
///
/// # Parameter
/// - `reader`: Lese-Seite der seriellen Verbindung (oder Test-Reader)
/// - `state`: Geteilter Sensor-Zustand
/// - `shutdown`: Flag, das den Loop von außen beendet
pub fn reader_loop<R: Read>(mut reader: R, state: &TouchState, shutdown: &AtomicBool) {
    let mut line_buffer: Vec<u8> = Vec::new();
    let mut line_overflowed = false;
    let mut byte = [0u8; 1];

    while !shutdown.load(Ordering::Relaxed) {
        match reader.read(&mut byte) {
            Ok(0) => {
                warn!("Serial: stream ended, reader stopping");
                break;
            }
            Ok(_) => {
                if byte[0] == b'\n' {
                    if line_overflowed {
                        debug!("Serial: discarding oversized line");
                        line_overflowed = false;
                    } else {
                        handle_line(&line_buffer, state);
                    }
                    line_buffer.clear();
                } else if line_buffer.len() >= SERIAL_MAX_LINE_BYTES {
                    // Länger als jeder gültige Code: Rest der Zeile verwerfen
                    line_overflowed = true;
                    line_buffer.clear();
                } else {
                    line_buffer.push(byte[0]);
                }
            }
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::Interrupted) => {
                // Kein neues Byte innerhalb des Read-Timeouts
            }
            Err(e) => {
                warn!("Serial: read error ({e}), retrying in {SERIAL_RETRY_DELAY_SECS} s");
                thread::sleep(Duration::from_secs(SERIAL_RETRY_DELAY_SECS));
            }
        }
    }

    debug!("Serial: reader loop finished");
}

/// Dekodiert eine vollständige Zeile und wendet sie auf den Zustand an
fn handle_line(raw: &[u8], state: &TouchState) {
    let line = String::from_utf8_lossy(raw);

    match decode_sensor_line(&line) {
        Some(event) => {
            state.apply(event);
            debug!("Serial: sensor event {event:?}");
        }
        None => {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                debug!("Serial: ignoring unrecognized line {trimmed:?}");
            }
        }
    }
}

/// Startet den Reader als dedizierten Thread
///
/// Die serialport-API blockiert, deshalb ein Thread statt einer
/// tokio-Task. Der Thread endet, sobald das Shutdown-Flag gesetzt ist;
/// durch das Read-Timeout dauert das höchstens einen Timeout-Tick.
pub fn spawn_serial_reader(
    port: Box<dyn SerialPort>,
    state: Arc<TouchState>,
    shutdown: Arc<AtomicBool>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("serial-reader".into())
        .spawn(move || reader_loop(port, &state, &shutdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_reader(input: &[u8], state: &TouchState) {
        let shutdown = AtomicBool::new(false);
        reader_loop(Cursor::new(input.to_vec()), state, &shutdown);
    }

    #[test]
    fn test_reader_applies_sensor_codes() {
        let state = TouchState::new();
        run_reader(b"1\n3\n", &state);
        assert_eq!(state.snapshot(), (true, true));
    }

    #[test]
    fn test_reader_handles_crlf_lines() {
        let state = TouchState::new();
        run_reader(b"1\r\n2\r\n", &state);
        assert_eq!(state.snapshot(), (true, false));
    }

    #[test]
    fn test_reader_ignores_garbage_lines() {
        let state = TouchState::new();
        run_reader(b"1\nhello\n\n42\n", &state);
        assert_eq!(state.snapshot(), (true, false));
    }

    #[test]
    fn test_reader_drops_incomplete_trailing_line() {
        let state = TouchState::new();
        // "3" ohne Newline ist beim Stream-Ende noch keine Zeile
        run_reader(b"1\n3", &state);
        assert_eq!(state.snapshot(), (true, false));
    }

    #[test]
    fn test_reader_discards_oversized_lines() {
        let state = TouchState::new();

        // Eine Zeile weit über dem Limit, deren letztes Byte ein gültiger
        // Code wäre - sie muss als Ganzes verworfen werden
        let mut input = vec![b'x'; 4 * SERIAL_MAX_LINE_BYTES];
        input.push(b'1');
        input.extend_from_slice(b"\n3\n");

        run_reader(&input, &state);

        assert_eq!(state.snapshot(), (false, true));
    }

    #[test]
    fn test_reader_stops_when_shutdown_is_set() {
        let state = TouchState::new();
        let shutdown = AtomicBool::new(true);

        reader_loop(Cursor::new(b"1\n".to_vec()), &state, &shutdown);

        // Flag war vor dem ersten Read gesetzt: nichts wurde verarbeitet
        assert_eq!(state.snapshot(), (false, false));
    }

    #[test]
    fn test_reader_continues_after_timeout() {
        // Reader, der erst Timeouts liefert und dann Daten
        struct TimeoutsThenData {
            timeouts: usize,
            data: Cursor<Vec<u8>>,
        }

        impl Read for TimeoutsThenData {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                if self.timeouts > 0 {
                    self.timeouts -= 1;
                    return Err(std::io::Error::new(ErrorKind::TimedOut, "timed out"));
                }
                self.data.read(buf)
            }
        }

        let state = TouchState::new();
        let shutdown = AtomicBool::new(false);
        let reader = TimeoutsThenData {
            timeouts: 3,
            data: Cursor::new(b"3\n".to_vec()),
        };

        reader_loop(reader, &state, &shutdown);

        assert_eq!(state.snapshot(), (false, true));
    }
}
