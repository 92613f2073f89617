// Main Entry Point der Touch/LED Serial-Bridge
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Context;
use bridge_server::config::{DEFAULT_SERIAL_DEVICE, HTTP_PORT, SERIAL_BAUD_RATE};
use bridge_server::hal::{open_serial_port, SerialCommandLink};
use bridge_server::tasks::{http_server_task, spawn_serial_reader};
use bridge_server::{AppState, CommandLink, TouchState};
use clap::Parser;
use log::{error, info};

/// Bridge zwischen Web-Client und Mikrocontroller über eine serielle Verbindung
#[derive(Parser)]
struct Cli {
    /// Geräte-Pfad der seriellen Verbindung
    #[arg(short, long, default_value = DEFAULT_SERIAL_DEVICE)]
    device: String,

    /// Baudrate der seriellen Verbindung
    #[arg(short, long, default_value_t = SERIAL_BAUD_RATE)]
    baud: u32,

    /// HTTP-Port des Gateways (lauscht auf allen Interfaces)
    #[arg(short, long, default_value_t = HTTP_PORT)]
    port: u16,
}

/// Initialisiert die serielle Verbindung, startet Reader und HTTP-Server
/// und fährt beide bei Ctrl-C geordnet herunter.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Serielle Verbindung einmal öffnen; sie lebt für die Prozess-Laufzeit.
    // Der Reader bekommt ein geklontes Handle, das Original wird die
    // Schreib-Seite für die LED-Kommandos.
    let port = open_serial_port(&cli.device, cli.baud)
        .with_context(|| format!("failed to open serial device {}", cli.device))?;
    let reader_port = port
        .try_clone()
        .context("failed to clone serial port for the reader")?;

    info!("Serial: connected to {} at {} baud", cli.device, cli.baud);

    // Geteilter Zustand: Sensor-Flags (beide false) und Shutdown-Flag
    let touch = Arc::new(TouchState::new());
    let shutdown = Arc::new(AtomicBool::new(false));

    // Serial-Reader als Thread starten (an den Service-Lifecycle gebunden)
    let reader_handle = spawn_serial_reader(reader_port, touch.clone(), shutdown.clone())
        .context("failed to spawn serial reader thread")?;

    // HTTP Gateway mit der Schreib-Seite der Verbindung
    let link: Arc<Mutex<dyn CommandLink>> = Arc::new(Mutex::new(SerialCommandLink::new(port)));
    let state = AppState { touch, link };

    // Serviert bis Ctrl-C, danach geordneter Shutdown
    http_server_task(state, cli.port, shutdown_signal()).await?;

    // Reader stoppen: Flag setzen, der Thread endet spätestens nach
    // einem Read-Timeout-Tick
    info!("Shutting down, stopping serial reader");
    shutdown.store(true, Ordering::Relaxed);
    if reader_handle.join().is_err() {
        error!("Serial reader thread panicked");
    }

    Ok(())
}

/// Future, das bei Ctrl-C auflöst (Shutdown-Signal für den HTTP-Server)
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C: {e}");
        return;
    }
    info!("Ctrl-C received");
}
