// HTTP Gateway Task - Serviert HTML, Sensor-Status und LED-Kommandos
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use bridge_core::{CommandLink, LedAction, TouchState};
use log::{error, info, warn};

use crate::web::protocol::{LedRequest, LedResponse, StatusResponse};
use crate::web::INDEX_HTML;

/// Geteilter Zustand des HTTP Gateways
///
/// Gehört der Service-Instanz und wird per axum-State an die Handler
/// gereicht (keine globalen Variablen):
/// - `touch`: die Sensor-Flags, beschrieben vom Serial-Reader
/// - `link`: die Schreib-Seite der seriellen Verbindung; der Mutex
///   serialisiert gleichzeitige LED-Requests, damit sich Kommando-Bytes
///   nicht verschränken
#[derive(Clone)]
pub struct AppState {
    pub touch: Arc<TouchState>,
    pub link: Arc<Mutex<dyn CommandLink>>,
}

/// Baut den Router mit den drei Endpoints des Gateways
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/status", get(get_status))
        .route("/led", post(set_led))
        .with_state(state)
}

/// HTTP Server Task - bindet den Port und serviert bis zum Shutdown-Signal
///
/// Lauscht auf allen Interfaces. `shutdown` ist typischerweise ein
/// Ctrl-C-Future; danach kehrt die Funktion zurück und main kann den
/// Serial-Reader stoppen.
pub async fn http_server_task<F>(state: AppState, port: u16, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        .await
        .with_context(|| format!("failed to bind HTTP port {port}"))?;

    info!("HTTP: listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}

/// Serviert die HTML-Hauptseite
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Liefert den aktuellen Zustand beider Touch-Sensoren
///
/// Liest direkt die In-Memory-Flags; kein Caching, keine Seiteneffekte.
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let (touch_detected, touch_detected2) = state.touch.snapshot();

    Json(StatusResponse {
        touch_detected,
        touch_detected2,
    })
}

/// Nimmt ein LED-Kommando entgegen und schreibt es auf die serielle Verbindung
///
/// Erkannte Actions ("ON", "OFF", "GON", "GOFF") werden als ASCII-Kommando
/// an den Mikrocontroller geschickt. Nicht erkannte Actions schreiben
/// nichts, melden aber trotzdem Erfolg - das ist der Wire-Contract des
/// bestehenden Web-Clients (dokumentierte Lücke, siehe DESIGN.md).
pub async fn set_led(
    State(state): State<AppState>,
    Json(request): Json<LedRequest>,
) -> (StatusCode, Json<LedResponse>) {
    match LedAction::try_from(request.action.as_str()) {
        Ok(action) => {
            let result = {
                // Bei Poisoning weiterarbeiten: der Link hält keine
                // Invariante, die ein Panic eines Handlers brechen könnte
                let mut link = state
                    .link
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                link.write_command(action)
            };

            match result {
                Ok(()) => {
                    info!("LED: action {:?} ({})", action, request.action);
                    (StatusCode::OK, Json(LedResponse::success()))
                }
                Err(e) => {
                    error!("LED: failed to send {:?}: {e}", action);
                    (StatusCode::INTERNAL_SERVER_ERROR, Json(LedResponse::error()))
                }
            }
        }
        Err(()) => {
            warn!("LED: unknown action {:?}, no command sent", request.action);
            (StatusCode::OK, Json(LedResponse::success()))
        }
    }
}
