//! REST + HTML handlers. Every request reloads the roster and rebuilds the bracket from scratch.

use crate::logic::{approved_participants, generate_bracket, load_roster, RosterError};
use crate::models::Participant;
use crate::render::{render_error_page, render_page};
use actix_web::{
    get, post,
    web::{self, Data, Json},
    HttpResponse, Responder,
};
use std::path::PathBuf;

/// Settings shared by all handlers.
#[derive(Clone, Debug)]
pub struct BracketSettings {
    /// CSV roster read on every bracket request.
    pub roster_path: PathBuf,
    /// Page reload interval for the HTML view.
    pub refresh_secs: u64,
}

type AppState = Data<BracketSettings>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Approved participants from the configured roster file.
async fn load_approved(settings: &BracketSettings) -> Result<Vec<Participant>, RosterError> {
    let path = settings.roster_path.clone();
    let roster = web::block(move || load_roster(path))
        .await
        .map_err(|e| RosterError::Io(e.to_string()))??;
    log::debug!("Loaded {} roster entries from {}", roster.len(), settings.roster_path.display());
    Ok(approved_participants(roster))
}

fn roster_error_response(e: RosterError) -> HttpResponse {
    log::error!("Roster unavailable: {}", e);
    HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-bracket",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Bracket for the approved participants in the roster file.
#[get("/api/bracket")]
async fn api_get_bracket(state: AppState) -> HttpResponse {
    match load_approved(&state).await {
        Ok(participants) => HttpResponse::Ok().json(generate_bracket(&participants)),
        Err(e) => roster_error_response(e),
    }
}

/// Bracket for exactly the posted participants (caller has already filtered them).
#[post("/api/bracket")]
async fn api_generate_bracket(body: Json<Vec<Participant>>) -> HttpResponse {
    HttpResponse::Ok().json(generate_bracket(&body))
}

/// HTML bracket page; the browser reloads it every `refresh_secs`.
#[get("/")]
async fn bracket_page(state: AppState) -> HttpResponse {
    match load_approved(&state).await {
        Ok(participants) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_page(&generate_bracket(&participants), state.refresh_secs)),
        Err(e) => {
            log::error!("Roster unavailable: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(render_error_page(&e.to_string(), state.refresh_secs))
        }
    }
}

/// Register all routes on an `App` (shared by the binary and the tests).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(favicon)
        .service(api_get_bracket)
        .service(api_generate_bracket)
        .service(bracket_page);
}
