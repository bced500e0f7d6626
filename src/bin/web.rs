//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. See `cs2_team_divider::config` for the
//! environment variables (HOST, PORT, DATHOST_WEBHOOK_SECRET, MATCH_STORE_PATH, DEFAULT_PLAYERS).

use actix_files::Files;
use actix_web::{
    get, post, put,
    http::StatusCode,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use cs2_team_divider::api::{configure_matches, error_json, MatchService};
use cs2_team_divider::{
    apply, format_teams, Action, Config, CsvMatchStore, InMemoryMatchStore, MatchStore, Session,
    SessionError, SessionId,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-session entry: session state + last activity time (for auto-cleanup).
struct SessionEntry {
    session: Session,
    last_activity: Instant,
}

/// In-memory sessions by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<SessionId, SessionEntry>>>;

/// Inactivity threshold: sessions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct PlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct TeamCountBody {
    #[serde(default)]
    team_count: Value,
}

#[derive(Deserialize)]
struct MovePlayerBody {
    name: String,
    from: usize,
    to: usize,
}

/// Path segment: session id (e.g. /api/sessions/{id})
#[derive(Deserialize)]
struct SessionPath {
    id: SessionId,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "cs2-team-divider",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

/// Run one action on a session and respond with the updated view.
fn dispatch(state: &AppState, id: SessionId, action: Action) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&id) {
        Some(e) => e,
        None => return error_json(StatusCode::NOT_FOUND, SessionError::SessionNotFound(id)),
    };
    entry.last_activity = Instant::now();
    match apply(&mut entry.session, action, &mut rand::thread_rng()) {
        Ok(()) => HttpResponse::Ok().json(entry.session.view()),
        Err(e) => error_json(StatusCode::BAD_REQUEST, e),
    }
}

/// Create a new session with the configured default roster.
#[post("/api/sessions")]
async fn api_create_session(state: AppState, config: Data<Config>) -> HttpResponse {
    let session = Session::with_players(&config.default_players);
    let id = session.id;
    let view = session.view();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.insert(
        id,
        SessionEntry {
            session,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created session {} ({} active)", id, g.len());
    HttpResponse::Ok().json(view)
}

/// Get a session by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/sessions/{id}")]
async fn api_get_session(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(entry.session.view())
        }
        None => error_json(StatusCode::NOT_FOUND, SessionError::SessionNotFound(path.id)),
    }
}

#[post("/api/sessions/{id}/players")]
async fn api_add_player(state: AppState, path: Path<SessionPath>, body: Json<PlayerBody>) -> HttpResponse {
    let name = body.into_inner().name;
    dispatch(&state, path.id, Action::AddPlayer { name })
}

#[post("/api/sessions/{id}/players/remove")]
async fn api_remove_player(state: AppState, path: Path<SessionPath>, body: Json<PlayerBody>) -> HttpResponse {
    let name = body.into_inner().name;
    dispatch(&state, path.id, Action::RemovePlayer { name })
}

#[post("/api/sessions/{id}/players/toggle")]
async fn api_toggle_player(state: AppState, path: Path<SessionPath>, body: Json<PlayerBody>) -> HttpResponse {
    let name = body.into_inner().name;
    dispatch(&state, path.id, Action::ToggleSelection { name })
}

#[post("/api/sessions/{id}/selection/all")]
async fn api_select_all(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    dispatch(&state, path.id, Action::SelectAll)
}

#[post("/api/sessions/{id}/selection/clear")]
async fn api_clear_selection(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    dispatch(&state, path.id, Action::ClearSelection)
}

/// Store the requested team count as given (clamped when dividing).
#[put("/api/sessions/{id}/team-count")]
async fn api_set_team_count(state: AppState, path: Path<SessionPath>, body: Json<TeamCountBody>) -> HttpResponse {
    let team_count = body.into_inner().team_count;
    dispatch(&state, path.id, Action::SetTeamCount { team_count })
}

/// Shuffle selected players into teams (400 if fewer than 2 selected).
#[post("/api/sessions/{id}/teams/divide")]
async fn api_divide(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    dispatch(&state, path.id, Action::Divide)
}

/// Replace the teams with empty ones.
#[post("/api/sessions/{id}/teams/reset")]
async fn api_reset_teams(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    dispatch(&state, path.id, Action::Reset)
}

#[post("/api/sessions/{id}/teams/move")]
async fn api_move_player(state: AppState, path: Path<SessionPath>, body: Json<MovePlayerBody>) -> HttpResponse {
    let MovePlayerBody { name, from, to } = body.into_inner();
    dispatch(&state, path.id, Action::MovePlayer { name, from, to })
}

/// Teams as plain text; the browser copies it to the clipboard.
#[get("/api/sessions/{id}/teams/export")]
async fn api_export_teams(state: AppState, path: Path<SessionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok()
                .content_type("text/plain; charset=utf-8")
                .body(format_teams(&entry.session.teams))
        }
        None => error_json(StatusCode::NOT_FOUND, SessionError::SessionNotFound(path.id)),
    }
}

fn open_store(config: &Config) -> Box<dyn MatchStore> {
    match &config.match_store_path {
        Some(path) => {
            log::info!("Storing matches in {}", path.display());
            Box::new(CsvMatchStore::new(path.clone()))
        }
        None => {
            log::warn!("MATCH_STORE_PATH not set; matches are kept in memory only");
            Box::new(InMemoryMatchStore::new())
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if config.webhook_secret.is_empty() {
        log::warn!("DATHOST_WEBHOOK_SECRET not set; match-end notifications will be rejected");
    }
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let matches = Data::new(MatchService {
        webhook_secret: config.webhook_secret.clone(),
        store: open_store(&config),
    });
    let config = Data::new(config);
    let state = Data::new(RwLock::new(HashMap::<SessionId, SessionEntry>::new()));

    // Background task: every 30 minutes, remove sessions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive session(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .app_data(matches.clone())
            .route("/", web::get().to(serve_index_async))
            .route("/history", web::get().to(serve_history_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_session)
            .service(api_get_session)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_toggle_player)
            .service(api_select_all)
            .service(api_clear_selection)
            .service(api_set_team_count)
            .service(api_divide)
            .service(api_reset_teams)
            .service(api_move_player)
            .service(api_export_teams)
            .configure(configure_matches)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

async fn serve_history_async() -> HttpResponse {
    let html = include_str!("../../templates/history.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
