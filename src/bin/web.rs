//! Single binary web server: JSON API over in-memory Swiss tournaments.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use swiss_tournament::{
    import_roster, Pairing, PlayerId, RepositoryError, Standing, Tournament, TournamentId,
};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Every request holds the write lock for its whole
/// operation, so pairings are never computed from a half-reported round.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// How often the cleanup task sweeps for inactive tournaments.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(30 * 60);

/// Drop entries idle for `timeout` or longer; returns how many were removed.
fn remove_inactive(entries: &mut HashMap<TournamentId, TournamentEntry>, timeout: Duration) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| entry.last_activity.elapsed() < timeout);
    before - entries.len()
}

fn cleanup_summary(removed: usize, timeout: Duration) -> String {
    format!(
        "Cleaned up {} inactive tournament(s) (no activity for {}h)",
        removed,
        timeout.as_secs() / 3600
    )
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner: PlayerId,
    /// Omitted or null for a bye.
    #[serde(default)]
    loser: Option<PlayerId>,
}

#[derive(Deserialize)]
struct ReportRoundBody {
    results: Vec<ReportMatchBody>,
}

#[derive(Serialize)]
struct StandingsResponse<'a> {
    round: u32,
    standings: &'a [Standing],
}

#[derive(Serialize)]
struct PairingsResponse<'a> {
    round: u32,
    pairings: &'a [Pairing],
}

#[derive(Serialize)]
struct ImportResponse {
    player_ids: Vec<PlayerId>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

fn error_response(e: &RepositoryError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        RepositoryError::PlayerNotFound(_)
        | RepositoryError::SelfMatch(_)
        | RepositoryError::EmptyName
        | RepositoryError::RoundMismatch { .. }
        | RepositoryError::Import(_) => HttpResponse::BadRequest().json(body),
        RepositoryError::Io(_) | RepositoryError::Corrupt(_) | RepositoryError::Unavailable(_) => {
            log::error!("Store error: {}", e);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Look up a tournament, refresh its activity time, and run `f` on it under the write lock.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState) -> HttpResponse {
    let tournament = Tournament::new();
    let id = tournament.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&tournament);
    g.insert(
        id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    log::info!("Created tournament {}", id);
    response
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(&*t))
}

/// Register a player.
#[post("/api/tournaments/{id}/players")]
async fn api_add_player(state: AppState, path: Path<TournamentPath>, body: Json<AddPlayerBody>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.add_player(&body.name) {
        Ok(_) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    })
}

/// Register every player in a CSV roster (request body, `name` column).
#[post("/api/tournaments/{id}/players/import")]
async fn api_import_players(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        match import_roster(body.as_bytes(), &mut t.repository) {
            Ok(player_ids) => HttpResponse::Ok().json(ImportResponse { player_ids }),
            Err(e) => error_response(&e),
        }
    })
}

/// Remove all players and their matches.
#[delete("/api/tournaments/{id}/players")]
async fn api_delete_players(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        t.reset();
        HttpResponse::Ok().json(&*t)
    })
}

/// Remove all match records (player records are kept).
#[delete("/api/tournaments/{id}/matches")]
async fn api_delete_matches(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        t.delete_matches();
        HttpResponse::Ok().json(&*t)
    })
}

/// Report a single result (`loser` omitted for a bye).
#[post("/api/tournaments/{id}/matches")]
async fn api_report_match(state: AppState, path: Path<TournamentPath>, body: Json<ReportMatchBody>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.report_match(body.winner, body.loser) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    })
}

/// Report a whole round at once; rejected unless it matches the current pairings.
#[post("/api/tournaments/{id}/rounds")]
async fn api_report_round(state: AppState, path: Path<TournamentPath>, body: Json<ReportRoundBody>) -> HttpResponse {
    let results: Vec<_> = body.results.iter().map(|r| (r.winner, r.loser)).collect();
    with_tournament(&state, path.id, |t| match t.report_round(&results) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(&e),
    })
}

/// Current standings.
#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let standings = t.standings();
        HttpResponse::Ok().json(StandingsResponse {
            round: t.round(),
            standings: &standings,
        })
    })
}

/// Pairings for the next round.
#[get("/api/tournaments/{id}/pairings")]
async fn api_pairings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match t.pairings() {
        Ok(pairings) => HttpResponse::Ok().json(PairingsResponse {
            round: t.round() + 1,
            pairings: &pairings,
        }),
        Err(e) => error_response(&e),
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: periodically remove tournaments inactive for INACTIVITY_TIMEOUT
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let removed = remove_inactive(&mut g, INACTIVITY_TIMEOUT);
            if removed > 0 {
                log::info!("{}", cleanup_summary(removed, INACTIVITY_TIMEOUT));
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_import_players)
            .service(api_add_player)
            .service(api_delete_players)
            .service(api_delete_matches)
            .service(api_report_match)
            .service(api_report_round)
            .service(api_standings)
            .service(api_pairings)
    })
    .bind(bind)?
    .run()
    .await
}
