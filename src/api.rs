//! Match endpoints: the match-end webhook and the match history listing.

use crate::logic::{ingest_match, IngestError, IngestRequest};
use crate::store::{MatchStore, RECENT_LIMIT};
use actix_web::{
    http::{header, StatusCode},
    web::{self, Bytes, Data},
    HttpRequest, HttpResponse,
};

/// Largest accepted webhook body. Match-end payloads carry full per-player stats.
pub const WEBHOOK_BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Shared secret and store used by the match endpoints.
pub struct MatchService {
    pub webhook_secret: String,
    pub store: Box<dyn MatchStore>,
}

pub fn error_json(status: StatusCode, message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({ "error": message.to_string() }))
}

/// Register `/api/dathost/match-end` and `/api/matches`. Expects `Data<MatchService>`.
pub fn configure_matches(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/dathost/match-end")
            .app_data(web::PayloadConfig::new(WEBHOOK_BODY_LIMIT))
            .to(match_end),
    )
    .service(web::resource("/api/matches").route(web::get().to(list_matches)));
}

/// Match-end webhook from the match host. Accepts every verb so the method
/// check (405) is made by `ingest_match` along with the secret and payload checks.
pub async fn match_end(req: HttpRequest, body: Bytes, service: Data<MatchService>) -> HttpResponse {
    let method = req.method().as_str().to_string();
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let svc = service.clone();
    let result = web::block(move || {
        let request = IngestRequest {
            method: &method,
            authorization: authorization.as_deref(),
            body: &body,
        };
        ingest_match(request, &svc.webhook_secret, &*svc.store)
    })
    .await;

    match result {
        Ok(Ok(record)) => {
            log::info!("Stored match {}", record.id());
            HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
        }
        Ok(Err(e @ IngestError::Store(_))) => {
            log::error!("Failed to store match: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
        Ok(Err(e)) => {
            log::warn!("Rejected match-end notification: {}", e);
            let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
            HttpResponse::build(status).body(e.to_string())
        }
        Err(e) => {
            log::error!("Match ingestion task failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

/// Most recent matches, newest first.
pub async fn list_matches(service: Data<MatchService>) -> HttpResponse {
    let svc = service.clone();
    match web::block(move || svc.store.recent(RECENT_LIMIT)).await {
        Ok(Ok(rows)) => HttpResponse::Ok().json(rows),
        Ok(Err(e)) => {
            log::error!("Failed to list matches: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
        Err(e) => error_json(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}
