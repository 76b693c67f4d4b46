//! HTTP handlers. Each reaches shared state through `web::Data<Board>`; the
//! single solver thread behind `Board::solver` is awaited, never blocked
//! on, so accepting new connections never stalls behind a snapshot.
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use classboard_dto::AnalyticsSummary;
use classboard_dto::BroadcastData;
use classboard_dto::DefinitionResponse;
use classboard_dto::ImagePayload;
use classboard_dto::ImageUpdateMessage;
use classboard_dto::MoveLogData;
use classboard_dto::MoveLogResponse;
use classboard_dto::PlayerAggregateDto;
use classboard_dto::RecommendedWords;
use classboard_dto::UpdateDataRequest;
use classboard_dto::UpdateResponse;
use classboard_hosting::Board;
use std::sync::Arc;

pub async fn update_data(board: web::Data<Arc<Board>>, body: web::Bytes) -> impl Responder {
    // Malformed/partial payloads are coerced to an empty request rather
    // than rejected -- the upstream vision pipeline sends partial bodies.
    let request: UpdateDataRequest = serde_json::from_slice(&body).unwrap_or_default();
    let raw = board.normalize(request);
    match board.solver.solve(board.session_id.clone(), raw).await {
        Ok(result) => {
            let changes: Vec<classboard_dto::MoveEventDto> = result.events.iter().map(|e| e.into()).collect();
            let analytics = match board.solver.all_aggregates().await {
                Ok(snapshots) => Some(AnalyticsSummary {
                    changes: changes.clone(),
                    vocabulary_stats: snapshots.iter().map(|s| s.into()).collect(),
                }),
                Err(e) => {
                    log::error!("fetching vocabulary aggregates for broadcast failed: {e}");
                    None
                }
            };
            let payload = BroadcastData {
                players: result.fused.players(),
                available_letters: result.fused.available_letters.clone(),
                recommended_words: RecommendedWords(
                    result.recommended.into_iter().map(|(word, c)| (word, c.blocks)).collect(),
                ),
                letters_to_steal: result.letters_to_steal,
                analytics,
            };
            let json = serde_json::to_string(&payload).unwrap_or_default();
            let broadcast = board.publish_data(&json);

            if !changes.is_empty() {
                let move_log = serde_json::json!({ "entries": changes });
                board.publish_move_log(&move_log.to_string());
            }

            HttpResponse::Ok().json(UpdateResponse { ok: true, broadcast })
        }
        Err(e) => {
            log::error!("solver failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({ "ok": false, "error": e.to_string() }))
        }
    }
}

pub async fn update_image(board: web::Data<Arc<Board>>, body: web::Bytes) -> impl Responder {
    use base64::Engine;
    let base64 = if body.is_empty() { None } else { Some(base64::engine::general_purpose::STANDARD.encode(&body)) };
    let message = ImageUpdateMessage {
        kind: "image".to_string(),
        timestamp: monotonic_millis(),
        data: ImagePayload { base64 },
        processed: false,
    };
    let json = serde_json::to_string(&message).unwrap_or_default();
    let broadcast = board.publish_image(&json);
    HttpResponse::Ok().json(UpdateResponse { ok: true, broadcast })
}

pub async fn definition(board: web::Data<Arc<Board>>, path: web::Path<String>) -> impl Responder {
    let word = path.into_inner().to_lowercase();
    let definition = board.definitions.lookup(&word);
    HttpResponse::Ok().json(DefinitionResponse { ok: true, word, definition })
}

pub async fn analytics(board: web::Data<Arc<Board>>) -> impl Responder {
    match board.solver.all_aggregates().await {
        Ok(snapshots) => {
            let dtos: Vec<PlayerAggregateDto> = snapshots.iter().map(|s| s.into()).collect();
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "players": dtos }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "ok": false, "error": e.to_string() })),
    }
}

pub async fn analytics_player(board: web::Data<Arc<Board>>, path: web::Path<String>) -> impl Responder {
    match board.solver.player_aggregate(path.into_inner()).await {
        Ok(Some(snapshot)) => {
            let dto: PlayerAggregateDto = (&snapshot).into();
            HttpResponse::Ok().json(serde_json::json!({ "ok": true, "player": dto }))
        }
        Ok(None) => HttpResponse::Ok().json(serde_json::json!({ "ok": true, "player": null })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "ok": false, "error": e.to_string() })),
    }
}

pub async fn analytics_move_log(board: web::Data<Arc<Board>>) -> impl Responder {
    match board.solver.history().await {
        Ok(events) => {
            let dtos: Vec<classboard_dto::MoveEventDto> = events.iter().map(|e| e.into()).collect();
            HttpResponse::Ok().json(MoveLogResponse { ok: true, data: MoveLogData { events: dtos } })
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "ok": false, "error": e.to_string() })),
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

fn monotonic_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

