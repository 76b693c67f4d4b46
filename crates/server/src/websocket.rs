//! The `/receive-data` push channel: one observer connection fans in all
//! three broadcast topics (`data`, `move-log`, `image`), mirroring the
//! reference's WebSocket bridge but one-directional -- observers never send
//! actions back, they only watch.
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use classboard_hosting::Board;
use futures::StreamExt;
use std::sync::Arc;

pub async fn receive_data(
    board: web::Data<Arc<Board>>,
    req: HttpRequest,
    body: web::Payload,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, mut session, mut stream)) => {
            let mut data_rx = board.subscribe_data();
            let mut move_log_rx = board.subscribe_move_log();
            let mut image_rx = board.subscribe_image();
            actix_web::rt::spawn(async move {
                loop {
                    // biased: data for a snapshot must reach the observer no
                    // later than the move-log entries derived from it.
                    tokio::select! {
                        biased;
                        msg = data_rx.recv() => match msg {
                            Ok(json) => if session.text(json).await.is_err() { break },
                            Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                            Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                        },
                        msg = move_log_rx.recv() => match msg {
                            Ok(json) => if session.text(json).await.is_err() { break },
                            Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                            Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                        },
                        msg = image_rx.recv() => match msg {
                            Ok(json) => if session.text(json).await.is_err() { break },
                            Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
                            Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                        },
                        msg = stream.next() => match msg {
                            Some(Ok(actix_ws::Message::Close(_))) | None => break,
                            Some(Err(_)) => break,
                            _ => continue,
                        },
                    }
                }
                log::debug!("observer disconnected");
            });
            response.map_into_left_body()
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()).map_into_right_body(),
    }
}
