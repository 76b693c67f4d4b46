//! Classboard Backend Binary
//!
//! Runs the snapshot ingestion and analytics server on `PORT` (default 3000).

#[tokio::main]
async fn main() {
    classboard_core::log();
    classboard_core::graceful_shutdown_on_ctrl_c();
    classboard_server::run().await.unwrap();
}
