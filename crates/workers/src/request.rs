use classboard_dto::RawSnapshot;
use classboard_journal::Event;
use classboard_journal::PlayerAggregateSnapshot;
use tokio::sync::oneshot;

/// One unit of work for the solver thread. Queries reuse the same paired
/// channel as a solve request since all three (fusion trackers, aggregator,
/// event history) are owned exclusively by the solver thread.
pub enum Job {
    Solve { session_id: String, raw: RawSnapshot, respond_to: oneshot::Sender<anyhow::Result<crate::response::SolveResponse>> },
    PlayerAggregate { player_id: String, respond_to: oneshot::Sender<Option<PlayerAggregateSnapshot>> },
    AllAggregates { respond_to: oneshot::Sender<Vec<PlayerAggregateSnapshot>> },
    History { respond_to: oneshot::Sender<Vec<Event>> },
    Flush { respond_to: oneshot::Sender<anyhow::Result<()>> },
}
