//! Wire types for classboard's HTTP and WebSocket surface.
//!
//! Request and response types, serializable via `serde`. These bridge the
//! gap between the Rust domain model (in `classboard-fusion`,
//! `classboard-construction`, `classboard-journal`) and JSON payloads; the
//! owning crates implement `From<domain type> for <dto here>` rather than
//! this crate depending back on them.
mod block;
mod normalize;
mod request;
mod response;

pub use block::*;
pub use normalize::*;
pub use request::*;
pub use response::*;
