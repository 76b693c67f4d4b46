//! Board state shared across every HTTP worker: the solver handle, the
//! broadcast topics observers subscribe to, and the definitions cache.
//!
//! ## Core Types
//!
//! - [`Board`] — central registry every handler reaches through `web::Data`
mod board;
mod definitions;

pub use board::Board;
pub use definitions::Definitions;
