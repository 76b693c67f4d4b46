//! Core type aliases, letter arithmetic, and constants for classboard.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the classboard workspace.

mod letters;

pub use letters::LetterCounts;
pub use letters::ALPHABET_LEN;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Index of a player around the table (0-based, stable across snapshots).
pub type PlayerIndex = usize;
/// Monotonic event sequence number, assigned by the journal.
pub type Sequence = u64;
/// Zipf frequency, continuous 0-8 log-frequency score.
pub type Zipf = f32;
/// Fusion confidence, clamped to [0.0, 1.0].
pub type Confidence = f32;

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Cast ID<T> to ID<U> while preserving the underlying UUID.
    pub fn cast<U>(self) -> ID<U> {
        ID {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

// Manual impls (rather than `#[derive]`) so serialization never requires
// `T: Serialize` -- `T` is a marker, never actually held.
impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(Self { inner: uuid::Uuid::deserialize(deserializer)?, marker: PhantomData })
    }
}

// ============================================================================
// FUSION PARAMETERS
// ============================================================================
/// Minimum kept word length; anything shorter is rescued by insertion or dropped.
pub const MIN_WORD_LEN: usize = 3;
/// Confidence assigned to a word a fusion correction rewrote.
pub const CONFIDENCE_CORRECTED: Confidence = 0.5;
/// Per-step confidence gain on direct re-observation.
pub const CONFIDENCE_STEP_UP: Confidence = 0.25;
/// Per-step confidence decay on non-observation.
pub const CONFIDENCE_STEP_DOWN: Confidence = 0.1;
/// Number of most-recent raw snapshots retained for disappeared-word restoration.
pub const VISIBILITY_RING_LEN: usize = 2;
/// Maximum recursive-split depth for OCR-merged word recovery.
pub const RECURSIVE_SPLIT_DEPTH: usize = 3;
/// Minimum raw word length before recursive splitting is attempted.
pub const RECURSIVE_SPLIT_MIN_LEN: usize = 6;

// ============================================================================
// CONSTRUCTION ENGINE PARAMETERS
// ============================================================================
/// Minimum number of building blocks in a valid construction.
pub const MIN_BLOCKS: usize = 2;
/// Cap on unique player words fed into the subset cache (keeps 2^n bounded).
pub const MAX_UNIQUE_WORDS: usize = 16;
/// Default Zipf floor below which a recommendation is dropped.
pub const DEFAULT_SCORE_FLOOR: Zipf = 1.0;
/// Default weight on normalized frequency in the recommendation score.
pub const DEFAULT_WEIGHT_FREQUENCY: f32 = 1.5;
/// Default weight on normalized length in the recommendation score.
pub const DEFAULT_WEIGHT_LENGTH: f32 = 1.0;

// ============================================================================
// VOCABULARY AGGREGATOR PARAMETERS
// ============================================================================
/// Lower Zipf bound (inclusive) of the "common" frequency band.
pub const FREQUENCY_BAND_COMMON: Zipf = 5.0;
/// Lower Zipf bound (inclusive) of the "medium" frequency band.
pub const FREQUENCY_BAND_MEDIUM: Zipf = 3.0;

// ============================================================================
// SERVING SHELL PARAMETERS
// ============================================================================
/// Number of journal events buffered before a forced flush to disk.
pub const JOURNAL_BATCH_SIZE: usize = 10;
/// Interval between periodic aggregate-file saves.
pub const AGGREGATE_SAVE_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);
/// Default HTTP bind port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves forward")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for orderly shutdown: sets the interrupt flag so
/// the serving shell can flush the journal buffer and rewrite the aggregate
/// file before the process exits.
#[cfg(feature = "server")]
pub fn graceful_shutdown_on_ctrl_c() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        log::warn!("interrupt received, shutting down gracefully");
        INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
    });
}

/// Global interrupt flag for graceful shutdown coordination.
#[cfg(feature = "server")]
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Check if graceful shutdown was requested.
#[cfg(feature = "server")]
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
}
#[cfg(not(feature = "server"))]
pub fn interrupted() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_uuid() {
        struct Marker;
        let id = ID::<Marker>::default();
        let raw: uuid::Uuid = id.into();
        let back: ID<Marker> = raw.into();
        assert_eq!(id, back);
    }

    #[test]
    fn id_cast_preserves_uuid() {
        struct A;
        struct B;
        let a = ID::<A>::default();
        let b: ID<B> = a.cast();
        assert_eq!(a.inner(), b.inner());
    }
}
