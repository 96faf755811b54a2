//! Best-distance record
//!
//! A single integer persisted under a fixed key. Reads happen once at
//! startup, writes only when a run beats the record. Writes are
//! fire-and-forget: failures are logged and otherwise ignored.

use crate::error::StoreError;

/// Key the record is stored under
pub const RECORD_KEY: &str = "highScore";

/// Key-value persistence for the best distance
pub trait RecordStore {
    /// Stored record, `None` if nothing was stored yet
    fn get(&self) -> Result<Option<u64>, StoreError>;
    fn set(&mut self, best: u64) -> Result<(), StoreError>;
}

/// In-memory store for tests and the headless host
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u64>,
    /// Number of successful writes
    pub writes: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u64) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }
}

impl RecordStore for MemoryStore {
    fn get(&self) -> Result<Option<u64>, StoreError> {
        Ok(self.value)
    }

    fn set(&mut self, best: u64) -> Result<(), StoreError> {
        self.value = Some(best);
        self.writes += 1;
        Ok(())
    }
}

/// Parse a stored record the way it was written (decimal integer)
pub fn parse_record(raw: &str) -> Result<u64, StoreError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u64>()
        .or_else(|_| {
            // Tolerate records written as floats ("123.0")
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v.floor() as u64)
                .ok_or(())
        })
        .map_err(|_| StoreError::Malformed {
            raw: raw.to_string(),
        })
}

/// Tracks the best distance and persists improvements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestDistance {
    best: u64,
}

impl BestDistance {
    /// Seed from the store; a missing or unreadable record counts as 0
    pub fn load(store: &dyn RecordStore) -> Self {
        let best = match store.get() {
            Ok(Some(best)) => {
                log::info!("Loaded best distance {best} m");
                best
            }
            Ok(None) => {
                log::info!("No best distance stored, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Could not read best distance: {e}");
                0
            }
        };
        Self { best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record a finished run. Any run longer than the best is written back;
    /// returns the new best only when the whole-meter record went up.
    pub fn submit(&mut self, distance: f64, store: &mut dyn RecordStore) -> Option<u64> {
        if distance <= self.best as f64 {
            return None;
        }
        let previous = self.best;
        self.best = distance.floor() as u64;
        if let Err(e) = store.set(self.best) {
            log::warn!("Best distance not saved: {e}");
        }
        (self.best > previous).then_some(self.best)
    }
}
