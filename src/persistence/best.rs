//! Persisted best score
//!
//! Loaded once at startup, written only when a finished run beats it.

use super::{KeyValueStore, StorageError};
use crate::tuning::consts::BEST_SCORE_KEY;

/// Parse a stored best score
///
/// Missing, non-numeric, non-finite, or negative values read as 0. Fractions
/// are floored.
pub fn parse_best(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v.floor() as u64,
        _ => 0,
    }
}

/// Best score backed by a key-value store
#[derive(Debug)]
pub struct BestScore<S> {
    store: S,
    best: u64,
}

impl<S: KeyValueStore> BestScore<S> {
    /// Read the stored best, falling back to 0
    pub fn load(store: S) -> Self {
        let best = match store.get_item(BEST_SCORE_KEY) {
            Ok(raw) => parse_best(raw.as_deref()),
            Err(e) => {
                log::warn!("Could not read best score: {}", e);
                0
            }
        };
        log::info!("Best score: {}", best);
        Self { store, best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Offer a finished run's score. Returns true if it is a new record.
    ///
    /// A failed write is logged; the in-memory best still advances.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = self.save() {
            log::warn!("Could not save best score {}: {}", score, e);
        }
        true
    }

    fn save(&mut self) -> Result<(), StorageError> {
        self.store.set_item(BEST_SCORE_KEY, &self.best.to_string())?;
        log::info!("Best score saved ({})", self.best);
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    /// Store whose writes always fail
    struct ReadOnly(Option<String>);

    impl KeyValueStore for ReadOnly {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.0.clone())
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("QuotaExceededError".into()))
        }
    }

    struct Broken;

    impl KeyValueStore for Broken {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_parse_best() {
        assert_eq!(parse_best(None), 0);
        assert_eq!(parse_best(Some("")), 0);
        assert_eq!(parse_best(Some("42")), 42);
        assert_eq!(parse_best(Some(" 42 ")), 42);
        assert_eq!(parse_best(Some("12.7")), 12);
        assert_eq!(parse_best(Some("abc")), 0);
        assert_eq!(parse_best(Some("NaN")), 0);
        assert_eq!(parse_best(Some("inf")), 0);
        assert_eq!(parse_best(Some("-5")), 0);
    }

    #[test]
    fn test_load_missing_is_zero() {
        let best = BestScore::load(MemoryStore::new());
        assert_eq!(best.best(), 0);
    }

    #[test]
    fn test_load_existing() {
        let best = BestScore::load(MemoryStore::with_item(BEST_SCORE_KEY, "30"));
        assert_eq!(best.best(), 30);
    }

    #[test]
    fn test_record_only_increases() {
        let mut best = BestScore::load(MemoryStore::with_item(BEST_SCORE_KEY, "30"));
        assert!(best.record(50));
        assert_eq!(best.best(), 50);
        assert_eq!(best.store().get(BEST_SCORE_KEY), Some("50"));

        assert!(!best.record(40));
        assert!(!best.record(50));
        assert_eq!(best.best(), 50);
        assert_eq!(best.store().get(BEST_SCORE_KEY), Some("50"));
    }

    #[test]
    fn test_write_failure_still_advances() {
        let mut best = BestScore::load(ReadOnly(Some("10".into())));
        assert_eq!(best.best(), 10);
        assert!(best.record(11));
        assert_eq!(best.best(), 11);
    }

    #[test]
    fn test_read_failure_is_zero() {
        let best = BestScore::load(Broken);
        assert_eq!(best.best(), 0);
    }
}
