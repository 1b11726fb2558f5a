//! Id generation for new list entries.
//!
//! `AppState` holds an `Arc<dyn IdGenerator>`; the server uses random UUIDs and
//! tests swap in a counter so entry creation is reproducible.

#[cfg(test)]
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs in simple form (32 hex chars, no hyphens).
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Monotonic `"{prefix}-{n}"` ids starting at 1.
#[cfg(test)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

#[cfg(test)]
impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

#[cfg(test)]
impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_monotonic() {
        let ids = SequentialIdGenerator::new("entry");
        assert_eq!(ids.next_id(), "entry-1");
        assert_eq!(ids.next_id(), "entry-2");
        assert_eq!(ids.next_id(), "entry-3");
    }

    #[test]
    fn test_uuid_ids_differ() {
        let ids = UuidIdGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }
}
