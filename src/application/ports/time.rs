// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the timestamps stamped on articles. Commands read it once per
/// mutation so `createdAt` and `updatedAt` agree on creation.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
