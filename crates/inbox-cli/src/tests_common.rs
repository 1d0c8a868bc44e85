//! Shared backend fixture for CLI unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::MemoryInboxBackend;

#[allow(clippy::expect_used)]
pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Seeded demo inbox on a pinned clock, so table output is deterministic.
pub(crate) fn fixed_backend() -> MemoryInboxBackend {
    MemoryInboxBackend::seeded_at(fixed_now())
}
