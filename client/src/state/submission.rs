//! Submission sequencing.
//!
//! Every outbound submit gets a token from a monotonic counter. A response is
//! only applied if its token is still the latest one issued, so an older
//! request that resolves late cannot overwrite a newer result.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionToken(u64);

/// Shared counter of issued submissions. Clones share the same counter.
#[derive(Clone, Debug, Default)]
pub struct SubmissionTracker {
    latest: Arc<AtomicU64>,
}

impl SubmissionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> SubmissionToken {
        SubmissionToken(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    #[must_use]
    pub fn is_current(&self, token: SubmissionToken) -> bool {
        self.latest.load(Ordering::Relaxed) == token.0
    }
}
