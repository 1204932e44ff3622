//! Suppression of repeated "warn once" diagnostics.

use crate::origin::Origin;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Messages with this prefix embed the arguments of the external call after
/// it; they are keyed on the prefix alone.
const CALLING_EXTERNAL: &str = "calling external";

/// Remembers which `(origin, message)` pairs have already been reported.
///
/// The set only grows. Access is serialized through an internal lock so the
/// first insertion of a key wins even when several threads race on it.
pub struct OnceFilter {
    seen: Mutex<HashSet<(Origin, String)>>,
}

impl OnceFilter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self {
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Returns `true` the first time a given origin/message pair is seen, and
    /// `false` on every later call with the same pair.
    ///
    /// Call at most once per candidate warning: the pair is recorded as a
    /// side effect.
    pub fn should_emit(&self, origin: &Origin, message: &str) -> bool {
        let key = (origin.clone(), normalize(message).to_string());
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        seen.insert(key)
    }

    /// Returns `true` if the origin/message pair has already been recorded.
    ///
    /// Records nothing; callers that must not lose a warning check first and
    /// call [`should_emit`](Self::should_emit) once the warning is delivered.
    pub fn has_seen(&self, origin: &Origin, message: &str) -> bool {
        let key = (origin.clone(), normalize(message).to_string());
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&key)
    }

    /// Returns the number of distinct pairs recorded so far.
    pub fn len(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OnceFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Strips the call-specific tail of "calling external" messages.
fn normalize(message: &str) -> &str {
    if message.starts_with(CALLING_EXTERNAL) {
        CALLING_EXTERNAL
    } else {
        message
    }
}
