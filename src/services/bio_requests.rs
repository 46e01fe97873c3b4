use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use uuid::Uuid;
use crate::services::bio_assist::BioOutcome;

/// Lifecycle of a single biography request
///
/// Requests cannot be cancelled. Two requests in flight for the same form
/// race, and whichever resolves last is what the caller ends up writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BioRequestState {
    Pending,
    Resolved { bio: String },
    Failed { message: String },
}

impl From<BioOutcome> for BioRequestState {
    fn from(outcome: BioOutcome) -> Self {
        match outcome {
            BioOutcome::Generated(bio) => BioRequestState::Resolved { bio },
            BioOutcome::Unavailable(message) | BioOutcome::Failed(message) => {
                BioRequestState::Failed { message }
            }
        }
    }
}

/// Bounded registry of recent biography requests
///
/// Once `capacity` is exceeded the oldest request is forgotten. Lookups use
/// `peek` so polling a request does not keep it alive.
#[derive(Debug)]
pub struct BioRequests {
    states: LruCache<Uuid, BioRequestState>,
}

impl BioRequests {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            states: LruCache::new(capacity),
        }
    }

    /// Register a new pending request and return its id
    pub fn begin(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        if let Some((evicted, _)) = self.states.push(id, BioRequestState::Pending) {
            tracing::trace!("Evicted bio request {}", evicted);
        }
        id
    }

    /// Record the outcome of a request
    ///
    /// Returns false when the request is unknown or was already evicted.
    pub fn complete(&mut self, id: Uuid, outcome: BioOutcome) -> bool {
        match self.states.peek_mut(&id) {
            Some(state) => {
                *state = outcome.into();
                true
            }
            None => {
                tracing::debug!("Dropping outcome for evicted bio request {}", id);
                false
            }
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<&BioRequestState> {
        self.states.peek(id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.states.cap().get()
    }
}
