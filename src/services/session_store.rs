use log::{debug, info};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::error::ItineraryError;
use crate::models::envelope::{ItineraryEnvelope, Notice};

pub const DEFAULT_SESSION_CAPACITY: usize = 1024;
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// What a session's itinerary slot currently holds.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SlotState {
    Idle,
    Requesting {
        #[serde(rename = "requestId")]
        request_id: u64,
    },
    Populated {
        envelope: ItineraryEnvelope,
    },
    Failed {
        #[serde(rename = "requestId")]
        request_id: u64,
        notice: Notice,
    },
}

#[derive(Debug)]
struct SessionSlot {
    latest: u64,
    state: SlotState,
    /// Last idle, populated or failed state; restored when a request is abandoned.
    settled: SlotState,
    touched: Instant,
}

#[derive(Debug, Default)]
struct Slots {
    next_request_id: u64,
    sessions: HashMap<String, SessionSlot>,
}

/// Per-session itinerary slots, bounded by count and idle time.
///
/// Request ids come from one counter for the whole store, so they only grow for
/// any session. Only the holder of a session's latest id may write its slot;
/// anyone else finishing later gets `Superseded` back and leaves the slot alone.
/// Slots untouched for longer than the TTL are dropped, and when the store is
/// full the slot with the oldest latest request makes room for a new session.
#[derive(Debug)]
pub struct SessionStore {
    slots: Mutex<Slots>,
    capacity: usize,
    ttl: Duration,
}

/// A started request. Dropping it without [`PendingRequest::complete`] (for
/// example when the client disconnects) puts the slot back to its last settled
/// state.
#[must_use]
#[derive(Debug)]
pub struct PendingRequest<'a> {
    store: &'a SessionStore,
    session: String,
    request_id: u64,
    finished: bool,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_SESSION_CAPACITY, DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(capacity: usize, ttl: Duration) -> Self {
        Self {
            slots: Mutex::new(Slots::default()),
            capacity: capacity.max(1),
            ttl,
        }
    }

    fn slots(&self) -> MutexGuard<'_, Slots> {
        // Slot writes are single assignments, so a poisoned map is still consistent.
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Start a request for `session`.
    pub fn begin(&self, session: &str) -> PendingRequest<'_> {
        let mut slots = self.slots();
        let now = Instant::now();
        if !slots.sessions.contains_key(session) {
            self.make_room(&mut slots, now);
        }

        slots.next_request_id += 1;
        let request_id = slots.next_request_id;

        let slot = slots
            .sessions
            .entry(session.to_string())
            .or_insert_with(|| SessionSlot {
                latest: 0,
                state: SlotState::Idle,
                settled: SlotState::Idle,
                touched: now,
            });
        slot.latest = request_id;
        slot.state = SlotState::Requesting { request_id };
        slot.touched = now;
        debug!("Session {} started request {}", session, request_id);

        PendingRequest {
            store: self,
            session: session.to_string(),
            request_id,
            finished: false,
        }
    }

    pub fn state(&self, session: &str) -> SlotState {
        let now = Instant::now();
        self.slots()
            .sessions
            .get(session)
            .filter(|slot| now.duration_since(slot.touched) < self.ttl)
            .map(|slot| slot.state.clone())
            .unwrap_or(SlotState::Idle)
    }

    pub fn len(&self) -> usize {
        self.slots().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn make_room(&self, slots: &mut Slots, now: Instant) {
        let before = slots.sessions.len();
        let ttl = self.ttl;
        slots
            .sessions
            .retain(|_, slot| now.duration_since(slot.touched) < ttl);

        while slots.sessions.len() >= self.capacity {
            let oldest = slots
                .sessions
                .iter()
                .min_by_key(|(_, slot)| slot.latest)
                .map(|(session, _)| session.clone());
            match oldest {
                Some(session) => {
                    slots.sessions.remove(&session);
                }
                None => break,
            }
        }

        let evicted = before - slots.sessions.len();
        if evicted > 0 {
            debug!("Evicted {} session slots", evicted);
        }
    }

    fn commit(
        &self,
        session: &str,
        request_id: u64,
        outcome: Result<ItineraryEnvelope, ItineraryError>,
    ) -> Result<ItineraryEnvelope, ItineraryError> {
        let mut slots = self.slots();
        let slot = match slots.sessions.get_mut(session) {
            Some(slot) if slot.latest == request_id => slot,
            Some(_) => {
                info!(
                    "Discarding stale result of request {} for session {}",
                    request_id, session
                );
                return Err(ItineraryError::Superseded { request_id });
            }
            None => {
                // Evicted while in flight: nothing to record into
                debug!(
                    "Session {} was evicted before request {} finished",
                    session, request_id
                );
                return outcome;
            }
        };

        slot.touched = Instant::now();
        match outcome {
            Ok(envelope) => {
                slot.state = SlotState::Populated {
                    envelope: envelope.clone(),
                };
                slot.settled = slot.state.clone();
                Ok(envelope)
            }
            Err(e) => {
                slot.state = SlotState::Failed {
                    request_id,
                    notice: e.notice(),
                };
                slot.settled = slot.state.clone();
                Err(e)
            }
        }
    }

    fn abandon(&self, session: &str, request_id: u64) {
        let mut slots = self.slots();
        if let Some(slot) = slots.sessions.get_mut(session) {
            if slot.latest == request_id {
                info!(
                    "Request {} for session {} was dropped before finishing",
                    request_id, session
                );
                slot.state = slot.settled.clone();
            }
        }
    }
}

impl PendingRequest<'_> {
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    /// Commit the outcome, unless a newer request for the session started.
    pub fn complete(
        mut self,
        outcome: Result<ItineraryEnvelope, ItineraryError>,
    ) -> Result<ItineraryEnvelope, ItineraryError> {
        self.finished = true;
        self.store.commit(&self.session, self.request_id, outcome)
    }
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.store.abandon(&self.session, self.request_id);
        }
    }
}
