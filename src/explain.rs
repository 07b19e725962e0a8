//! Human-readable explanations of page accesses.
//!
//! Explanations are display text only. A failing explainer degrades to a
//! fallback message and never affects the engine.

use crate::{AccessLog, Outcome, PageId, Policy};

/// Explanation generator failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ExplainError(String);

impl ExplainError {
    /// Creates an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Explanation generator.
///
/// Turns the log line of one access into prose for a student watching the
/// simulation. Implemented for closures, so remote generators can be plugged
/// in without a dedicated type.
pub trait Explainer<P: PageId> {
    /// Explains the logged access.
    fn explain(&self, log: &AccessLog<'_, P>) -> Result<String, ExplainError>;
}

impl<P, F> Explainer<P> for F
where
    P: PageId,
    F: Fn(&AccessLog<'_, P>) -> Result<String, ExplainError>,
{
    fn explain(&self, log: &AccessLog<'_, P>) -> Result<String, ExplainError> {
        self(log)
    }
}

/// Offline explainer.
///
/// Describes why an access hit or faulted and, on eviction, why the policy
/// picked its victim. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Narrator;

impl<P: PageId> Explainer<P> for Narrator {
    fn explain(&self, log: &AccessLog<'_, P>) -> Result<String, ExplainError> {
        let (policy, record) = (log.policy, log.record);
        let text = match (record.outcome, &record.evicted) {
            (Outcome::Hit, _) => format!(
                "Page {} is already resident in frame {}, so the access is a hit and nothing \
                 is loaded or evicted. {}",
                record.page,
                record.frame,
                hit_note(policy)
            ),
            (Outcome::Fault, None) => format!(
                "Page {} is not resident, so the access is a page fault. Frame {} was still \
                 empty, so the page is loaded there without evicting anything.",
                record.page, record.frame
            ),
            (Outcome::Fault, Some(evicted)) => format!(
                "Page {} is not resident and all {} frames are in use, so the access is a page \
                 fault. {} evicts page {} from frame {} because {}",
                record.page,
                record.frames.len(),
                policy,
                evicted.page,
                evicted.frame,
                victim_reason(policy)
            ),
        };

        Ok(text)
    }
}

fn hit_note(policy: Policy) -> &'static str {
    match policy {
        Policy::Fifo | Policy::Lifo => "Hits do not change the load order this policy evicts by.",
        Policy::Lru => "The page becomes the most recently used one, the last LRU would evict.",
        Policy::Mru => "The page becomes the most recently used one, the first MRU would evict.",
        Policy::Optimal => "OPTIMAL only decides on faults, by looking ahead in the stream.",
    }
}

fn victim_reason(policy: Policy) -> &'static str {
    match policy {
        Policy::Fifo => "it was loaded the earliest of all resident pages.",
        Policy::Lifo => "it was loaded the most recently of all resident pages.",
        Policy::Lru => "it was used the least recently of all resident pages.",
        Policy::Mru => "it was used the most recently of all resident pages.",
        Policy::Optimal => {
            "its next use lies the farthest ahead in the reference stream, if it is used again \
             at all."
        }
    }
}
