//! Victim selection.
//!
//! Every policy picks among occupied frames only: an empty frame, if any, is
//! always filled first and never reaches the selector.

mod load_order;
mod optimal;
mod recency;

pub(crate) use {load_order::LoadOrder, optimal::LookAhead, recency::Recency};

use crate::{Frame, FrameId, PageId, Policy};

/// Replacement state the policies choose a victim from.
pub(crate) struct Candidates<'a, P: PageId> {
    pub frames: &'a [Frame<P>],
    pub load_order: &'a LoadOrder,
    pub recency: &'a Recency,
    pub look_ahead: &'a LookAhead<P>,
}

impl<P: PageId> Candidates<'_, P> {
    /// Chooses the frame to evict according to the policy.
    ///
    /// Returns `None` only when no frame is occupied.
    pub fn victim(&self, policy: Policy) -> Option<FrameId> {
        match policy {
            Policy::Fifo => self.load_order.oldest(),
            Policy::Lifo => self.load_order.newest(),
            Policy::Lru => self.recency.least_recent(),
            Policy::Mru => self.recency.most_recent(),
            Policy::Optimal => self.look_ahead.farthest(self.frames),
        }
    }
}
