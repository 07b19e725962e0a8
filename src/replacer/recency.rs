use {crate::FrameId, priority_queue::DoublePriorityQueue};

/// Recency index over occupied frames.
///
/// Frames are prioritized by the logical time of their last load or hit, so
/// both the least and the most recently used frame can be peeked at directly.
/// Every access stamps exactly one frame with a fresh clock value, hence no two
/// occupied frames ever share a priority.
#[derive(Debug, Default, Clone)]
pub struct Recency {
    frames: DoublePriorityQueue<FrameId, u64>,
}

impl Recency {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: DoublePriorityQueue::with_capacity(capacity),
        }
    }

    /// Records a use of the frame at the given logical time.
    ///
    /// Inserts the frame, if it is not tracked yet.
    pub fn touch(&mut self, id: FrameId, now: u64) {
        self.frames.push(id, now);
    }

    pub fn remove(&mut self, id: FrameId) -> bool {
        self.frames.remove(&id).is_some()
    }

    /// Frame with the smallest last-used time.
    pub fn least_recent(&self) -> Option<FrameId> {
        self.frames.peek_min().map(|(&id, _)| id)
    }

    /// Frame with the largest last-used time.
    pub fn most_recent(&self) -> Option<FrameId> {
        self.frames.peek_max().map(|(&id, _)| id)
    }

    /// Last-used time recorded for the frame.
    pub fn last_used(&self, id: FrameId) -> Option<u64> {
        self.frames.get_priority(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}
