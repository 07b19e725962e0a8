use {crate::FrameId, std::collections::VecDeque};

/// Eviction order queue.
///
/// Occupied frames in the order their current pages were loaded (front is the
/// oldest load). Hits leave the order untouched, which is what separates FIFO
/// from LRU.
#[derive(Debug, Default, Clone)]
pub struct LoadOrder {
    queue: VecDeque<FrameId>,
}

impl LoadOrder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }

    /// Records a load into the frame.
    pub fn push(&mut self, id: FrameId) {
        self.queue.push_back(id);
    }

    /// Removes the frame, wherever it sits in the queue.
    ///
    /// FIFO and LIFO victims are at the ends, so the scan is short for them.
    pub fn remove(&mut self, id: FrameId) -> bool {
        if self.queue.front() == Some(&id) {
            self.queue.pop_front();
            return true;
        }
        match self.queue.iter().rposition(|&queued| queued == id) {
            Some(pos) => self.queue.remove(pos).is_some(),
            None => false,
        }
    }

    /// Frame loaded earliest.
    pub fn oldest(&self) -> Option<FrameId> {
        self.queue.front().copied()
    }

    /// Frame loaded most recently.
    pub fn newest(&self) -> Option<FrameId> {
        self.queue.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.queue.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
