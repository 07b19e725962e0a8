//! Belady's optimal replacement.
//!
//! The victim is the resident page that is needed again the latest, or never.
//! Not implementable online: it requires the full reference stream upfront.

use {
    crate::{Frame, FrameId, PageId},
    std::collections::HashMap,
};

/// Reference stream cursor.
///
/// Keeps the positions at which every page is referenced, so the next use of a
/// page after the cursor is a binary search away.
#[derive(Debug, Clone)]
pub struct LookAhead<P: PageId> {
    /// Ascending stream positions per page.
    positions: HashMap<P, Vec<usize>>,

    /// Position of the access being served; `None` before the first one.
    cursor: Option<usize>,
}

impl<P: PageId> LookAhead<P> {
    pub fn new(stream: &[P]) -> Self {
        let mut positions: HashMap<P, Vec<usize>> = HashMap::new();
        for (pos, page) in stream.iter().enumerate() {
            positions.entry(page.clone()).or_default().push(pos);
        }
        Self {
            positions,
            cursor: None,
        }
    }

    /// Moves the cursor onto the next reference and returns its position.
    pub fn advance(&mut self) -> usize {
        let next = self.cursor.map_or(0, |pos| pos.saturating_add(1));
        self.cursor = Some(next);
        next
    }

    /// Position of the first reference to the page strictly after the cursor.
    pub fn next_use(&self, page: &P) -> Option<usize> {
        let positions = self.positions.get(page)?;
        let from = self.cursor.map_or(0, |pos| pos.saturating_add(1));
        let idx = positions.partition_point(|&pos| pos < from);
        positions.get(idx).copied()
    }

    /// Picks the occupied frame whose page is used again the farthest.
    ///
    /// The first frame, in frame table order, holding a page that is never
    /// used again wins outright. Otherwise the farthest next use wins, with
    /// ties going to the earlier frame.
    pub fn farthest(&self, frames: &[Frame<P>]) -> Option<FrameId> {
        let mut victim: Option<(FrameId, usize)> = None;

        for frame in frames {
            let Some(page) = frame.page() else {
                continue;
            };
            match self.next_use(page) {
                None => return Some(frame.id()),
                Some(pos) => {
                    if victim.is_none_or(|(_, farthest)| pos > farthest) {
                        victim = Some((frame.id(), pos));
                    }
                }
            }
        }

        victim.map(|(id, _)| id)
    }
}
