use crate::{FrameId, PageId};

/// Physical frame: a slot that holds at most one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<P: PageId> {
    /// Position in the frame table.
    id: FrameId,

    /// Resident page, if any.
    page: Option<P>,

    /// Logical time of the most recent load or hit.
    ///
    /// Meaningful only while a page is resident.
    last_used: u64,
}

impl<P: PageId> Frame<P> {
    /// Creates an empty frame.
    #[must_use]
    pub const fn new(id: FrameId) -> Self {
        Self {
            id,
            page: None,
            last_used: 0,
        }
    }

    /// Frame identifier (its index in the frame table).
    #[must_use]
    pub const fn id(&self) -> FrameId {
        self.id
    }

    /// Currently resident page.
    #[must_use]
    pub const fn page(&self) -> Option<&P> {
        self.page.as_ref()
    }

    /// Logical time of the most recent load or hit, if a page is resident.
    #[must_use]
    pub fn last_used(&self) -> Option<u64> {
        self.page.as_ref().map(|_| self.last_used)
    }

    /// Whether the frame holds no page.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.page.is_none()
    }

    /// Records a hit on the resident page.
    pub(crate) fn touch(&mut self, now: u64) {
        self.last_used = now;
    }

    /// Binds the page into the frame, returning the page it replaces.
    pub(crate) fn load(&mut self, page: P, now: u64) -> Option<P> {
        self.last_used = now;
        self.page.replace(page)
    }
}
