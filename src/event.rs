use {
    crate::{FrameId, PageId, Policy},
    std::fmt,
};

/// Outcome of a single page access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The page was already resident.
    Hit,

    /// The page had to be loaded, possibly evicting another one.
    Fault,
}

impl Outcome {
    /// Upper-case name of the outcome.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Outcome::Hit => "HIT",
            Outcome::Fault => "FAULT",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Page pushed out of its frame by a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eviction<P: PageId> {
    /// Frame the page was evicted from.
    pub frame: FrameId,

    /// Evicted page.
    pub page: P,
}

/// Outcome of one access, with the engine state right after it.
///
/// Records are immutable once appended to the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord<P: PageId> {
    /// Logical clock value of the access (1 for the first one).
    pub clock: u64,

    /// Accessed page.
    pub page: P,

    /// Whether the access hit or faulted.
    pub outcome: Outcome,

    /// Frame holding the page after the access.
    pub frame: FrameId,

    /// Page evicted to make room, if any.
    pub evicted: Option<Eviction<P>>,

    /// Frame contents ordered by frame id, `None` marking an empty frame.
    pub frames: Vec<Option<P>>,

    /// Resident pages in eviction order (earliest load first).
    pub eviction_queue: Vec<P>,
}

impl<P: PageId> EventRecord<P> {
    /// Whether the access was a hit.
    #[must_use]
    pub fn is_hit(&self) -> bool {
        self.outcome == Outcome::Hit
    }

    /// Whether the access was a fault.
    #[must_use]
    pub fn is_fault(&self) -> bool {
        self.outcome == Outcome::Fault
    }

    /// Plain-text log line of the access under the given policy.
    #[must_use]
    pub const fn log(&self, policy: Policy) -> AccessLog<'_, P> {
        AccessLog {
            policy,
            record: self,
        }
    }
}

/// Plain-text summary of one access.
///
/// This is what the explanation generator gets to see. Renders as a single
/// line, e.g.
///
/// ```text
/// [FIFO] page 2: FAULT, evicted page 7 from frame 0 | frames: 2 0 1 | queue: 0 1 2
/// ```
#[derive(Debug)]
pub struct AccessLog<'a, P: PageId> {
    /// Policy the engine runs.
    pub policy: Policy,

    /// Logged access.
    pub record: &'a EventRecord<P>,
}

impl<P: PageId> Clone for AccessLog<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: PageId> Copy for AccessLog<'_, P> {}

/// Marker rendered for an empty frame.
pub const EMPTY_FRAME: &str = "EMPTY";

impl<P: PageId> fmt::Display for AccessLog<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        write!(f, "[{}] page {}: {}", self.policy, record.page, record.outcome)?;
        match (&record.evicted, record.outcome) {
            (Some(evicted), _) => write!(
                f,
                ", evicted page {} from frame {}",
                evicted.page, evicted.frame
            )?,
            (None, Outcome::Fault) => write!(f, ", loaded into empty frame {}", record.frame)?,
            (None, Outcome::Hit) => write!(f, " in frame {}", record.frame)?,
        }

        f.write_str(" | frames:")?;
        for slot in &record.frames {
            match slot {
                Some(page) => write!(f, " {page}")?,
                None => write!(f, " {EMPTY_FRAME}")?,
            }
        }
        f.write_str(" | queue:")?;
        for page in &record.eviction_queue {
            write!(f, " {page}")?;
        }
        Ok(())
    }
}
