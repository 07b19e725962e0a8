//! Page replacement engine.

mod frame;

pub use frame::Frame;

use {
    crate::{
        EventRecord,
        Eviction,
        FrameId,
        Outcome,
        PageId,
        PagerError,
        PagerResult,
        Policy,
        replacer::{Candidates, LoadOrder, LookAhead, Recency},
        util::LogicalClock,
    },
    log::{debug, error, trace, warn},
    std::collections::HashMap,
};

/// Configuration of the page replacement engine.
#[derive(Debug, Clone)]
pub struct EngineConfig<P: PageId> {
    /// Number of physical frames. Must be at least 1.
    pub frame_count: usize,

    /// Replacement policy.
    pub policy: Policy,

    /// Full reference stream, consulted by [`Policy::Optimal`] to look ahead.
    /// Other policies ignore it.
    pub reference_stream: Vec<P>,
}

impl<P: PageId> Default for EngineConfig<P> {
    fn default() -> Self {
        Self {
            frame_count: 4,
            policy: Policy::default(),
            reference_stream: Vec::new(),
        }
    }
}

/// Page replacement engine.
///
/// Owns a fixed table of frames and serves page accesses one at a time: a
/// resident page is a hit, anything else is a fault that loads the page into
/// the first empty frame or, once all frames are in use, into a victim frame
/// chosen by the policy.
///
/// The engine is a plain synchronous state machine driven through `&mut self`.
/// Use one engine per simulation; see [`Session`](crate::Session) to share one
/// between threads.
#[derive(Debug, Clone)]
pub struct Engine<P: PageId> {
    policy: Policy,

    /// Frame table, indexed by frame id.
    frames: Vec<Frame<P>>,

    /// Reverse index: resident page to the frame holding it.
    page_table: HashMap<P, FrameId>,

    /// Occupied frames in load order (FIFO/LIFO).
    load_order: LoadOrder,

    /// Occupied frames by last use (LRU/MRU).
    recency: Recency,

    /// Reference stream cursor (OPTIMAL).
    look_ahead: LookAhead<P>,

    clock: LogicalClock,

    /// Event log, one record per access.
    events: Vec<EventRecord<P>>,

    /// Error that broke the engine; every later access fails with it.
    failure: Option<PagerError>,
}

impl<P: PageId> Engine<P> {
    /// Creates an engine without a reference stream.
    pub fn new(frame_count: usize, policy: Policy) -> PagerResult<Self> {
        Self::with_config(EngineConfig {
            frame_count,
            policy,
            reference_stream: Vec::new(),
        })
    }

    /// Creates an engine that knows the reference stream upfront.
    pub fn with_reference(
        frame_count: usize,
        policy: Policy,
        reference_stream: impl Into<Vec<P>>,
    ) -> PagerResult<Self> {
        Self::with_config(EngineConfig {
            frame_count,
            policy,
            reference_stream: reference_stream.into(),
        })
    }

    /// Creates an engine with the given configuration.
    ///
    /// All frames start empty and the logical clock at 0.
    pub fn with_config(config: EngineConfig<P>) -> PagerResult<Self> {
        let EngineConfig {
            frame_count,
            policy,
            reference_stream,
        } = config;

        if frame_count == 0 {
            return Err(PagerError::InvalidFrameCount(frame_count));
        }
        if policy.needs_reference_stream() && reference_stream.is_empty() {
            warn!("{policy} engine created without a reference stream: no page has a future use");
        }
        debug!("{policy} engine created with {frame_count} frames");

        Ok(Self {
            policy,
            frames: (0..frame_count).map(Frame::new).collect(),
            page_table: HashMap::with_capacity(frame_count),
            load_order: LoadOrder::with_capacity(frame_count),
            recency: Recency::with_capacity(frame_count),
            look_ahead: LookAhead::new(&reference_stream),
            clock: LogicalClock::new(),
            events: Vec::new(),
            failure: None,
        })
    }

    /// Accesses a page.
    ///
    /// Returns the appended event record. An error means the engine's
    /// bookkeeping is broken: no event is logged for the failed access, and
    /// every later access fails with the same error.
    pub fn access(&mut self, page: P) -> PagerResult<EventRecord<P>> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let result = self.step(page);
        if let Err(err) = &result {
            error!("{} engine failed at clock {}: {err}", self.policy, self.clock.now());
            self.failure = Some(err.clone());
        }
        result
    }

    fn step(&mut self, page: P) -> PagerResult<EventRecord<P>> {
        let now = self.clock.tick().ok_or(PagerError::ClockExhausted)?;
        self.look_ahead.advance();

        if let Some(&id) = self.page_table.get(&page) {
            self.frames[id].touch(now);
            self.recency.touch(id, now);
            trace!("page {page} hit in frame {id}");
            return Ok(self.record(now, page, Outcome::Hit, id, None));
        }

        let target = match self.frames.iter().position(Frame::is_empty) {
            Some(id) => id,
            None => self
                .candidates()
                .victim(self.policy)
                .ok_or(PagerError::NoCandidateFrame { clock: now })?,
        };

        let evicted = self.frames[target]
            .load(page.clone(), now)
            .map(|victim| {
                self.page_table.remove(&victim);
                self.load_order.remove(target);
                self.recency.remove(target);
                debug!("page {victim} evicted from frame {target} by {}", self.policy);
                Eviction {
                    frame: target,
                    page: victim,
                }
            });
        self.page_table.insert(page.clone(), target);
        self.load_order.push(target);
        self.recency.touch(target, now);
        debug!("page {page} faulted into frame {target}");

        Ok(self.record(now, page, Outcome::Fault, target, evicted))
    }

    /// Runs every page of the stream through [`access`](Self::access).
    pub fn access_all<I>(&mut self, pages: I) -> PagerResult<()>
    where
        I: IntoIterator<Item = P>,
    {
        for page in pages {
            self.access(page)?;
        }
        Ok(())
    }

    /// Replacement policy of the engine.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of occupied frames.
    pub fn occupancy(&self) -> usize {
        self.page_table.len()
    }

    /// Current logical clock value, i.e. the number of accesses so far.
    pub fn clock(&self) -> u64 {
        self.clock.now()
    }

    /// Frame table.
    pub fn frame_table(&self) -> &[Frame<P>] {
        &self.frames
    }

    /// Frame contents ordered by frame id, `None` marking an empty frame.
    pub fn frames(&self) -> Vec<Option<P>> {
        self.frames.iter().map(|frame| frame.page().cloned()).collect()
    }

    /// Resident pages in eviction order (earliest load first).
    pub fn eviction_queue(&self) -> Vec<P> {
        self.load_order
            .iter()
            .filter_map(|id| {
                let page = self.frames[id].page();
                debug_assert!(page.is_some(), "queued frame {id} is empty");
                page.cloned()
            })
            .collect()
    }

    /// Error that broke the engine, if any.
    pub fn failure(&self) -> Option<&PagerError> {
        self.failure.as_ref()
    }

    /// Frame currently holding the page.
    pub fn frame_of(&self, page: &P) -> Option<FrameId> {
        self.page_table.get(page).copied()
    }

    /// Most recent event.
    pub fn last_event(&self) -> Option<&EventRecord<P>> {
        self.events.last()
    }

    /// Event log, in access order.
    pub fn events(&self) -> &[EventRecord<P>] {
        &self.events
    }

    fn candidates(&self) -> Candidates<'_, P> {
        Candidates {
            frames: &self.frames,
            load_order: &self.load_order,
            recency: &self.recency,
            look_ahead: &self.look_ahead,
        }
    }

    fn record(
        &mut self,
        clock: u64,
        page: P,
        outcome: Outcome,
        frame: FrameId,
        evicted: Option<Eviction<P>>,
    ) -> EventRecord<P> {
        debug_assert!(self.is_consistent(), "engine state diverged at clock {clock}");

        let record = EventRecord {
            clock,
            page,
            outcome,
            frame,
            evicted,
            frames: self.frames(),
            eviction_queue: self.eviction_queue(),
        };
        self.events.push(record.clone());
        record
    }

    /// Checks that the frame table and all indexes agree.
    pub(crate) fn is_consistent(&self) -> bool {
        let occupied = self.frames.iter().filter(|frame| !frame.is_empty()).count();

        occupied == self.page_table.len()
            && occupied == self.load_order.len()
            && occupied == self.recency.len()
            && self.frames.iter().all(|frame| match frame.page() {
                Some(page) => {
                    self.page_table.get(page) == Some(&frame.id())
                        && self.recency.last_used(frame.id()) == frame.last_used()
                }
                None => self.recency.last_used(frame.id()).is_none(),
            })
            && self
                .load_order
                .iter()
                .all(|id| self.frames.get(id).is_some_and(|frame| !frame.is_empty()))
    }
}
