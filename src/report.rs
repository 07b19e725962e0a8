//! Running whole reference streams and tallying their outcomes.

use crate::{Engine, EventRecord, PageId, PagerResult, Policy};

/// Hit and fault tally of a simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of accesses.
    pub accesses: usize,

    /// Accesses that found their page resident.
    pub hits: usize,

    /// Accesses that had to load their page.
    pub faults: usize,
}

impl Summary {
    /// Tallies an event log.
    pub fn from_events<P: PageId>(events: &[EventRecord<P>]) -> Self {
        let hits = events.iter().filter(|event| event.is_hit()).count();
        Self {
            accesses: events.len(),
            hits,
            faults: events.len() - hits,
        }
    }

    /// Share of accesses that hit, 0 if nothing was accessed.
    pub fn hit_ratio(&self) -> f64 {
        if self.accesses == 0 {
            return 0.0;
        }
        self.hits as f64 / self.accesses as f64
    }

    /// Share of accesses that faulted, 0 if nothing was accessed.
    pub fn fault_ratio(&self) -> f64 {
        if self.accesses == 0 {
            return 0.0;
        }
        self.faults as f64 / self.accesses as f64
    }
}

/// Runs the whole reference stream through a fresh engine.
///
/// The engine is handed the stream upfront, so this works for every policy
/// including [`Policy::Optimal`].
pub fn simulate<P: PageId>(
    frame_count: usize,
    policy: Policy,
    stream: &[P],
) -> PagerResult<Engine<P>> {
    let mut engine = Engine::with_reference(frame_count, policy, stream)?;
    engine.access_all(stream.iter().cloned())?;
    Ok(engine)
}

/// Runs the reference stream under every policy.
///
/// Results follow the order of [`Policy::ALL`]; the [`Policy::Optimal`] entry
/// is the lower bound on faults the other policies can be measured against.
pub fn compare<P: PageId>(
    frame_count: usize,
    stream: &[P],
) -> PagerResult<Vec<(Policy, Summary)>> {
    Policy::ALL
        .into_iter()
        .map(|policy| {
            let engine = simulate(frame_count, policy, stream)?;
            Ok((policy, Summary::from_events(engine.events())))
        })
        .collect()
}
