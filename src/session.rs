use {
    crate::{Engine, EventRecord, Explainer, Narrator, PageId, PagerResult, Policy, Summary},
    chrono::{DateTime, Utc},
    log::warn,
    parking_lot::Mutex,
    std::sync::Arc,
};

/// Message used when the explainer gives up.
const NO_EXPLANATION: &str = "No explanation generated.";

/// Access result together with its explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainedAccess<P: PageId> {
    /// Event record appended by the engine.
    pub record: EventRecord<P>,

    /// Display text from the explainer, or a fallback message if it failed.
    pub explanation: String,
}

/// Simulation session.
///
/// Owns a single engine, so every caller (user, connection, test) gets a
/// simulation of its own. The handle is cheap to clone; clones share the
/// engine and serialize their accesses on it. Explanations are produced
/// outside the engine lock, so a slow explainer never holds up other accesses.
pub struct Session<P: PageId> {
    inner: Arc<Inner<P>>,
}

struct Inner<P: PageId> {
    engine: Mutex<Engine<P>>,
    explainer: Box<dyn Explainer<P> + Send + Sync>,
    created_at: DateTime<Utc>,
}

impl<P: PageId> Clone for Session<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: PageId + Send> Session<P> {
    /// Creates a session explained by the offline [`Narrator`].
    pub fn new(engine: Engine<P>) -> Self {
        Self::with_explainer(engine, Narrator)
    }

    /// Creates a session with a custom explainer.
    pub fn with_explainer<E>(engine: Engine<P>, explainer: E) -> Self
    where
        E: Explainer<P> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                engine: Mutex::new(engine),
                explainer: Box::new(explainer),
                created_at: Utc::now(),
            }),
        }
    }

    /// Accesses a page and explains the outcome.
    ///
    /// Explainer failures end up as the explanation text; they are never
    /// returned as errors.
    pub fn access(&self, page: P) -> PagerResult<ExplainedAccess<P>> {
        let (policy, record) = {
            let mut engine = self.inner.engine.lock();
            (engine.policy(), engine.access(page)?)
        };

        let explanation = match self.inner.explainer.explain(&record.log(policy)) {
            Ok(text) if text.trim().is_empty() => NO_EXPLANATION.to_owned(),
            Ok(text) => text.trim().to_owned(),
            Err(err) => {
                warn!("explanation of access {} failed: {err}", record.clock);
                format!("Explanation unavailable: {err}")
            }
        };

        Ok(ExplainedAccess {
            record,
            explanation,
        })
    }

    /// Policy the session's engine runs.
    pub fn policy(&self) -> Policy {
        self.inner.engine.lock().policy()
    }

    /// Hit and fault tally of the session so far.
    pub fn summary(&self) -> Summary {
        Summary::from_events(self.inner.engine.lock().events())
    }

    /// Runs a closure against the engine, e.g. to inspect its state.
    ///
    /// Accesses from other clones of the session wait until it returns.
    pub fn with_engine<R>(&self, f: impl FnOnce(&Engine<P>) -> R) -> R {
        f(&self.inner.engine.lock())
    }

    /// Time the session was created at.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }
}
