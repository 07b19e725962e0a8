#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(elided_lifetimes_in_paths)]

mod engine;
mod error;
mod event;
mod explain;
mod policy;
mod replacer;
mod report;
mod session;
mod util;

use std::{fmt, hash::Hash};

pub use {
    engine::{Engine, EngineConfig, Frame},
    error::{PagerError, PagerResult},
    event::{AccessLog, EMPTY_FRAME, EventRecord, Eviction, Outcome},
    explain::{ExplainError, Explainer, Narrator},
    policy::Policy,
    report::{Summary, compare, simulate},
    session::{ExplainedAccess, Session},
    util::LogicalClock,
};

/// Page identifier type.
///
/// Pages are opaque to the engine: any value that can be hashed, compared and
/// printed will do, e.g. integers or strings.
pub trait PageId: Clone + Hash + Eq + fmt::Display + fmt::Debug {}

impl<T> PageId for T where T: Clone + Hash + Eq + fmt::Display + fmt::Debug {}

/// Frame identifier.
///
/// The engine keeps a fixed-size array of frames, where each frame is a slot
/// able to hold a single page. The frame identifier is an index into this
/// array.
pub type FrameId = usize;
