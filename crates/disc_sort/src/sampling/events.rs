//! Event types and sinks for observing sampling runs.
//!
//! [`crate::sampling::PoissonDiscSampling::generate_with_events`] reports each seeded,
//! accepted and deactivated point in the order it happened, so a caller can replay the
//! run one point per tick.
use glam::Vec2;

use crate::sampling::poisson_disc::SamplingResult;

/// Describes events emitted while sampling.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SamplingEvent {
    /// The initial random point was placed.
    Seeded {
        /// Index of the point in the output list.
        index: usize,
        /// Position of the point.
        position: Vec2,
    },

    /// A candidate passed the bounds and distance checks.
    Accepted {
        /// Index of the new point in the output list.
        index: usize,
        /// Index of the frontier point that spawned it.
        parent: usize,
        /// Position of the new point.
        position: Vec2,
    },

    /// A frontier point exhausted its attempt budget and left the frontier.
    Deactivated {
        /// Index of the point in the output list.
        index: usize,
    },

    /// Emitted once when the frontier is empty.
    Finished {
        /// Final points and counters.
        result: SamplingResult,
    },
}

/// Discriminant of [`SamplingEvent`] used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingEventKind {
    Seeded,
    Accepted,
    Deactivated,
    Finished,
}

impl SamplingEvent {
    pub fn kind(&self) -> SamplingEventKind {
        match self {
            SamplingEvent::Seeded { .. } => SamplingEventKind::Seeded,
            SamplingEvent::Accepted { .. } => SamplingEventKind::Accepted,
            SamplingEvent::Deactivated { .. } => SamplingEventKind::Deactivated,
            SamplingEvent::Finished { .. } => SamplingEventKind::Finished,
        }
    }
}

/// A generic event sink that accepts [`SamplingEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SamplingEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: SamplingEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SamplingEvent) {}

    #[inline]
    fn wants(&self, _kind: SamplingEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SamplingEvent),
{
    #[inline]
    fn send(&mut self, event: SamplingEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally filtered by kind.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SamplingEvent>,
    only: Option<Vec<SamplingEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect only events whose kind is listed.
    pub fn only(kinds: impl IntoIterator<Item = SamplingEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<SamplingEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SamplingEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SamplingEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: SamplingEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: SamplingEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            sink.send(event.clone());
        }
        last.send(event);
    }

    fn wants(&self, kind: SamplingEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
