//! Event types and sinks for observing flora placement.
//!
//! [`crate::generator::FloraGenerator::apply_with_events`] sends exactly one
//! [`FloraEvent`] per call that does not fail.
use glam::IVec3;

use crate::rules::{DataVersion, FloraCategory};
use crate::world::BlockState;

/// Describes the outcome of a single placement decision.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum FloraEvent {
    /// A flora block was written above a matched surface.
    Placed {
        /// Surface position that was classified.
        surface: IVec3,
        /// Position that was written, directly above `surface`.
        target: IVec3,
        category: FloraCategory,
        block: BlockState,
        /// Value returned to the caller for this write.
        reported: bool,
    },

    /// No rule matched the surface; nothing was written.
    Skipped {
        surface: IVec3,
        block: BlockState,
        version: DataVersion,
    },
}

impl FloraEvent {
    pub fn surface(&self) -> IVec3 {
        match self {
            FloraEvent::Placed { surface, .. } | FloraEvent::Skipped { surface, .. } => *surface,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, FloraEvent::Placed { .. })
    }
}

/// A generic event sink that accepts [`FloraEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: FloraEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: FloraEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(FloraEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(FloraEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(FloraEvent),
{
    #[inline]
    fn send(&mut self, event: FloraEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<FloraEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<FloraEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[FloraEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of [`FloraEvent::Placed`] events collected.
    pub fn placed(&self) -> usize {
        self.events.iter().filter(|e| e.is_placed()).count()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: FloraEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn sinks(&self) -> &[S] {
        &self.sinks
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: FloraEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            sink.send(event.clone());
        }
        last.send(event);
    }
}
