#![forbid(unsafe_code)]
//! disc_sort: blue-noise point generation and an observable, single-step quicksort.
//!
//! Modules:
//! - sampling: Poisson-disc sampling over a rectangle, backed by a uniform spatial grid
//! - sort: quicksort as a state machine that exposes its partition frame after every step
//!
//! Both engines are driven by the caller. Nothing here renders, sleeps, or spawns threads.
pub mod error;
pub mod sampling;
pub mod sort;

/// Convenient re-exports for common types. Import with `use disc_sort::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::sampling::{
        generate, CandidateAngle, EventSink, FnSink, MultiSink, Point, PoissonDiscSampling,
        SamplingEvent, SamplingEventKind, SamplingResult, SpatialGrid, VecSink,
    };
    pub use crate::sort::{
        ElementRole, Keyed, PartitionFrame, Phase, RecursionOrder, Snapshot, SortAction,
        SortAutomaton, SortKey, SortStats,
    };
}
