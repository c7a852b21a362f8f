//! Quicksort as a steppable state machine.
//!
//! [`SortAutomaton`] performs one micro-operation per [`SortAutomaton::step`] call: a
//! single comparison during partitioning, the pivot placement, one observation tick, or
//! one decision about which sub-range to process next. Pacing is left to the caller.
use std::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Error, Result};

pub mod key;
pub mod snapshot;

pub use key::{Keyed, SortKey};
pub use snapshot::{ElementRole, Snapshot, SortAction};

/// Phase of the current partition frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Scanning `j` across the range and growing the `<= pivot` prefix.
    Partition,
    /// The pivot has been placed. Lasts one step.
    Swap,
    /// Choosing the next range.
    Recurse,
}

/// Cursor into the range being partitioned (Lomuto scheme).
///
/// While in [`Phase::Partition`], `left <= i + 1 <= j <= right` holds and every element
/// in `left..=i` is not greater than the pivot. After the pivot placement, `i` is the
/// pivot's final slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionFrame {
    pub left: usize,
    pub right: usize,
    pub pivot_index: usize,
    /// Last slot of the `<= pivot` prefix. Starts at `left - 1`.
    pub i: isize,
    /// Next element to compare with the pivot.
    pub j: usize,
    pub phase: Phase,
}

impl PartitionFrame {
    /// Fresh frame over `left..=right` with the last element as pivot.
    pub fn new(left: usize, right: usize) -> Self {
        Self {
            left,
            right,
            pivot_index: right,
            i: left as isize - 1,
            j: left,
            phase: Phase::Partition,
        }
    }

    /// `i` as an index, or `None` while the prefix is still empty at slot 0.
    pub fn store_index(&self) -> Option<usize> {
        usize::try_from(self.i).ok()
    }
}

/// Which sub-range is processed right after a partition; the other is deferred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecursionOrder {
    /// Enter the smaller side, defer the larger. Keeps the pending stack within
    /// `⌊log2 n⌋` entries.
    #[default]
    SmallerFirst,
    /// Enter the larger side, defer the smaller. Side lengths are compared exactly and
    /// ties enter the upper side. The pending stack may grow linearly on unlucky input.
    LargerFirst,
}

/// Counters for the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Steps that changed state.
    pub steps: usize,
    pub comparisons: usize,
    /// Exchanges of two distinct slots.
    pub exchanges: usize,
    /// Deepest the pending stack has been.
    pub max_pending_depth: usize,
}

/// Iterative quicksort that advances one micro-operation per [`Self::step`].
#[derive(Debug, Clone)]
pub struct SortAutomaton<T> {
    items: Vec<T>,
    frame: Option<PartitionFrame>,
    pending: Vec<(usize, usize)>,
    order: RecursionOrder,
    last_action: Option<SortAction>,
    stats: SortStats,
}

impl<T: SortKey> SortAutomaton<T> {
    /// Wrap `items`. Sorting does not begin until [`Self::start`].
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            frame: None,
            pending: Vec::new(),
            order: RecursionOrder::default(),
            last_action: None,
            stats: SortStats::default(),
        }
    }

    /// Sets the recursion order used by subsequent runs.
    pub fn with_order(mut self, order: RecursionOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> RecursionOrder {
        self.order
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Swap in a new sequence, abandoning any run in progress. Returns the old one.
    pub fn replace_items(&mut self, items: Vec<T>) -> Vec<T> {
        self.reset();
        std::mem::replace(&mut self.items, items)
    }

    pub fn is_sorting(&self) -> bool {
        self.frame.is_some()
    }

    pub fn frame(&self) -> Option<&PartitionFrame> {
        self.frame.as_ref()
    }

    /// Pending ranges, bottom of the stack first.
    pub fn pending(&self) -> &[(usize, usize)] {
        &self.pending
    }

    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    /// Begin sorting the whole sequence.
    ///
    /// With fewer than two elements the automaton stays finished and
    /// [`Error::EmptyRange`] is returned.
    pub fn start(&mut self) -> Result<()> {
        match self.items.len() {
            len @ (0 | 1) => {
                self.reset();
                Err(Error::EmptyRange { len })
            }
            len => self.start_range(0..=len - 1),
        }
    }

    /// Begin sorting `range` only. Elements outside it are never touched.
    pub fn start_range(&mut self, range: RangeInclusive<usize>) -> Result<()> {
        let (left, right) = range.into_inner();
        if left <= right && right >= self.items.len() {
            return Err(Error::RangeOutOfBounds {
                left,
                right,
                len: self.items.len(),
            });
        }

        self.reset();
        if left >= right {
            return Err(Error::EmptyRange {
                len: (right + 1).saturating_sub(left),
            });
        }

        self.frame = Some(PartitionFrame::new(left, right));
        self.last_action = Some(SortAction::Entered {
            left,
            right,
            deferred: None,
        });
        debug!(
            "Quicksort started on {}..={} ({:?}).",
            left, right, self.order
        );
        Ok(())
    }

    /// Perform one micro-operation and return the resulting state.
    ///
    /// Once sorting has finished this is a no-op whose snapshot carries no action.
    pub fn step(&mut self) -> Snapshot<'_, T> {
        let Some(mut frame) = self.frame else {
            trace!("Quicksort step requested while idle.");
            self.last_action = None;
            return self.snapshot();
        };

        self.stats.steps += 1;
        let action = match frame.phase {
            Phase::Partition if frame.j < frame.right => {
                let j = frame.j;
                let exchanged_with =
                    if self.items[j].sort_key() <= self.items[frame.pivot_index].sort_key() {
                        frame.i += 1;
                        let i = frame.i as usize;
                        self.exchange(i, j);
                        Some(i)
                    } else {
                        None
                    };
                self.stats.comparisons += 1;
                frame.j += 1;
                self.frame = Some(frame);
                SortAction::Scanned {
                    index: j,
                    exchanged_with,
                }
            }
            Phase::Partition => {
                frame.i += 1;
                let index = frame.i as usize;
                self.exchange(index, frame.pivot_index);
                frame.phase = Phase::Swap;
                self.frame = Some(frame);
                SortAction::PivotPlaced { index }
            }
            Phase::Swap => {
                frame.phase = Phase::Recurse;
                self.frame = Some(frame);
                SortAction::PivotShown {
                    index: frame.i as usize,
                }
            }
            Phase::Recurse => self.recurse(&frame),
        };

        trace!("Quicksort step {}: {:?}.", self.stats.steps, action);
        if action == SortAction::Finished {
            debug!(
                "Quicksort finished in {} steps ({} comparisons, {} exchanges, max pending depth {}).",
                self.stats.steps,
                self.stats.comparisons,
                self.stats.exchanges,
                self.stats.max_pending_depth,
            );
        }

        self.last_action = Some(action);
        self.snapshot()
    }

    /// Current state without advancing.
    pub fn snapshot(&self) -> Snapshot<'_, T> {
        Snapshot {
            frame: self.frame,
            items: &self.items,
            pending: &self.pending,
            action: self.last_action,
        }
    }

    /// Step until finished, returning the number of steps taken.
    pub fn run_to_end(&mut self) -> usize {
        let mut steps = 0;
        while self.is_sorting() {
            self.step();
            steps += 1;
        }
        steps
    }

    fn recurse(&mut self, frame: &PartitionFrame) -> SortAction {
        let pivot = frame.i as usize;
        let lower_len = pivot - frame.left;
        let upper_len = frame.right - pivot;
        let lower = (lower_len >= 2).then(|| (frame.left, pivot - 1));
        let upper = (upper_len >= 2).then(|| (pivot + 1, frame.right));

        let lower_first = match self.order {
            RecursionOrder::SmallerFirst => lower_len < upper_len,
            RecursionOrder::LargerFirst => lower_len > upper_len,
        };
        let (first, deferred) = if lower_first {
            (lower, upper)
        } else {
            (upper, lower)
        };

        match (first, deferred) {
            (Some(range), Some(later)) => {
                self.push_pending(later);
                self.enter(range);
                SortAction::Entered {
                    left: range.0,
                    right: range.1,
                    deferred: Some(later),
                }
            }
            (Some(range), None) | (None, Some(range)) => {
                self.enter(range);
                SortAction::Entered {
                    left: range.0,
                    right: range.1,
                    deferred: None,
                }
            }
            (None, None) => match self.pending.pop() {
                Some(range) => {
                    self.enter(range);
                    SortAction::Resumed {
                        left: range.0,
                        right: range.1,
                    }
                }
                None => {
                    self.frame = None;
                    SortAction::Finished
                }
            },
        }
    }

    fn enter(&mut self, (left, right): (usize, usize)) {
        debug_assert!(left < right);
        self.frame = Some(PartitionFrame::new(left, right));
    }

    fn push_pending(&mut self, range: (usize, usize)) {
        self.pending.push(range);
        self.stats.max_pending_depth = self.stats.max_pending_depth.max(self.pending.len());
    }

    /// The only way elements move.
    #[inline]
    fn exchange(&mut self, a: usize, b: usize) {
        if a != b {
            self.items.swap(a, b);
            self.stats.exchanges += 1;
        }
    }

    fn reset(&mut self) {
        self.frame = None;
        self.pending.clear();
        self.last_action = None;
        self.stats = SortStats::default();
    }
}
