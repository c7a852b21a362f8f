//! Read-only views of the sort automaton between steps.
use crate::sort::key::SortKey;
use crate::sort::{PartitionFrame, Phase};

/// The micro-operation performed by the most recent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAction {
    /// Element `index` was compared with the pivot. If it was not greater, it was
    /// exchanged into the store slot `exchanged_with`.
    Scanned {
        index: usize,
        exchanged_with: Option<usize>,
    },
    /// The pivot was exchanged into its final slot.
    PivotPlaced { index: usize },
    /// Observation tick after pivot placement.
    PivotShown { index: usize },
    /// A sub-range became the current range. `deferred` was pushed onto the pending stack.
    Entered {
        left: usize,
        right: usize,
        deferred: Option<(usize, usize)>,
    },
    /// The current range was popped from the pending stack.
    Resumed { left: usize, right: usize },
    /// Nothing is left to sort.
    Finished,
}

/// How a renderer should highlight an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Pivot,
    /// Under the store cursor `i` or the scan cursor `j`.
    Scan,
    Idle,
}

/// Automaton state as seen after a step.
#[derive(Debug)]
pub struct Snapshot<'a, T> {
    /// Current partition frame, `None` once sorting has finished.
    pub frame: Option<PartitionFrame>,
    /// The full element sequence.
    pub items: &'a [T],
    /// Pending ranges, bottom of the stack first.
    pub pending: &'a [(usize, usize)],
    /// What the last step did. `None` when the step had nothing to do.
    pub action: Option<SortAction>,
}

impl<T> Clone for Snapshot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Snapshot<'_, T> {}

impl<'a, T> Snapshot<'a, T> {
    pub fn is_finished(&self) -> bool {
        self.frame.is_none()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.frame.map(|f| f.phase)
    }

    /// Highlight role of element `index`.
    pub fn role(&self, index: usize) -> ElementRole {
        let Some(frame) = self.frame else {
            return ElementRole::Idle;
        };
        if index == frame.pivot_index {
            ElementRole::Pivot
        } else if index == frame.j || frame.store_index() == Some(index) {
            ElementRole::Scan
        } else {
            ElementRole::Idle
        }
    }

    /// Roles for every element, in sequence order.
    pub fn roles(&self) -> impl Iterator<Item = ElementRole> + '_ {
        (0..self.items.len()).map(|k| self.role(k))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a T::Key> + 'a
    where
        T: SortKey,
        T::Key: 'a,
    {
        self.items.iter().map(SortKey::sort_key)
    }
}
