use std::cmp::Ordering;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::graphs::{VertexId, Weight};

pub mod heap_queue;
pub mod radix_queue;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DijkstraQueueElement {
    pub weight: Weight,
    pub vertex: VertexId,
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for DijkstraQueueElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that the we flip the ordering on weights.
        // In case of a tie we compare vertices - this step is necessary
        // to make implementations of `PartialEq` and `Ord` consistent.
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for DijkstraQueueElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl DijkstraQueueElement {
    pub fn new(weight: Weight, vertex: VertexId) -> DijkstraQueueElement {
        DijkstraQueueElement { weight, vertex }
    }
}

/// Min-priority queue keyed by tentative distance. Implementations may hold
/// several elements for the same vertex; the search discards stale ones.
pub trait DijkstraQueue {
    fn push(&mut self, element: DijkstraQueueElement);
    fn pop(&mut self) -> Option<DijkstraQueueElement>;
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
}

/// Selects the queue a search runs on.
#[derive(Debug, Default, ValueEnum, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueKind {
    #[default]
    Heap,
    Radix,
}

impl QueueKind {
    pub fn create(self) -> Box<dyn DijkstraQueue> {
        match self {
            QueueKind::Heap => Box::new(heap_queue::HeapQueue::new()),
            QueueKind::Radix => Box::new(radix_queue::RadixQueue::new()),
        }
    }
}
