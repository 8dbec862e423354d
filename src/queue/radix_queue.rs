use std::cmp::Reverse;

use radix_heap::RadixHeapMap;

use super::{DijkstraQueue, DijkstraQueueElement};
use crate::graphs::{VertexId, Weight};

/// Monotone radix heap. A pushed weight must not be smaller than the weight
/// popped last, which holds for searches over non-negative edge weights.
#[derive(Clone)]
pub struct RadixQueue {
    heap: RadixHeapMap<Reverse<Weight>, VertexId>,
}

impl Default for RadixQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl RadixQueue {
    pub fn new() -> RadixQueue {
        RadixQueue {
            heap: RadixHeapMap::new(),
        }
    }
}

impl DijkstraQueue for RadixQueue {
    fn push(&mut self, element: DijkstraQueueElement) {
        self.heap.push(Reverse(element.weight), element.vertex);
    }

    fn pop(&mut self) -> Option<DijkstraQueueElement> {
        let (Reverse(weight), vertex) = self.heap.pop()?;
        Some(DijkstraQueueElement { weight, vertex })
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
