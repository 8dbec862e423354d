use std::collections::BinaryHeap;

use super::{DijkstraQueue, DijkstraQueueElement};

/// Binary heap queue. Supports arbitrary push order.
#[derive(Clone, Default)]
pub struct HeapQueue {
    queue: BinaryHeap<DijkstraQueueElement>,
}

impl HeapQueue {
    pub fn new() -> HeapQueue {
        HeapQueue {
            queue: BinaryHeap::new(),
        }
    }
}

impl DijkstraQueue for HeapQueue {
    fn push(&mut self, element: DijkstraQueueElement) {
        self.queue.push(element)
    }

    fn pop(&mut self) -> Option<DijkstraQueueElement> {
        self.queue.pop()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}
