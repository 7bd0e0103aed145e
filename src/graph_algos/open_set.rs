/// Slot value for nodes that are not in the heap
const NOT_QUEUED: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct HeapEntry<C> {
    node: usize,
    priority: C,
}


/// Binary min-heap of node ids keyed by priority
/// `slots[node]` holds the node's position in the heap so a lowered
/// priority can be sifted into place without searching for it.
/// Equal priorities leave the heap structure alone, so the pop order is
/// fixed for a given sequence of operations.
#[derive(Clone, Debug)]
pub struct OpenSet<C> {
    heap: Vec<HeapEntry<C>>,
    slots: Vec<usize>,
}

impl<C> Default for OpenSet<C> {
    fn default() -> Self {
        Self { heap: Vec::new(), slots: Vec::new() }
    }
}

impl<C: PartialOrd + Copy> OpenSet<C> {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, node: usize) -> bool {
        self.slot(node).is_some()
    }

    /// Current priority of a queued node
    pub fn priority(&self, node: usize) -> Option<C> {
        self.slot(node).map(|pos| self.heap[pos].priority)
    }

    fn slot(&self, node: usize) -> Option<usize> {
        self.slots.get(node).copied().filter(|&pos| pos != NOT_QUEUED)
    }

    /// Queue a node that is not already queued
    pub fn push(&mut self, node: usize, priority: C) {
        debug_assert!(!self.contains(node), "node {node} queued twice");
        if node >= self.slots.len() {
            self.slots.resize(node + 1, NOT_QUEUED);
        }
        let pos = self.heap.len();
        self.heap.push(HeapEntry { node, priority });
        self.slots[node] = pos;
        self.sift_up(pos);
    }

    /// Remove the node with the smallest priority
    pub fn pop(&mut self) -> Option<(usize, C)> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.slots[entry.node] = NOT_QUEUED;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.node, entry.priority))
    }

    /// Lower the priority of a queued node and restore heap order
    /// Returns false if the node is not queued
    pub fn decrease_key(&mut self, node: usize, priority: C) -> bool {
        let Some(pos) = self.slot(node) else {
            return false;
        };
        debug_assert!(
            !(self.heap[pos].priority < priority),
            "decrease_key raised the priority of node {node}"
        );
        self.heap[pos].priority = priority;
        self.sift_up(pos);
        true
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].node] = a;
        self.slots[self.heap[b].node] = b;
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].priority < self.heap[parent].priority {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}
