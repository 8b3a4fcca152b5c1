use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Cell;

/// A frontier entry, ordered so that `BinaryHeap` (a max-heap) pops the
/// lowest priority first and, among equal priorities, the earliest pushed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) priority: f64,
    pub(crate) cell: Cell,
    seq: u64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of cells that tolerates duplicate entries.
///
/// Re-inserting a cell with a better priority leaves the old entry in
/// place; engines recognise it as stale when it is eventually popped.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, cell: Cell, priority: f64) {
        self.heap.push(Entry {
            priority,
            cell,
            seq: self.seq,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new();
        f.push(Cell::new(0, 0), 3.0);
        f.push(Cell::new(0, 1), 1.0);
        f.push(Cell::new(0, 2), 2.0);
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|e| e.cell.col).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut f = Frontier::new();
        for col in [4, 2, 7, 1] {
            f.push(Cell::new(0, col), 5.0);
        }
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|e| e.cell.col).collect();
        assert_eq!(order, vec![4, 2, 7, 1]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut f = Frontier::new();
        let c = Cell::new(3, 3);
        f.push(c, 4.0);
        f.push(c, 2.0);
        assert_eq!(f.len(), 2);
        assert_eq!(f.pop().map(|e| e.priority), Some(2.0));
        assert_eq!(f.pop().map(|e| e.priority), Some(4.0));
        assert!(f.pop().is_none());
    }
}
