use std::collections::HashMap;

use gridpath_core::Cell;

/// Maps each reached cell to the cell it was reached from. The start cell
/// has no entry.
pub type PredecessorMap = HashMap<Cell, Cell>;

/// Walk `preds` back from `end` to the cell with no predecessor and return
/// the cells in forward order, `end` last.
///
/// Engines only ever point a cell at one that was expanded before it, so the
/// map is acyclic and the walk terminates.
pub fn reconstruct(preds: &PredecessorMap, end: Cell) -> Vec<Cell> {
    let mut path = vec![end];
    let mut cur = end;
    while let Some(&prev) = preds.get(&cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
