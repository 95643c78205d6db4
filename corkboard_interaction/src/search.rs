// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free-cell search inside a bounded grid.

use hashbrown::HashSet;
use smallvec::SmallVec;

use corkboard_grid::geometry::Cell;

/// Cells of one container that are already taken.
pub type Occupied = HashSet<Cell>;

/// Nearest free cell to `start` inside `columns × rows`, searching outward in
/// square rings.
///
/// A `start` outside the grid is clamped onto its nearest edge cell first, so
/// the search never visits more than `max(columns, rows)` rings. Within a
/// ring, cells closer to `start` in straight-line distance win; ties go to the
/// lower row, then the lower column. Returns `None` when every cell is taken.
pub fn nearest_free(start: Cell, columns: usize, rows: usize, occupied: &Occupied) -> Option<Cell> {
    if columns == 0 || rows == 0 {
        return None;
    }
    let start = start.clamp(columns, rows);
    for radius in 0..columns.max(rows) {
        let mut ring = ring_cells(start, radius, columns, rows);
        ring.sort_by_key(|c| (squared_distance(start, *c), c.row, c.col));
        if let Some(found) = ring.into_iter().find(|c| !occupied.contains(c)) {
            return Some(found);
        }
    }
    None
}

/// Cells of the square ring at `radius` around `center` that lie in the grid.
fn ring_cells(center: Cell, radius: usize, columns: usize, rows: usize) -> SmallVec<[Cell; 16]> {
    let mut ring = SmallVec::new();
    let left = center.col.saturating_sub(radius);
    let right = center.col.saturating_add(radius).min(columns - 1);
    let top = center.row.saturating_sub(radius);
    let bottom = center.row.saturating_add(radius).min(rows - 1);
    for row in top..=bottom {
        if center.row.abs_diff(row) == radius {
            ring.extend((left..=right).map(|col| Cell::new(col, row)));
            continue;
        }
        // Side rows only contribute their two end cells.
        let sides = [center.col.checked_sub(radius), center.col.checked_add(radius)];
        for col in sides.into_iter().flatten().filter(|&col| col < columns) {
            ring.push(Cell::new(col, row));
        }
    }
    ring
}

/// Free cell for a member that no longer fits: the rightmost free column of its
/// own row if that row still exists, otherwise the nearest free cell.
pub fn same_row_or_nearest(
    cell: Cell,
    columns: usize,
    rows: usize,
    occupied: &Occupied,
) -> Option<Cell> {
    if cell.row < rows {
        let in_row = (0..columns)
            .rev()
            .map(|col| Cell::new(col, cell.row))
            .find(|c| !occupied.contains(c));
        if in_row.is_some() {
            return in_row;
        }
    }
    nearest_free(cell, columns, rows, occupied)
}

fn squared_distance(a: Cell, b: Cell) -> usize {
    let dc = a.col.abs_diff(b.col);
    let dr = a.row.abs_diff(b.row);
    dc * dc + dr * dr
}
