// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure grid geometry: column/row counts, layout mode, and cell addressing.
//!
//! Everything here is a function of a [`GridConfig`] plus per-container state
//! and is deterministic: the same inputs always produce the same outputs.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size};

use crate::GridConfig;

/// How members are laid out inside a container of a given width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Two or more columns.
    Grid,
    /// A single column; items are stacked vertically and centered horizontally.
    Stack,
}

/// One grid slot inside a container's content area.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Zero-based column.
    pub col: usize,
    /// Zero-based row.
    pub row: usize,
}

impl Cell {
    /// Create a cell address.
    #[inline]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Clamp into `[0, columns - 1] × [0, rows - 1]`.
    #[inline]
    pub fn clamp(self, columns: usize, rows: usize) -> Self {
        Self {
            col: self.col.min(columns.saturating_sub(1)),
            row: self.row.min(rows.saturating_sub(1)),
        }
    }

    /// Whether the cell lies inside a `columns × rows` grid.
    #[inline]
    pub const fn fits(self, columns: usize, rows: usize) -> bool {
        self.col < columns && self.row < rows
    }

    /// Chebyshev (ring) distance to another cell.
    #[inline]
    pub const fn ring_distance(self, other: Self) -> usize {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        if dc > dr { dc } else { dr }
    }
}

/// Number of whole cells that fit in `extent`, at least one.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Cell counts are small positive integers; the float is already floored."
)]
fn whole_cells(config: &GridConfig, extent: f64) -> usize {
    let cells = ((extent + config.item_gap) / config.cell_size()).floor();
    if !cells.is_finite() || cells < 1.0 {
        return 1;
    }
    cells as usize
}

/// Number of grid columns offered by a container of `width`.
///
/// `max(1, floor((width − 2·padding + gap) / cell_size))`, monotonically
/// non-decreasing in `width`.
pub fn columns(config: &GridConfig, width: f64) -> usize {
    whole_cells(config, width - 2.0 * config.container_padding)
}

/// Number of rows an explicit total `height` (label band included) can show.
pub fn max_rows(config: &GridConfig, height: f64) -> usize {
    whole_cells(
        config,
        height - config.label_band_height - 2.0 * config.container_padding,
    )
}

/// Rows needed to hold `member_count` items in `columns` columns, at least one.
pub fn rows_needed(member_count: usize, columns: usize) -> usize {
    member_count.div_ceil(columns.max(1)).max(1)
}

/// Layout mode for a container of `width`.
pub fn layout_mode(config: &GridConfig, width: f64) -> LayoutMode {
    if columns(config, width) == 1 {
        LayoutMode::Stack
    } else {
        LayoutMode::Grid
    }
}

/// Cell addressing for one container at a fixed origin and width.
///
/// Grid and stack modes differ only in where column zero sits: in grid mode it
/// hugs the left padding, in stack mode it is centered in the content width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellFrame {
    first_center: Point,
    pitch: f64,
    item_max_size: f64,
    columns: usize,
    mode: LayoutMode,
}

impl CellFrame {
    /// Build the frame for a container whose label band starts at `origin`.
    pub fn new(config: &GridConfig, origin: Point, width: f64) -> Self {
        let columns = columns(config, width);
        let mode = layout_mode(config, width);
        let half = config.item_max_size / 2.0;
        let content_x = origin.x + config.container_padding;
        let content_y = origin.y + config.label_band_height + config.container_padding;
        let first_center_x = match mode {
            LayoutMode::Grid => content_x + half,
            LayoutMode::Stack => origin.x + width / 2.0,
        };
        Self {
            first_center: Point::new(first_center_x, content_y + half),
            pitch: config.cell_size(),
            item_max_size: config.item_max_size,
            columns,
            mode,
        }
    }

    /// Number of columns.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Layout mode.
    #[inline]
    pub const fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// World-space center of `cell`.
    pub fn center(&self, cell: Cell) -> Point {
        Point::new(
            self.first_center.x + count_to_f64(cell.col) * self.pitch,
            self.first_center.y + count_to_f64(cell.row) * self.pitch,
        )
    }

    /// Top-left position that centers an item of `size` inside `cell`.
    ///
    /// Sizes larger than the cell are treated as exactly cell-sized.
    pub fn place(&self, cell: Cell, size: Size) -> Point {
        let w = size.width.clamp(0.0, self.item_max_size);
        let h = size.height.clamp(0.0, self.item_max_size);
        let c = self.center(cell);
        Point::new(c.x - w / 2.0, c.y - h / 2.0)
    }

    /// Nearest cell to a world-space point, unbounded above and clamped at zero.
    pub fn cell_at(&self, point: Point) -> Cell {
        Cell::new(
            axis_index(point.x - self.first_center.x, self.pitch),
            axis_index(point.y - self.first_center.y, self.pitch),
        )
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "Row and column counts are far below 2^52."
)]
pub(crate) fn count_to_f64(n: usize) -> f64 {
    n as f64
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Rounded, non-negative, and bounded by the canvas extent."
)]
fn axis_index(offset: f64, pitch: f64) -> usize {
    let idx = (offset / pitch).round();
    if !idx.is_finite() || idx <= 0.0 {
        return 0;
    }
    idx as usize
}
