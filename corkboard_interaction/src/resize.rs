// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container resize: clamp, repack, and align.
//!
//! While the handle moves, the proposal is clamped so no member is clipped and
//! only members whose cell falls outside the new grid are relocated. Members
//! that still fit keep their cell. Each preview is computed from the board
//! captured when the resize began, so shrinking and growing back restores the
//! original arrangement.
//!
//! On release the size snaps to the exact grid-aligned size for its column and
//! row count, the repack runs once more against that size, and overlap
//! resolution runs with the resized container held in place.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use corkboard_board::{Board, Settled, clamp_width};
use corkboard_grid::geometry::{CellFrame, columns, max_rows};
use corkboard_grid::{
    ContainerId, ContainerKind, GridConfig, Placement, aligned_size, minimum_size,
};

use crate::search::{Occupied, same_row_or_nearest};
use crate::throttle::{DEFAULT_INTERVAL_MS, Throttle};

/// Clamp a proposed container size to what `member_count` members need.
///
/// Non-finite proposals collapse to the minimum.
pub fn clamp_proposal(config: &GridConfig, member_count: usize, proposed: Size) -> Size {
    let min = minimum_size(config, member_count, proposed.width);
    let width = clamp_width(config, proposed.width).max(min.width);
    let height = if proposed.height.is_finite() {
        proposed.height.max(min.height)
    } else {
        min.height
    };
    Size::new(width, height)
}

/// Resize container `id` to `size` and relocate the members that no longer fit.
///
/// A member fits when the cell it currently sits in (read from its position,
/// not its list index) lies inside the new `columns × rows` grid. Fitting
/// members stay in their cell. The rest are visited in reading order of their
/// old cell and take the rightmost free cell of their own row, or failing that
/// the nearest free cell. Freeform containers only change size.
pub fn repack(board: &Board, id: ContainerId, size: Size) -> Board {
    let Some(container) = board.container(id) else {
        return board.clone();
    };
    let resized = board.resize_container(id, size.width, Some(size.height));
    if container.kind == ContainerKind::Freeform {
        return resized;
    }

    let config = board.config();
    let current = CellFrame::new(config, container.origin, container.width);
    let next = CellFrame::new(config, container.origin, size.width);
    let cols = columns(config, size.width);
    let rows = max_rows(config, size.height);

    let mut occupied = Occupied::new();
    let mut placements = Vec::new();
    let mut misfits = Vec::new();
    for member in board.members_of(id) {
        let cell = current.cell_at(member.center());
        if cell.fits(cols, rows) && occupied.insert(cell) {
            placements.push(Placement {
                id: member.id,
                position: next.place(cell, member.size),
            });
        } else {
            misfits.push((cell, member));
        }
    }
    misfits.sort_by_key(|(cell, _)| (cell.row, cell.col));

    for (cell, member) in misfits {
        match same_row_or_nearest(cell, cols, rows, &occupied) {
            Some(free) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    item = member.id.0,
                    container = id.0,
                    from_col = cell.col,
                    from_row = cell.row,
                    to_col = free.col,
                    to_row = free.row,
                    "repacking member that no longer fits"
                );
                occupied.insert(free);
                placements.push(Placement {
                    id: member.id,
                    position: next.place(free, member.size),
                });
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::warn!(item = member.id.0, container = id.0, "no free cell left");
            }
        }
    }
    resized.place(&placements)
}

/// State of one container resize.
#[derive(Clone, Debug)]
pub struct ResizeSession {
    container: ContainerId,
    size: Size,
    throttle: Throttle,
    base: Board,
    preview: Board,
}

impl ResizeSession {
    /// Start resizing `container` with the default throttle.
    ///
    /// Returns `None` if the container does not exist.
    pub fn begin(board: &Board, container: ContainerId) -> Option<Self> {
        Self::begin_with(board, container, DEFAULT_INTERVAL_MS)
    }

    /// Start resizing with a custom throttle interval in milliseconds.
    pub fn begin_with(board: &Board, container: ContainerId, throttle_ms: u64) -> Option<Self> {
        let size = board.bounds_of(container)?.size();
        Some(Self {
            container,
            size,
            throttle: Throttle::new(throttle_ms),
            base: board.clone(),
            preview: board.clone(),
        })
    }

    /// The container being resized.
    pub const fn container(&self) -> ContainerId {
        self.container
    }

    /// Current clamped size.
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Snapshot to render while the resize is in progress.
    pub fn preview(&self) -> &Board {
        &self.preview
    }

    /// Handle a resize-handle move to `handle` (the bottom-right corner) at
    /// `now` milliseconds.
    ///
    /// Returns `false` when the move was throttled.
    pub fn on_move(&mut self, handle: Point, now: u64) -> bool {
        if !self.throttle.accept(now) {
            return false;
        }
        self.track(handle);
        true
    }

    /// Release the handle at `handle` and commit the aligned size.
    pub fn finish(mut self, handle: Point) -> Settled {
        self.track(handle);
        let config = self.base.config();
        let cols = columns(config, self.size.width);
        let rows = max_rows(config, self.size.height);
        let aligned = aligned_size(config, cols, rows);
        repack(&self.preview, self.container, aligned).resolve(Some(self.container))
    }

    fn track(&mut self, handle: Point) {
        let Some(container) = self.base.container(self.container) else {
            return;
        };
        let proposed = Size::new(handle.x - container.origin.x, handle.y - container.origin.y);
        let count = self.base.member_count(self.container);
        let size = clamp_proposal(self.base.config(), count, proposed);
        #[cfg(feature = "tracing")]
        if size != proposed {
            tracing::trace!(
                container = self.container.0,
                width = size.width,
                height = size.height,
                "resize clamped to content"
            );
        }
        self.size = size;
        self.preview = repack(&self.base, self.container, size);
    }
}
