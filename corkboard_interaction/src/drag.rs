// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item drag: hover, snap, swap, and commit.
//!
//! A [`DragSession`] lives from pointer-down to pointer-up. Every accepted
//! pointer move recomputes a preview snapshot from the board captured at
//! pointer-down:
//!
//! - **Free**: the dragged item's center is outside every container. The item
//!   follows the pointer.
//! - **Hovering**: the center is inside a container but not within the snap
//!   threshold of the nearest cell center (or the container is freeform).
//!   The item still follows the pointer.
//! - **Snapped**: the item sits centered in a free cell.
//! - **Swapping**: the target cell was occupied. The occupant moved to the
//!   dragged item's previous cell.
//!
//! When the item enters a container with no previous cell there and the
//! target cell is occupied, it is relocated to the nearest empty cell instead.
//!
//! [`DragSession::finish`] always commits; there is no cancel gesture. Dropping
//! a session without finishing it discards the preview.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use corkboard_board::{Board, Settled};
use corkboard_grid::geometry::{Cell, CellFrame, max_rows, rows_needed};
use corkboard_grid::{ContainerId, ContainerKind, ItemId, Placement, bounds};

use crate::search::{Occupied, nearest_free};
use crate::throttle::{DEFAULT_INTERVAL_MS, Throttle};

/// Default distance from a cell center within which a dragged item snaps.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 40.0;

/// What happens to an item released outside every container after it was
/// dragged out of one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReleasePolicy {
    /// Put the item in a new auto-named container at the drop point.
    #[default]
    SpawnContainer,
    /// Leave the item free-floating where it was dropped.
    LeaveFloating,
}

/// Commit-time choices for [`DragSession::finish`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SettleOptions {
    /// Release outside all containers.
    pub release: ReleasePolicy,
    /// Delete the source container when the drag leaves it empty.
    pub discard_empty_source: bool,
}

/// Tunables for a [`DragSession`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragOptions {
    /// Snap when the item center is closer than this to the target cell center.
    pub snap_threshold: f64,
    /// Minimum spacing of recomputed pointer moves, in milliseconds.
    pub throttle_ms: u64,
    /// Commit-time choices.
    pub settle: SettleOptions,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            throttle_ms: DEFAULT_INTERVAL_MS,
            settle: SettleOptions::default(),
        }
    }
}

/// Where the dragged item currently is, relative to containers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// Outside every container.
    Free,
    /// Inside a container, following the pointer.
    Hovering(ContainerId),
    /// Centered in a free cell.
    Snapped {
        /// Container holding the cell.
        container: ContainerId,
        /// The cell.
        cell: Cell,
    },
    /// Centered in a cell whose occupant moved to the previous cell.
    Swapping {
        /// Container holding the cell.
        container: ContainerId,
        /// The cell.
        cell: Cell,
        /// Item that moved out of the way.
        occupant: ItemId,
    },
}

impl DragPhase {
    /// Container under the dragged item, if any.
    pub const fn container(&self) -> Option<ContainerId> {
        match *self {
            Self::Free => None,
            Self::Hovering(c)
            | Self::Snapped { container: c, .. }
            | Self::Swapping { container: c, .. } => Some(c),
        }
    }
}

/// State of one item drag.
#[derive(Clone, Debug)]
pub struct DragSession {
    item: ItemId,
    source: Option<ContainerId>,
    grab: Vec2,
    options: DragOptions,
    throttle: Throttle,
    /// Last cell the item was snapped into. Lives only for this drag.
    previous: Option<(ContainerId, Cell)>,
    /// Last target cell that was acted on.
    target: Option<(ContainerId, Cell)>,
    phase: DragPhase,
    base: Board,
    preview: Board,
}

impl DragSession {
    /// Start dragging `item`, grabbed at `pointer`, with default options.
    ///
    /// Returns `None` if the item does not exist.
    pub fn begin(board: &Board, item: ItemId, pointer: Point) -> Option<Self> {
        Self::begin_with(board, item, pointer, DragOptions::default())
    }

    /// Start dragging `item` with custom options.
    pub fn begin_with(
        board: &Board,
        item: ItemId,
        pointer: Point,
        options: DragOptions,
    ) -> Option<Self> {
        let dragged = board.item(item)?;
        let source = dragged
            .container_id
            .filter(|c| board.members_of(*c).iter().any(|m| m.id == item));

        let mut previous = None;
        let mut phase = DragPhase::Free;
        if let Some(container) = source.and_then(|c| board.container(c)) {
            phase = DragPhase::Hovering(container.id);
            if container.kind == ContainerKind::Grid {
                let frame = CellFrame::new(board.config(), container.origin, container.width);
                let cell = frame.cell_at(dragged.center());
                previous = Some((container.id, cell));
                phase = DragPhase::Snapped {
                    container: container.id,
                    cell,
                };
            }
        }

        Some(Self {
            item,
            source,
            grab: dragged.position - pointer,
            options,
            throttle: Throttle::new(options.throttle_ms),
            previous,
            target: previous,
            phase,
            base: board.clone(),
            preview: board.clone(),
        })
    }

    /// The dragged item.
    pub const fn item(&self) -> ItemId {
        self.item
    }

    /// Container the item was dragged out of, if any.
    pub const fn source(&self) -> Option<ContainerId> {
        self.source
    }

    /// Current phase.
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Snapshot to render while the drag is in progress.
    pub fn preview(&self) -> &Board {
        &self.preview
    }

    /// Handle a pointer move at `now` milliseconds.
    ///
    /// Returns `false` when the move was throttled and the preview is unchanged.
    pub fn on_move(&mut self, pointer: Point, now: u64) -> bool {
        if !self.throttle.accept(now) {
            return false;
        }
        self.track(pointer);
        true
    }

    /// Release at `pointer` and commit the landing state.
    ///
    /// The final position is always recomputed, whatever the throttle says.
    /// Source and destination containers are compacted into reading order,
    /// and overlap resolution runs with the destination held in place.
    pub fn finish(mut self, pointer: Point) -> Settled {
        self.track(pointer);
        let settle = self.options.settle;
        let position = pointer + self.grab;

        let (mut board, destination) = match self.phase.container() {
            Some(c) => {
                let at = self
                    .preview
                    .item(self.item)
                    .map_or(position, |i| i.position);
                (self.preview.assign(self.item, Some(c), at), Some(c))
            }
            None => match (self.source, settle.release) {
                (Some(_), ReleasePolicy::SpawnContainer) => {
                    let (spawned, id) = self.preview.spawn_container_for(position);
                    (spawned.assign(self.item, Some(id), position), Some(id))
                }
                _ => (self.preview.assign(self.item, None, position), None),
            },
        };

        if let Some(d) = destination {
            board = board.compact(d);
        }
        if let Some(s) = self.source
            && destination != Some(s)
        {
            board = board.compact(s);
            if settle.discard_empty_source && board.member_count(s) == 0 {
                board = board.delete_container(s);
            }
        }
        board.resolve(destination.or(self.source))
    }

    /// Topmost container whose bounds, grown by the dragged item when it is
    /// not yet a member, contain `center`.
    fn hit(&self, center: Point) -> Option<ContainerId> {
        let config = self.base.config();
        self.base
            .containers()
            .iter()
            .rev()
            .find(|c| {
                let count = self.base.member_count(c.id) + usize::from(self.source != Some(c.id));
                bounds(config, c, count).contains(center)
            })
            .map(|c| c.id)
    }

    fn follow(&mut self, phase: DragPhase, position: Point) {
        self.phase = phase;
        self.target = None;
        self.put(self.item, position);
    }

    fn put(&mut self, item: ItemId, position: Point) {
        self.preview = self.preview.place(&[Placement { id: item, position }]);
    }

    fn track(&mut self, pointer: Point) {
        let config = *self.base.config();
        let raw = pointer + self.grab;
        let Some(size) = self.base.item(self.item).map(|i| i.size) else {
            return;
        };
        let center = raw + size.to_vec2() / 2.0;

        let Some(id) = self.hit(center) else {
            self.follow(DragPhase::Free, raw);
            return;
        };
        let Some(container) = self.base.container(id) else {
            return;
        };
        if container.kind == ContainerKind::Freeform {
            self.follow(DragPhase::Hovering(id), raw);
            return;
        }

        let frame = CellFrame::new(&config, container.origin, container.width);
        let columns = frame.columns();
        let entering = self.source != Some(id);
        let rows = match container.height {
            Some(h) => max_rows(&config, h),
            None => rows_needed(self.base.member_count(id) + usize::from(entering), columns),
        };
        let cell = frame.cell_at(center).clamp(columns, rows);
        if center.distance(frame.center(cell)) >= self.options.snap_threshold {
            self.follow(DragPhase::Hovering(id), raw);
            return;
        }
        if self.target == Some((id, cell)) {
            return;
        }
        self.target = Some((id, cell));

        let others: Vec<_> = self
            .preview
            .members_of(id)
            .into_iter()
            .filter(|m| m.id != self.item)
            .map(|m| (m.id, m.size, frame.cell_at(m.center())))
            .collect();
        let occupant = others.iter().find(|(_, _, c)| *c == cell);

        let landing = match (occupant, self.previous) {
            (None, _) => Some((
                DragPhase::Snapped {
                    container: id,
                    cell,
                },
                cell,
            )),
            (Some(&(occ, occ_size, _)), Some((pc, prev))) if pc == id && prev != cell => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    item = self.item.0,
                    occupant = occ.0,
                    container = id.0,
                    "swapping into occupied cell"
                );
                self.put(occ, frame.place(prev, occ_size));
                Some((
                    DragPhase::Swapping {
                        container: id,
                        cell,
                        occupant: occ,
                    },
                    cell,
                ))
            }
            (Some(_), _) => {
                let occupied: Occupied = others.iter().map(|(_, _, c)| *c).collect();
                nearest_free(cell, columns, rows, &occupied).map(|free| {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        item = self.item.0,
                        container = id.0,
                        col = free.col,
                        row = free.row,
                        "target occupied; relocating to nearest empty cell"
                    );
                    (
                        DragPhase::Snapped {
                            container: id,
                            cell: free,
                        },
                        free,
                    )
                })
            }
        };

        match landing {
            Some((phase, snapped)) => {
                self.phase = phase;
                self.previous = Some((id, snapped));
                self.put(self.item, frame.place(snapped, size));
            }
            None => {
                self.phase = DragPhase::Hovering(id);
                self.put(self.item, raw);
            }
        }
    }
}
