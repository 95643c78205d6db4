// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container label drag.

use kurbo::{Point, Vec2};

use corkboard_board::{Board, Settled};
use corkboard_grid::ContainerId;

use crate::throttle::{DEFAULT_INTERVAL_MS, Throttle};

/// State of one container drag by its label band.
///
/// Members travel with the container. Other containers are not pushed aside
/// until [`ContainerDrag::finish`].
#[derive(Clone, Debug)]
pub struct ContainerDrag {
    container: ContainerId,
    grab: Vec2,
    throttle: Throttle,
    base: Board,
    preview: Board,
}

impl ContainerDrag {
    /// Start dragging `container`, grabbed at `pointer`.
    ///
    /// Returns `None` if the container does not exist.
    pub fn begin(board: &Board, container: ContainerId, pointer: Point) -> Option<Self> {
        Self::begin_with(board, container, pointer, DEFAULT_INTERVAL_MS)
    }

    /// Start dragging with a custom throttle interval in milliseconds.
    pub fn begin_with(
        board: &Board,
        container: ContainerId,
        pointer: Point,
        throttle_ms: u64,
    ) -> Option<Self> {
        let origin = board.container(container)?.origin;
        Some(Self {
            container,
            grab: origin - pointer,
            throttle: Throttle::new(throttle_ms),
            base: board.clone(),
            preview: board.clone(),
        })
    }

    /// The container being dragged.
    pub const fn container(&self) -> ContainerId {
        self.container
    }

    /// Snapshot to render while the drag is in progress.
    pub fn preview(&self) -> &Board {
        &self.preview
    }

    /// Handle a pointer move at `now` milliseconds. Returns `false` when throttled.
    pub fn on_move(&mut self, pointer: Point, now: u64) -> bool {
        if !self.throttle.accept(now) {
            return false;
        }
        self.preview = self.base.move_container(self.container, pointer + self.grab);
        true
    }

    /// Release at `pointer`: place the container and push others out of its way.
    pub fn finish(self, pointer: Point) -> Settled {
        self.base
            .move_container(self.container, pointer + self.grab)
            .settle_container(self.container)
    }
}
