// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Interaction: pointer-driven gestures on a [`Board`].
//!
//! Each gesture is a session object created on pointer-down, fed pointer moves,
//! and consumed on pointer-up:
//!
//! - [`DragSession`]: drag an item between containers, snapping to cells and
//!   swapping with occupants.
//! - [`ResizeSession`]: drag a container's resize handle; members that no
//!   longer fit are repacked.
//! - [`ContainerDrag`]: drag a container by its label band.
//!
//! Pointer moves are throttled (about 30 per second by default) and each one
//! produces a preview snapshot for rendering. `finish` is never throttled: it
//! recomputes the landing state from the final pointer position, commits it,
//! and runs overlap resolution, returning a [`Settled`] board for persistence.
//!
//! Timestamps are plain `u64` milliseconds supplied by the caller.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use corkboard_board::Board;
//! use corkboard_grid::{GridConfig, Item, ItemId};
//! use corkboard_interaction::DragSession;
//!
//! let photo = Item::new(ItemId(1), Point::new(900.0, 900.0), Size::new(140.0, 140.0));
//! let (board, trip) = Board::new(GridConfig::default())
//!     .with_item(photo)
//!     .create_container("Trip", Point::new(100.0, 100.0), 500.0);
//!
//! // Grab the photo by its center and drop it on the first cell's center.
//! let mut drag = DragSession::begin(&board, ItemId(1), Point::new(970.0, 970.0)).unwrap();
//! drag.on_move(Point::new(185.0, 215.0), 0);
//! let settled = drag.finish(Point::new(185.0, 215.0));
//!
//! let photo = settled.board.item(ItemId(1)).unwrap();
//! assert_eq!(photo.container_id, Some(trip));
//! assert_eq!(photo.position, Point::new(115.0, 145.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod container_drag;
mod drag;
mod resize;
pub mod search;
mod throttle;

pub use container_drag::ContainerDrag;
pub use drag::{
    DEFAULT_SNAP_THRESHOLD, DragOptions, DragPhase, DragSession, ReleasePolicy, SettleOptions,
};
pub use resize::{ResizeSession, clamp_proposal, repack};
pub use throttle::{DEFAULT_INTERVAL_MS, Throttle};

#[doc(no_inline)]
pub use corkboard_board::{Board, Settled};
