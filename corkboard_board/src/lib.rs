// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Board: immutable snapshots of a canvas of containers and items.
//!
//! A [`Board`] owns the two lists that make up the canvas state: containers
//! (in stacking order) and items. Every operation borrows a snapshot and returns
//! a new one, so a half-finished gesture can always be abandoned by dropping
//! the preview and keeping the last committed board.
//!
//! Operations that commit a gesture end with overlap resolution and return a
//! [`Settled`] board that records whether the resolver converged.
//!
//! Around the snapshot:
//!
//! - [`Board::diff`] turns two committed snapshots into integer-rounded
//!   [`PersistRecord`]s for storage.
//! - [`Board::frames`] produces the rectangles and label anchors a renderer draws.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use corkboard_board::Board;
//! use corkboard_grid::{GridConfig, ItemId};
//!
//! let photos: Vec<_> = (1..=4).map(|i| (ItemId(i), Size::new(140.0, 140.0))).collect();
//! let (settled, trip) = Board::new(GridConfig::default())
//!     .import_group("Trip", Point::new(100.0, 100.0), &photos);
//! assert!(settled.converged);
//!
//! let board = settled.board;
//! assert_eq!(board.member_count(trip), 4);
//! // Three columns fit in the default width, so the fourth photo wraps.
//! assert_eq!(board.item(ItemId(4)).unwrap().position, Point::new(115.0, 297.0));
//! ```
//!
//! Membership is read defensively: an item counts as a member only if it
//! exists and names the container. Dangling references are skipped, never
//! reported as errors.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod board;
mod persist;
mod render;

pub use board::{Board, Settled, clamp_width};
pub use persist::{ChangeFlags, PersistRecord, RecordKey};
pub use render::{ContainerFrame, Frames, ItemFrame};
