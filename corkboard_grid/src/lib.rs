// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Grid: the geometry layer of a photo-organizing canvas.
//!
//! Photos ("items") live inside named, movable, resizable folders
//! ("containers") on an infinite 2D surface. This crate answers the purely
//! geometric questions every other layer builds on:
//!
//! - How many columns does a container of a given width offer, and is it a
//!   grid or a single-column stack? See [`columns`] and [`layout_mode`].
//! - Where on screen does a container sit, label band included? See [`bounds`].
//! - Where should each member be drawn? See [`reflow`] and [`reflow_container`].
//! - Which cell does a point fall in, and where is that cell? See [`CellFrame`].
//!
//! All functions are pure. They take a [`GridConfig`] explicitly, never mutate
//! their inputs, and never fail: out-of-range requests are clamped. The only
//! fallible call is [`GridConfig::validate`], meant to run once at startup.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use corkboard_grid::{GridConfig, ItemId, Member, columns, reflow};
//!
//! let config = GridConfig::default();
//! assert_eq!(columns(&config, 500.0), 3);
//!
//! let members: Vec<Member> = (0..4)
//!     .map(|i| Member {
//!         id: ItemId(i),
//!         size: Size::new(140.0, 140.0),
//!         position: Point::ZERO,
//!     })
//!     .collect();
//! let placed = reflow(&config, &members, Point::new(100.0, 100.0), 500.0, None);
//! // The fourth member wraps to the second row.
//! assert_eq!(placed[3].position, Point::new(115.0, 297.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `thiserror`.
//! - `libm`: `no_std` floating-point math through `kurbo`'s `libm` support.
//! - `serde`: derives `Serialize`/`Deserialize` for the configuration and the
//!   data model.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod config;
pub mod geometry;
mod reflow;
mod types;

pub use bounds::{aligned_size, bounds, label_anchor, minimum_size, total_height};
pub use config::{ConfigError, GridConfig};
pub use geometry::{Cell, CellFrame, LayoutMode, columns, layout_mode, max_rows, rows_needed};
pub use reflow::{Member, Placement, reading_order, reflow, reflow_container, slot_for_index};
pub use types::{Container, ContainerId, ContainerKind, Item, ItemId};
