// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Resolve: push overlapping containers apart.
//!
//! Given the containers on a canvas, [`Resolver::resolve`] repeatedly scans every
//! unordered pair in list order and, when two containers are closer than
//! [`GridConfig::container_gap`], moves one of them just far enough to restore
//! the gap.
//!
//! - **Who moves.** The container that is *not* the `changed` one. A container
//!   the user is actively manipulating stays put and its neighbours yield. With
//!   no `changed` id (bulk layout on load), the second container of the pair in
//!   list order moves. The list order is never shuffled, so results are
//!   deterministic.
//! - **Which way.** The axis with the larger center-to-center separation wins;
//!   the mover is pushed away from the other container along that axis by the
//!   smallest distance that clears the gap.
//! - **What changes.** Only origins. Widths and heights are never touched.
//!
//! ## Bounded work
//!
//! Resolution runs at most `max_iterations` passes (20 by default) and stops early
//! after a pass that finds no overlap. Crowded configurations can hit the cap
//! with some overlap left; that is reported through [`Resolution::converged`]
//! and is not an error. Callers proceed with the best-effort layout.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use corkboard_grid::{Container, ContainerId, GridConfig};
//! use corkboard_resolve::Resolver;
//!
//! let config = GridConfig::default();
//! let containers = [
//!     Container::new(ContainerId(1), "Trip", Point::new(0.0, 0.0), 500.0),
//!     Container::new(ContainerId(2), "Pets", Point::new(300.0, 50.0), 500.0),
//! ];
//! let resolution = Resolver::new(config).resolve(&containers, |_| 0, None);
//! assert!(resolution.converged);
//! // "Pets" was pushed right until it sits one gap past "Trip".
//! assert_eq!(resolution.containers[1].origin, Point::new(540.0, 50.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Rect, Vec2};

use corkboard_grid::{Container, ContainerId, GridConfig, bounds};

/// Default cap on resolution passes.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// Penetration below this is treated as touching, not overlapping.
const EPSILON: f64 = 1e-6;

/// Overlap resolver with a fixed configuration and pass cap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolver {
    config: GridConfig,
    max_iterations: usize,
}

/// Result of [`Resolver::resolve`].
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    /// The containers, in input order, with updated origins.
    pub containers: Vec<Container>,
    /// Total displacement applied to each container, parallel to `containers`.
    pub offsets: Vec<Vec2>,
    /// Number of passes that ran.
    pub passes: usize,
    /// `false` when the pass cap was reached with overlap remaining.
    pub converged: bool,
}

impl Resolution {
    /// Containers that moved, with their total displacement.
    pub fn moved(&self) -> impl Iterator<Item = (ContainerId, Vec2)> + '_ {
        self.containers
            .iter()
            .zip(&self.offsets)
            .filter(|(_, d)| **d != Vec2::ZERO)
            .map(|(c, d)| (c.id, *d))
    }

    /// Displacement applied to `id`, or zero if it did not move or is unknown.
    pub fn offset_of(&self, id: ContainerId) -> Vec2 {
        self.containers
            .iter()
            .position(|c| c.id == id)
            .map_or(Vec2::ZERO, |i| self.offsets[i])
    }
}

impl Resolver {
    /// Create a resolver with the default pass cap.
    pub fn new(config: GridConfig) -> Self {
        Self::with_max_iterations(config, DEFAULT_MAX_ITERATIONS)
    }

    /// Create a resolver with a custom pass cap.
    pub fn with_max_iterations(config: GridConfig, max_iterations: usize) -> Self {
        Self {
            config,
            max_iterations,
        }
    }

    /// Configured pass cap.
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Move containers apart until no two are closer than the container gap.
    ///
    /// `member_count` reports how many members each container holds; it sizes
    /// the bounding boxes. `changed` names the container the user just moved,
    /// resized, or dropped into; it is never the one that yields.
    pub fn resolve<F>(
        &self,
        containers: &[Container],
        member_count: F,
        changed: Option<ContainerId>,
    ) -> Resolution
    where
        F: Fn(&Container) -> usize,
    {
        let gap = self.config.container_gap;
        let mut rects: Vec<Rect> = containers
            .iter()
            .map(|c| bounds(&self.config, c, member_count(c)))
            .collect();
        let mut offsets = alloc::vec![Vec2::ZERO; containers.len()];

        let mut passes = 0;
        let mut converged = false;
        while passes < self.max_iterations {
            passes += 1;
            let mut pushed = false;
            for i in 0..rects.len() {
                for j in (i + 1)..rects.len() {
                    if !too_close(rects[i], rects[j], gap) {
                        continue;
                    }
                    let (mover, other) = match changed {
                        Some(id) if containers[j].id == id => (i, j),
                        _ => (j, i),
                    };
                    let delta = push_apart(rects[mover], rects[other], gap);
                    rects[mover] = rects[mover] + delta;
                    offsets[mover] += delta;
                    pushed = true;
                }
            }
            if !pushed {
                converged = true;
                break;
            }
        }
        if !converged {
            converged = !any_too_close(&rects, gap);
        }

        #[cfg(feature = "tracing")]
        if !converged {
            tracing::warn!(
                passes,
                containers = containers.len(),
                "overlap resolution hit its pass cap with overlap remaining"
            );
        }

        let containers = containers
            .iter()
            .zip(&offsets)
            .map(|(c, d)| Container {
                origin: c.origin + *d,
                ..c.clone()
            })
            .collect();
        Resolution {
            containers,
            offsets,
            passes,
            converged,
        }
    }
}

/// Whether two container rectangles are closer than `gap` on both axes.
///
/// Rectangles exactly `gap` apart are not too close.
pub fn too_close(a: Rect, b: Rect, gap: f64) -> bool {
    let px = (a.x1 + gap - b.x0).min(b.x1 + gap - a.x0);
    let py = (a.y1 + gap - b.y0).min(b.y1 + gap - a.y0);
    px > EPSILON && py > EPSILON
}

/// Whether any pair in `rects` is [`too_close`].
pub fn any_too_close(rects: &[Rect], gap: f64) -> bool {
    rects
        .iter()
        .enumerate()
        .any(|(i, a)| rects[i + 1..].iter().any(|b| too_close(*a, *b, gap)))
}

/// Smallest displacement of `mover` away from `other` that clears `gap`.
fn push_apart(mover: Rect, other: Rect, gap: f64) -> Vec2 {
    let right = other.x1 + gap - mover.x0;
    let left = mover.x1 + gap - other.x0;
    let down = other.y1 + gap - mover.y0;
    let up = mover.y1 + gap - other.y0;

    let d = mover.center() - other.center();
    if d.x.abs() >= d.y.abs() {
        if d.x >= 0.0 {
            Vec2::new(right, 0.0)
        } else {
            Vec2::new(-left, 0.0)
        }
    } else if d.y >= 0.0 {
        Vec2::new(0.0, down)
    } else {
        Vec2::new(0.0, -up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Point;

    fn folder(id: u64, x: f64, y: f64) -> Container {
        Container::new(ContainerId(id), "Folder", Point::new(x, y), 500.0)
    }

    #[test]
    fn second_of_pair_moves_by_default() {
        let containers = [folder(1, 0.0, 0.0), folder(2, 300.0, 50.0)];
        let r = Resolver::new(GridConfig::default()).resolve(&containers, |_| 0, None);
        // Centers differ by (300, 50): horizontal wins, push right by 500 + 40 - 300.
        assert_eq!(r.containers[0].origin, Point::new(0.0, 0.0));
        assert_eq!(r.containers[1].origin, Point::new(540.0, 50.0));
        assert!(r.converged);
        assert_eq!(r.passes, 2);
        assert_eq!(r.moved().collect::<Vec<_>>(), vec![(
            ContainerId(2),
            Vec2::new(240.0, 0.0)
        )]);
    }

    #[test]
    fn changed_container_stays_put() {
        let containers = [folder(1, 0.0, 0.0), folder(2, 300.0, 50.0)];
        let r = Resolver::new(GridConfig::default()).resolve(
            &containers,
            |_| 0,
            Some(ContainerId(2)),
        );
        assert_eq!(r.containers[1].origin, Point::new(300.0, 50.0));
        assert_eq!(r.containers[0].origin, Point::new(-240.0, 0.0));
        assert_eq!(r.offset_of(ContainerId(1)), Vec2::new(-240.0, 0.0));
    }

    #[test]
    fn vertical_separation_pushes_down() {
        // Empty containers are 212 tall; centers differ by (20, 100).
        let containers = [folder(1, 0.0, 0.0), folder(2, 20.0, 100.0)];
        let r = Resolver::new(GridConfig::default()).resolve(&containers, |_| 0, None);
        assert_eq!(r.containers[1].origin, Point::new(20.0, 252.0));
        assert!(r.converged);
    }

    #[test]
    fn member_count_grows_the_box() {
        // With 7 members the first container is 516 tall, so a container at
        // y = 400 still collides and is pushed below 516 + 40.
        let containers = [folder(1, 0.0, 0.0), folder(2, 0.0, 400.0)];
        let r = Resolver::new(GridConfig::default()).resolve(
            &containers,
            |c| if c.id == ContainerId(1) { 7 } else { 0 },
            None,
        );
        assert_eq!(r.containers[1].origin, Point::new(0.0, 556.0));
    }

    #[test]
    fn exactly_one_gap_apart_is_not_overlap() {
        let containers = [folder(1, 0.0, 0.0), folder(2, 540.0, 0.0)];
        let r = Resolver::new(GridConfig::default()).resolve(&containers, |_| 0, None);
        assert_eq!(r.passes, 1);
        assert!(r.converged);
        assert_eq!(r.moved().count(), 0);
    }

    #[test]
    fn sizes_are_never_changed() {
        let containers = [
            folder(1, 0.0, 0.0).with_height(400.0),
            folder(2, 10.0, 10.0),
            folder(3, 20.0, 20.0),
        ];
        let r = Resolver::new(GridConfig::default()).resolve(&containers, |_| 2, None);
        for (before, after) in containers.iter().zip(&r.containers) {
            assert_eq!(before.width, after.width);
            assert_eq!(before.height, after.height);
        }
    }

    #[test]
    fn crowded_row_reports_non_convergence() {
        // All three share one row. Pushing the last one left re-creates the
        // first collision, so the resolver oscillates until the cap.
        let containers = [
            folder(1, 0.0, 0.0),
            folder(2, 600.0, 0.0),
            folder(3, 300.0, 0.0),
        ];
        let resolver = Resolver::with_max_iterations(GridConfig::default(), 5);
        let r = resolver.resolve(&containers, |_| 0, None);
        assert_eq!(r.passes, 5);
        assert!(!r.converged);
        let rects: Vec<Rect> = r
            .containers
            .iter()
            .map(|c| bounds(&GridConfig::default(), c, 0))
            .collect();
        assert!(any_too_close(&rects, 40.0));
    }

    #[test]
    fn zero_passes_returns_input() {
        let containers = [folder(1, 0.0, 0.0), folder(2, 0.0, 0.0)];
        let resolver = Resolver::with_max_iterations(GridConfig::default(), 0);
        let r = resolver.resolve(&containers, |_| 0, None);
        assert_eq!(r.containers, containers.to_vec());
        assert!(!r.converged);
    }
}
