// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reflow: assign every member of a container a centered position in its cell.
//!
//! Members are placed by ordinal: member `i` goes to column `i mod columns`,
//! row `i / columns`. Callers decide the order (for example with
//! [`reading_order`]); reflow never reorders its input and has no hidden state,
//! so feeding its output back in yields the same positions.
//!
//! When an explicit height caps the number of rows and there are more members
//! than cells, placement wraps: the next `columns × max_rows` members start a new
//! block of columns to the right of the previous block. Those members sit
//! outside the container frame, which is the degraded but defined answer to
//! "more items than fit".

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::geometry::{self, Cell, CellFrame};
use crate::{Container, ContainerKind, GridConfig, Item, ItemId};

/// A member as seen by the layout engine: identity, size, and current position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Member {
    /// Item identifier.
    pub id: ItemId,
    /// Display size.
    pub size: Size,
    /// Current top-left position.
    pub position: Point,
}

impl Member {
    /// Current center.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }
}

impl From<&Item> for Member {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            size: item.size,
            position: item.position,
        }
    }
}

/// Output of a reflow: where one member should be drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Item identifier.
    pub id: ItemId,
    /// New top-left position.
    pub position: Point,
}

/// Cell assigned to ordinal `index`.
///
/// `max_rows` is `Some` when an explicit height bounds the grid; indices past
/// the capacity wrap into further blocks of `columns` columns.
pub fn slot_for_index(index: usize, columns: usize, max_rows: Option<usize>) -> Cell {
    let columns = columns.max(1);
    match max_rows {
        Some(rows) => {
            let capacity = columns * rows.max(1);
            let block = index / capacity;
            let within = index % capacity;
            Cell::new(within % columns + block * columns, within / columns)
        }
        None => Cell::new(index % columns, index / columns),
    }
}

/// Reflow `members` into the grid of a container at `origin` with `width` and
/// optional explicit total `height`.
pub fn reflow(
    config: &GridConfig,
    members: &[Member],
    origin: Point,
    width: f64,
    height: Option<f64>,
) -> Vec<Placement> {
    let frame = CellFrame::new(config, origin, width);
    let max_rows = height.map(|h| geometry::max_rows(config, h));
    members
        .iter()
        .enumerate()
        .map(|(i, m)| Placement {
            id: m.id,
            position: frame.place(slot_for_index(i, frame.columns(), max_rows), m.size),
        })
        .collect()
}

/// Reflow the members of `container` according to its [`ContainerKind`].
///
/// Freeform containers do not manage positions, so their members are returned
/// where they already are.
pub fn reflow_container(
    config: &GridConfig,
    container: &Container,
    members: &[Member],
) -> Vec<Placement> {
    match container.kind {
        ContainerKind::Grid => reflow(
            config,
            members,
            container.origin,
            container.width,
            container.height,
        ),
        ContainerKind::Freeform => members
            .iter()
            .map(|m| Placement {
                id: m.id,
                position: m.position,
            })
            .collect(),
    }
}

/// Sort members into row-major reading order of the cells they currently sit in.
///
/// Members that overflowed into a wrapped block of columns (see
/// [`slot_for_index`]) sort after every member of the blocks before it. The
/// sort is stable, so members that share a cell keep their input order.
pub fn reading_order(config: &GridConfig, container: &Container, members: &[Member]) -> Vec<Member> {
    let frame = CellFrame::new(config, container.origin, container.width);
    let columns = frame.columns();
    let mut keyed: Vec<((usize, usize, usize), Member)> = members
        .iter()
        .map(|m| {
            let cell = frame.cell_at(m.center());
            ((cell.col / columns, cell.row, cell.col), *m)
        })
        .collect();
    keyed.sort_by_key(|(key, _)| *key);
    keyed.into_iter().map(|(_, m)| m).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContainerId;
    use alloc::vec;

    fn member(id: u64) -> Member {
        Member {
            id: ItemId(id),
            size: Size::new(140.0, 140.0),
            position: Point::ZERO,
        }
    }

    #[test]
    fn four_members_fill_row_major() {
        let config = GridConfig::default();
        let members: Vec<_> = (1..=4).map(member).collect();
        let out = reflow(&config, &members, Point::new(100.0, 100.0), 500.0, None);
        // Content origin is (115, 145); cells are 152 apart.
        let expected = [
            Point::new(115.0, 145.0),
            Point::new(267.0, 145.0),
            Point::new(419.0, 145.0),
            Point::new(115.0, 297.0),
        ];
        for (p, e) in out.iter().zip(expected) {
            assert_eq!(p.position, e);
        }
    }

    #[test]
    fn small_items_are_centered() {
        let config = GridConfig::default();
        let m = Member {
            size: Size::new(80.0, 120.0),
            ..member(9)
        };
        let out = reflow(&config, &[m], Point::ZERO, 500.0, None);
        assert_eq!(out[0].position, Point::new(15.0 + 30.0, 45.0 + 10.0));
    }

    #[test]
    fn stack_mode_centers_horizontally() {
        let config = GridConfig::default();
        let m = Member {
            size: Size::new(100.0, 140.0),
            ..member(1)
        };
        let out = reflow(&config, &[member(0), m], Point::ZERO, 200.0, None);
        // Second member: row 1, centered in a 200-wide container.
        assert_eq!(out[1].position, Point::new(50.0, 45.0 + 152.0));
    }

    #[test]
    fn overflow_wraps_into_the_next_block_of_columns() {
        assert_eq!(slot_for_index(5, 3, Some(2)), Cell::new(2, 1));
        assert_eq!(slot_for_index(6, 3, Some(2)), Cell::new(3, 0));
        assert_eq!(slot_for_index(10, 3, Some(2)), Cell::new(4, 1));
        // Stack: one column, wraps every `max_rows` members.
        assert_eq!(slot_for_index(4, 1, Some(3)), Cell::new(1, 1));
    }

    #[test]
    fn reflow_is_idempotent() {
        let config = GridConfig::default();
        let members: Vec<_> = (0..7).map(member).collect();
        let origin = Point::new(-40.0, 12.5);
        let first = reflow(&config, &members, origin, 640.0, Some(400.0));
        let fed: Vec<_> = members
            .iter()
            .zip(&first)
            .map(|(m, p)| Member {
                position: p.position,
                ..*m
            })
            .collect();
        assert_eq!(reflow(&config, &fed, origin, 640.0, Some(400.0)), first);
    }

    #[test]
    fn reading_order_keeps_wrapped_blocks_last() {
        let config = GridConfig::default();
        let c = Container::new(ContainerId(1), "Folder", Point::ZERO, 500.0).with_height(352.0);
        let frame = CellFrame::new(&config, c.origin, c.width);
        let at = |id, cell| Member {
            position: frame.place(cell, Size::new(140.0, 140.0)),
            ..member(id)
        };
        // (3, 0) is the first slot of the second block and follows (0, 1).
        let members = [at(7, Cell::new(3, 0)), at(4, Cell::new(0, 1))];
        let ids: Vec<_> = reading_order(&config, &c, &members)
            .iter()
            .map(|m| m.id.0)
            .collect();
        assert_eq!(ids, vec![4, 7]);
    }

    #[test]
    fn freeform_keeps_positions() {
        let config = GridConfig::default();
        let c = Container::new(ContainerId(1), "Loose", Point::ZERO, 500.0)
            .with_kind(ContainerKind::Freeform);
        let m = Member {
            position: Point::new(333.0, 444.0),
            ..member(1)
        };
        let out = reflow_container(&config, &c, &[m]);
        assert_eq!(out, vec![Placement {
            id: ItemId(1),
            position: Point::new(333.0, 444.0),
        }]);
    }

    #[test]
    fn reading_order_follows_cells_not_input() {
        let config = GridConfig::default();
        let c = Container::new(ContainerId(1), "Folder", Point::ZERO, 500.0);
        let frame = CellFrame::new(&config, c.origin, c.width);
        let at = |id, cell| Member {
            position: frame.place(cell, Size::new(140.0, 140.0)),
            ..member(id)
        };
        let members = [at(1, Cell::new(0, 1)), at(2, Cell::new(2, 0)), at(3, Cell::new(0, 0))];
        let ids: Vec<_> = reading_order(&config, &c, &members)
            .iter()
            .map(|m| m.id.0)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
