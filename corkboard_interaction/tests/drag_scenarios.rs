// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end drag scenarios through the commit path.

use corkboard_board::Board;
use corkboard_grid::{Cell, ContainerId, GridConfig, Item, ItemId, Member, reflow};
use corkboard_interaction::{DragPhase, DragSession};
use kurbo::{Point, Size, Vec2};

const PHOTO: Size = Size::new(140.0, 140.0);

/// Center of cell `(col, row)` in a container at (100, 100): the first center
/// is (100 + 15 + 70, 100 + 30 + 15 + 70) and cells are 152 apart.
fn cell_center(col: u32, row: u32) -> Point {
    Point::new(185.0 + 152.0 * f64::from(col), 215.0 + 152.0 * f64::from(row))
}

/// Drag `item` by its center and release with its center at `target`.
fn drag_to(board: &Board, item: ItemId, target: Point, now: u64) -> Board {
    let grab = board.item(item).unwrap().center();
    let mut drag = DragSession::begin(board, item, grab).unwrap();
    drag.on_move(target, now);
    let settled = drag.finish(target);
    assert!(settled.converged);
    settled.board
}

fn members(board: &Board, id: ContainerId) -> Vec<ItemId> {
    let mut ids: Vec<_> = board.members_of(id).iter().map(|m| m.id).collect();
    ids.sort();
    ids
}

// ═════════════════════════════════════════════════════════════════════════
// Filling an empty container one drop at a time
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn four_drops_fill_cells_in_reading_order() {
    let mut board = Board::new(GridConfig::default());
    for i in 1_u32..=4 {
        let at = Point::new(1000.0 + 200.0 * f64::from(i), 1000.0);
        board = board.with_item(Item::new(ItemId(u64::from(i)), at, PHOTO));
    }
    let (mut board, trip) = board.create_container("Trip", Point::new(100.0, 100.0), 500.0);

    let targets = [(0, 0), (1, 0), (2, 0), (0, 1)];
    for (n, (col, row)) in targets.into_iter().enumerate() {
        let item = ItemId(n as u64 + 1);
        board = drag_to(&board, item, cell_center(col, row), 1000 * n as u64);
        assert_eq!(board.item(item).unwrap().container_id, Some(trip));
    }

    let expected: Vec<Member> = (1..=4)
        .map(|i| Member {
            id: ItemId(i),
            size: PHOTO,
            position: Point::ZERO,
        })
        .collect();
    let placements = reflow(
        board.config(),
        &expected,
        Point::new(100.0, 100.0),
        500.0,
        None,
    );
    for p in &placements {
        assert_eq!(board.item(p.id).unwrap().position, p.position, "{:?}", p.id);
    }
    assert_eq!(board.item(ItemId(4)).unwrap().position, Point::new(115.0, 297.0));
    assert_eq!(board.container(trip).unwrap().member_ids, [
        ItemId(1),
        ItemId(2),
        ItemId(3),
        ItemId(4)
    ]);
}

// ═════════════════════════════════════════════════════════════════════════
// Swap symmetry
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn dragging_onto_an_occupied_cell_transposes_the_pair() {
    let photos: Vec<_> = (1..=2).map(|i| (ItemId(i), PHOTO)).collect();
    let (settled, trip) = Board::new(GridConfig::default()).import_group(
        "Trip",
        Point::new(100.0, 100.0),
        &photos,
    );
    let board = settled.board;
    let a = board.item(ItemId(1)).unwrap().position;
    let b = board.item(ItemId(2)).unwrap().position;

    let after = drag_to(&board, ItemId(1), cell_center(1, 0), 0);

    assert_eq!(after.item(ItemId(1)).unwrap().position, b);
    assert_eq!(after.item(ItemId(2)).unwrap().position, a);
    assert_eq!(members(&after, trip), members(&board, trip));
}

#[test]
fn swaps_chain_while_hovering() {
    let photos: Vec<_> = (1..=3).map(|i| (ItemId(i), PHOTO)).collect();
    let (settled, trip) = Board::new(GridConfig::default()).import_group(
        "Trip",
        Point::new(100.0, 100.0),
        &photos,
    );
    let board = settled.board;

    let mut drag = DragSession::begin(&board, ItemId(1), cell_center(0, 0)).unwrap();
    assert!(drag.on_move(cell_center(1, 0), 0));
    assert!(drag.on_move(cell_center(2, 0), 100));
    assert!(matches!(
        drag.phase(),
        DragPhase::Swapping { occupant: ItemId(3), .. }
    ));
    // Item 2 went to (0, 0), then item 3 took the cell item 1 just left.
    let board = drag.finish(cell_center(2, 0)).board;
    assert_eq!(board.container(trip).unwrap().member_ids, [
        ItemId(2),
        ItemId(3),
        ItemId(1)
    ]);
    assert_eq!(board.item(ItemId(1)).unwrap().position, Point::new(419.0, 145.0));
}

// ═════════════════════════════════════════════════════════════════════════
// Moving between containers
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn moving_between_containers_compacts_the_source_and_resolves() {
    let photos: Vec<_> = (1..=3).map(|i| (ItemId(i), PHOTO)).collect();
    let (settled, trip) = Board::new(GridConfig::default()).import_group(
        "Trip",
        Point::new(100.0, 100.0),
        &photos,
    );
    // "Pets" starts one gap below "Trip": 100 + 212 + 40.
    let (board, pets) = settled
        .board
        .create_container("Pets", Point::new(100.0, 352.0), 500.0);

    // Drop item 1 into the first cell of "Pets".
    let target = cell_center(0, 0) + Vec2::new(0.0, 252.0);
    let board = drag_to(&board, ItemId(1), target, 0);

    assert_eq!(members(&board, trip), [ItemId(2), ItemId(3)]);
    assert_eq!(members(&board, pets), [ItemId(1)]);
    // The source closed its gap.
    assert_eq!(board.item(ItemId(2)).unwrap().position, Point::new(115.0, 145.0));
    // Neither container grew a row, so nothing was pushed.
    assert_eq!(board.container(pets).unwrap().origin, Point::new(100.0, 352.0));
    assert_eq!(board.item(ItemId(1)).unwrap().position, Point::new(115.0, 397.0));
}

// ═════════════════════════════════════════════════════════════════════════
// Single-column stack containers
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn drops_into_a_stack_container_snap_to_its_centered_column() {
    let board = Board::new(GridConfig::default())
        .with_item(Item::new(ItemId(1), Point::new(1200.0, 1000.0), PHOTO))
        .with_item(Item::new(ItemId(2), Point::new(1400.0, 1000.0), PHOTO));
    let (board, narrow) = board.create_container("Narrow", Point::new(100.0, 100.0), 180.0);
    // One column centered at x = 100 + 180 / 2.
    let first = Point::new(190.0, 215.0);

    let mut drag = DragSession::begin(&board, ItemId(1), Point::new(1270.0, 1070.0)).unwrap();
    drag.on_move(first, 0);
    assert_eq!(drag.phase(), DragPhase::Snapped {
        container: narrow,
        cell: Cell::new(0, 0)
    });
    assert_eq!(
        drag.preview().item(ItemId(1)).unwrap().position,
        Point::new(120.0, 145.0)
    );
    let settled = drag.finish(first);
    assert!(settled.converged);

    let board = drag_to(&settled.board, ItemId(2), first + Vec2::new(0.0, 152.0), 1000);
    assert_eq!(members(&board, narrow), [ItemId(1), ItemId(2)]);
    assert_eq!(board.item(ItemId(1)).unwrap().position, Point::new(120.0, 145.0));
    assert_eq!(board.item(ItemId(2)).unwrap().position, Point::new(120.0, 297.0));
}
