// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag photos into a folder, swap two of them, then drag one out.
//!
//! Prints the board after each committed gesture, plus the records a
//! persistence layer would write.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p corkboard_demos --example drag_into_folder`

use corkboard_board::Board;
use corkboard_grid::{GridConfig, Item, ItemId};
use corkboard_interaction::DragSession;
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

fn print_board(title: &str, board: &Board) {
    println!("== {title}");
    for frame in board.frames().containers {
        let name = board
            .container(frame.id)
            .map_or("?", |c| c.name.as_str());
        println!(
            "  container {:>2} {:<10} {:>7.1},{:>7.1}  {:>5.1} x {:>5.1}",
            frame.id.0,
            name,
            frame.rect.x0,
            frame.rect.y0,
            frame.rect.width(),
            frame.rect.height()
        );
    }
    for item in board.items() {
        let owner = item
            .container_id
            .map_or_else(|| "free".to_string(), |c| c.0.to_string());
        println!(
            "  item      {:>2} in {:<5} {:>7.1},{:>7.1}",
            item.id.0, owner, item.position.x, item.position.y
        );
    }
}

/// Grab an item by its center, move once, and release at `target`.
fn drag(board: &Board, item: ItemId, target: Point, now: u64) -> Board {
    let grab = board.item(item).map(|i| i.center()).unwrap_or(target);
    let Some(mut session) = DragSession::begin(board, item, grab) else {
        return board.clone();
    };
    session.on_move(target, now);
    println!("-- {:?} hovering: {:?}", item, session.phase());
    let settled = session.finish(target);
    if !settled.converged {
        println!("   (overlap left after {} passes)", settled.passes);
    }
    settled.board
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = GridConfig::default();
    if let Err(err) = config.validate() {
        eprintln!("invalid configuration: {err}");
        return;
    }

    let mut board = Board::new(config);
    for i in 1..=4 {
        let at = Point::new(800.0 + 160.0 * i as f64, 600.0);
        board = board.with_item(Item::new(ItemId(i), at, Size::new(140.0, 105.0)));
    }
    let (mut board, _trip) = board.create_container("Trip", Point::new(100.0, 100.0), 500.0);
    print_board("start", &board);

    // Cell centers of "Trip": first at (185, 215), 152 apart.
    let cells = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 1.0)];
    for (i, (col, row)) in cells.into_iter().enumerate() {
        let target = Point::new(185.0 + 152.0 * col, 215.0 + 152.0 * row);
        let before = board.clone();
        board = drag(&board, ItemId(i as u64 + 1), target, 0);
        for record in Board::diff(&before, &board) {
            println!("   persist {record:?}");
        }
    }
    print_board("filled", &board);

    // Swap the first two photos.
    board = drag(&board, ItemId(1), Point::new(337.0, 215.0), 0);
    print_board("after swap", &board);

    // Drop the last photo in empty space: it gets its own folder.
    board = drag(&board, ItemId(4), Point::new(900.0, 300.0), 0);
    print_board("after drag out", &board);
}
