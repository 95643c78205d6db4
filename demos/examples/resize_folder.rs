// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shrink a folder until it repacks, then drag a neighbor into it.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p corkboard_demos --example resize_folder`

use corkboard_board::Board;
use corkboard_grid::{GridConfig, ItemId};
use corkboard_interaction::{ContainerDrag, ResizeSession};
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let photos: Vec<_> = (1..=6)
        .map(|i| (ItemId(i), Size::new(140.0, 140.0)))
        .collect();
    let board = Board::new(GridConfig::default());
    let (settled, trip) = board.import_group("Trip", Point::new(100.0, 100.0), &photos);
    let (board, pets) = settled
        .board
        .create_container("Pets", Point::new(700.0, 100.0), 500.0);

    // Drag the resize handle inward in a few throttled steps.
    let Some(mut resize) = ResizeSession::begin(&board, trip) else {
        return;
    };
    for (t, x) in [(0, 560.0), (20, 480.0), (40, 420.0), (80, 300.0)] {
        let applied = resize.on_move(Point::new(x, 364.0), t);
        let size = resize.size();
        println!(
            "t={t:>3} handle x={x:>5.1} applied={applied:<5} size={:.0} x {:.0}",
            size.width, size.height
        );
    }
    let settled = resize.finish(Point::new(300.0, 364.0));
    let board = settled.board;
    if let Some(c) = board.container(trip) {
        println!("trip finalized at {} x {:?}", c.width, c.height);
    }
    for id in board.container(trip).map(|c| c.member_ids.clone()).unwrap_or_default() {
        if let Some(item) = board.item(id) {
            println!("  item {:>2} at {:?}", id.0, item.position);
        }
    }

    // Drag "Pets" on top of "Trip"; "Trip" yields when it is released.
    let Some(mut drag) = ContainerDrag::begin(&board, pets, Point::new(710.0, 110.0)) else {
        return;
    };
    drag.on_move(Point::new(160.0, 130.0), 0);
    let settled = drag.finish(Point::new(160.0, 130.0));
    for c in settled.board.containers() {
        println!("{:<5} origin {:?}", c.name, c.origin);
    }
}
