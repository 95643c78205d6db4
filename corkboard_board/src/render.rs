// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frames handed to the renderer.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use corkboard_grid::{ContainerId, ItemId, label_anchor};

use crate::Board;

/// Where to draw one container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerFrame {
    /// Container id.
    pub id: ContainerId,
    /// Bounds, label band included.
    pub rect: Rect,
    /// Left-center point of the label text.
    pub label_anchor: Point,
}

/// Where to draw one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemFrame {
    /// Item id.
    pub id: ItemId,
    /// World-space rectangle.
    pub rect: Rect,
}

/// Everything the renderer needs for one snapshot, back to front.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frames {
    /// Containers in stacking order.
    pub containers: Vec<ContainerFrame>,
    /// Items in board order. Items draw above every container.
    pub items: Vec<ItemFrame>,
}

impl Board {
    /// Compute render frames for the current snapshot.
    pub fn frames(&self) -> Frames {
        let containers = self
            .containers()
            .iter()
            .filter_map(|c| {
                Some(ContainerFrame {
                    id: c.id,
                    rect: self.bounds_of(c.id)?,
                    label_anchor: label_anchor(self.config(), c),
                })
            })
            .collect();
        let items = self
            .items()
            .iter()
            .map(|i| ItemFrame {
                id: i.id,
                rect: i.rect(),
            })
            .collect();
        Frames { containers, items }
    }
}
