// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The data model: containers ("folders") and the items ("photos") they arrange.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

/// Stable identifier of a [`Container`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId(pub u64);

/// Stable identifier of an [`Item`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u64);

/// How a container arranges its members.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContainerKind {
    /// Members occupy cells of a grid, or of a single-column stack when the
    /// container is too narrow for two columns.
    #[default]
    Grid,
    /// Members keep whatever position they were dropped at.
    Freeform,
}

/// A named, positioned, resizable group of items.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    /// Stable, unique identifier.
    pub id: ContainerId,
    /// Display name shown in the label band.
    pub name: String,
    /// Top-left corner of the label band, in world coordinates.
    pub origin: Point,
    /// Total width, padding included.
    pub width: f64,
    /// Explicit total height (label band included). When set it overrides the
    /// height computed from the member count.
    pub height: Option<f64>,
    /// Ordered member list. The order drives default grid placement.
    pub member_ids: Vec<ItemId>,
    /// Accent color as `0xRRGGBBAA`. Opaque to layout.
    pub accent_color: u32,
    /// Arrangement policy.
    pub kind: ContainerKind,
}

impl Container {
    /// Default accent for containers created without one.
    pub const DEFAULT_ACCENT: u32 = 0x4F_8E_F7_FF;

    /// Create an empty grid container.
    pub fn new(id: ContainerId, name: impl Into<String>, origin: Point, width: f64) -> Self {
        Self {
            id,
            name: name.into(),
            origin,
            width,
            height: None,
            member_ids: Vec::new(),
            accent_color: Self::DEFAULT_ACCENT,
            kind: ContainerKind::Grid,
        }
    }

    /// Set the arrangement policy.
    #[must_use]
    pub fn with_kind(mut self, kind: ContainerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set an explicit total height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Replace the member list.
    #[must_use]
    pub fn with_members(mut self, members: impl IntoIterator<Item = ItemId>) -> Self {
        self.member_ids = members.into_iter().collect();
        self
    }

    /// Whether `item` is listed as a member.
    pub fn lists(&self, item: ItemId) -> bool {
        self.member_ids.contains(&item)
    }
}

/// A positioned, sized visual unit that belongs to zero or one container.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Stable, unique identifier.
    pub id: ItemId,
    /// Top-left corner in world coordinates.
    pub position: Point,
    /// Display size after scaling.
    pub size: Size,
    /// Owning container, if any. `None` means free-floating.
    pub container_id: Option<ContainerId>,
}

impl Item {
    /// Create a free-floating item.
    pub fn new(id: ItemId, position: Point, size: Size) -> Self {
        Self {
            id,
            position,
            size,
            container_id: None,
        }
    }

    /// Assign the owning container.
    #[must_use]
    pub fn in_container(mut self, container: ContainerId) -> Self {
        self.container_id = Some(container);
        self
    }

    /// World-space rectangle covered by the item.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// World-space center of the item.
    pub fn center(&self) -> Point {
        self.rect().center()
    }
}
