// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change records for the persistence collaborator.
//!
//! Storage holds integer coordinates. [`Board::diff`] compares two committed
//! snapshots after rounding and reports one [`PersistRecord`] per item or
//! container whose stored form changed.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;

use corkboard_grid::{ContainerId, ItemId};

use crate::Board;

bitflags::bitflags! {
    /// Which stored fields a [`PersistRecord`] changes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ChangeFlags: u8 {
        /// Horizontal position.
        const X         = 0b0000_0001;
        /// Vertical position.
        const Y         = 0b0000_0010;
        /// Width.
        const WIDTH     = 0b0000_0100;
        /// Height.
        const HEIGHT    = 0b0000_1000;
        /// Owning container (items only).
        const CONTAINER = 0b0001_0000;
        /// The record did not exist before.
        const CREATED   = 0b0010_0000;
        /// The record no longer exists.
        const REMOVED   = 0b0100_0000;
    }
}

/// What a [`PersistRecord`] describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordKey {
    /// An item.
    Item(ItemId),
    /// A container.
    Container(ContainerId),
}

/// Stored form of one item or container, with the fields that changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersistRecord {
    /// Which record.
    pub key: RecordKey,
    /// Fields that differ from the previous snapshot.
    pub changed: ChangeFlags,
    /// Rounded left edge.
    pub x: i64,
    /// Rounded top edge.
    pub y: i64,
    /// Rounded width.
    pub width: i64,
    /// Rounded height. For containers this is the on-screen height.
    pub height: i64,
    /// Owning container of an item; `None` for free items and for containers.
    pub container_id: Option<ContainerId>,
}

#[derive(Copy, Clone, PartialEq)]
struct Stored {
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    container_id: Option<ContainerId>,
}

impl Stored {
    fn from_rect(rect: Rect, container_id: Option<ContainerId>) -> Self {
        Self {
            x: round(rect.x0),
            y: round(rect.y0),
            width: round(rect.width()),
            height: round(rect.height()),
            container_id,
        }
    }

    fn changes_from(&self, old: &Self) -> ChangeFlags {
        let mut flags = ChangeFlags::empty();
        flags.set(ChangeFlags::X, self.x != old.x);
        flags.set(ChangeFlags::Y, self.y != old.y);
        flags.set(ChangeFlags::WIDTH, self.width != old.width);
        flags.set(ChangeFlags::HEIGHT, self.height != old.height);
        flags.set(ChangeFlags::CONTAINER, self.container_id != old.container_id);
        flags
    }

    fn record(self, key: RecordKey, changed: ChangeFlags) -> PersistRecord {
        PersistRecord {
            key,
            changed,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            container_id: self.container_id,
        }
    }
}

impl Board {
    /// Records that bring storage from `old` to `new`.
    ///
    /// Containers come first, then items, each in the order of the snapshot
    /// that holds them (removals last). Unchanged entries produce no record.
    pub fn diff(old: &Self, new: &Self) -> Vec<PersistRecord> {
        let mut out = Vec::new();

        let stored_container = |board: &Self, id: ContainerId| {
            board.bounds_of(id).map(|r| Stored::from_rect(r, None))
        };
        for c in new.containers() {
            let key = RecordKey::Container(c.id);
            let Some(now) = stored_container(new, c.id) else {
                continue;
            };
            diff_one(&mut out, key, stored_container(old, c.id), now);
        }

        for item in new.items() {
            let key = RecordKey::Item(item.id);
            let now = Stored::from_rect(item.rect(), item.container_id);
            let before = old
                .item(item.id)
                .map(|i| Stored::from_rect(i.rect(), i.container_id));
            diff_one(&mut out, key, before, now);
        }

        for c in old.containers() {
            if new.container(c.id).is_none()
                && let Some(was) = stored_container(old, c.id)
            {
                out.push(was.record(RecordKey::Container(c.id), ChangeFlags::REMOVED));
            }
        }
        for item in old.items() {
            if new.item(item.id).is_none() {
                let was = Stored::from_rect(item.rect(), item.container_id);
                out.push(was.record(RecordKey::Item(item.id), ChangeFlags::REMOVED));
            }
        }
        out
    }
}

fn diff_one(out: &mut Vec<PersistRecord>, key: RecordKey, before: Option<Stored>, now: Stored) {
    match before {
        None => out.push(now.record(key, ChangeFlags::CREATED)),
        Some(before) => {
            let changed = now.changes_from(&before);
            if !changed.is_empty() {
                out.push(now.record(key, changed));
            }
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Canvas coordinates are far inside the i64 range."
)]
fn round(v: f64) -> i64 {
    v.round() as i64
}
