// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The board snapshot and the operations that derive new snapshots from it.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use corkboard_grid::{
    Container, ContainerId, ContainerKind, GridConfig, Item, ItemId, Member, Placement, bounds,
    reading_order, reflow_container,
};
use corkboard_resolve::Resolver;

/// An immutable snapshot of every container and item on the canvas.
///
/// Operations never modify `self`; they return a new snapshot. The UI thread
/// is the only writer, and persistence reads committed snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    config: GridConfig,
    resolver: Resolver,
    containers: Vec<Container>,
    items: Vec<Item>,
}

/// A snapshot produced by a commit that ran overlap resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Settled {
    /// The committed snapshot.
    pub board: Board,
    /// `false` when the resolver hit its pass cap with overlap remaining.
    pub converged: bool,
    /// Resolver passes that ran.
    pub passes: usize,
}

impl Board {
    /// Create an empty board.
    pub fn new(config: GridConfig) -> Self {
        Self::from_parts(config, Vec::new(), Vec::new())
    }

    /// Create a board from existing containers and items, for example after
    /// loading them from storage.
    pub fn from_parts(config: GridConfig, containers: Vec<Container>, items: Vec<Item>) -> Self {
        Self {
            config,
            resolver: Resolver::new(config),
            containers,
            items,
        }
    }

    /// Use a custom overlap resolver (for example a different pass cap).
    #[must_use]
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Grid configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Overlap resolver used by commits.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// All containers, in stacking order (last is topmost).
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// All items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up a container.
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Look up an item.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Members of a container, in member-list order.
    ///
    /// Only items that exist *and* name this container are returned. Listed ids
    /// that disagree are skipped; items that name this container without being
    /// listed are appended in board order. Neither case is an error.
    pub fn members_of(&self, id: ContainerId) -> Vec<Member> {
        let Some(container) = self.container(id) else {
            return Vec::new();
        };
        let mut out: Vec<Member> = Vec::with_capacity(container.member_ids.len());
        for member in &container.member_ids {
            match self.item(*member) {
                Some(item) if item.container_id == Some(id) => {
                    if !out.iter().any(|m| m.id == item.id) {
                        out.push(item.into());
                    }
                }
                _ => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        container = id.0,
                        item = member.0,
                        "skipping stale member reference"
                    );
                }
            }
        }
        for item in &self.items {
            if item.container_id == Some(id) && !out.iter().any(|m| m.id == item.id) {
                out.push(item.into());
            }
        }
        out
    }

    /// Number of valid members of a container.
    pub fn member_count(&self, id: ContainerId) -> usize {
        self.members_of(id).len()
    }

    /// On-screen bounds of a container.
    pub fn bounds_of(&self, id: ContainerId) -> Option<Rect> {
        self.container(id)
            .map(|c| bounds(&self.config, c, self.member_count(id)))
    }

    /// Topmost container whose bounds contain `point`.
    pub fn container_at(&self, point: Point) -> Option<ContainerId> {
        self.containers
            .iter()
            .rev()
            .find(|c| bounds(&self.config, c, self.member_count(c.id)).contains(point))
            .map(|c| c.id)
    }

    /// Identifier for a new container.
    ///
    /// Ids referenced by items are skipped too, so a new container never adopts
    /// items that still point at a deleted one.
    pub fn next_container_id(&self) -> ContainerId {
        let highest = self
            .containers
            .iter()
            .map(|c| c.id.0)
            .chain(self.items.iter().filter_map(|i| i.container_id.map(|c| c.0)))
            .max();
        ContainerId(highest.map_or(1, |h| h.saturating_add(1)))
    }

    /// Smallest unused name of the form `Folder N`.
    pub fn next_folder_name(&self) -> String {
        let mut n = 1_usize;
        loop {
            let name = format!("Folder {n}");
            if !self.containers.iter().any(|c| c.name == name) {
                return name;
            }
            n += 1;
        }
    }

    /// Insert or replace an item as-is. Member lists are not touched.
    #[must_use]
    pub fn with_item(&self, item: Item) -> Self {
        let mut next = self.clone();
        match next.items.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => *slot = item,
            None => next.items.push(item),
        }
        next
    }

    /// Insert or replace a container as-is.
    #[must_use]
    pub fn with_container(&self, container: Container) -> Self {
        let mut next = self.clone();
        match next.containers.iter_mut().find(|c| c.id == container.id) {
            Some(slot) => *slot = container,
            None => next.containers.push(container),
        }
        next
    }

    /// Remove an item and every member-list reference to it.
    #[must_use]
    pub fn without_item(&self, id: ItemId) -> Self {
        let mut next = self.clone();
        next.items.retain(|i| i.id != id);
        for c in &mut next.containers {
            c.member_ids.retain(|m| *m != id);
        }
        next
    }

    /// Create an empty grid container.
    pub fn create_container(
        &self,
        name: impl Into<String>,
        origin: Point,
        width: f64,
    ) -> (Self, ContainerId) {
        let id = self.next_container_id();
        let width = clamp_width(&self.config, width);
        (
            self.with_container(Container::new(id, name, origin, width)),
            id,
        )
    }

    /// Create an auto-named container whose first cell starts at `item_position`.
    pub fn spawn_container_for(&self, item_position: Point) -> (Self, ContainerId) {
        let origin = item_position
            - Vec2::new(
                self.config.container_padding,
                self.config.label_band_height + self.config.container_padding,
            );
        let name = self.next_folder_name();
        #[cfg(feature = "tracing")]
        tracing::debug!(%name, x = origin.x, y = origin.y, "spawning container");
        self.create_container(name, origin, self.config.default_container_width)
    }

    /// Add freshly imported items as a new group, laid out in the order given.
    pub fn import_group(
        &self,
        name: impl Into<String>,
        origin: Point,
        items: &[(ItemId, Size)],
    ) -> (Settled, ContainerId) {
        let (mut next, id) = self.create_container(name, origin, self.config.default_container_width);
        for (item, size) in items {
            next = next
                .with_item(Item::new(*item, origin, *size))
                .assign(*item, Some(id), origin);
        }
        let settled = next.reflow(id).resolve(Some(id));
        (settled, id)
    }

    /// Delete a container. Its members stay where they are, free-floating.
    #[must_use]
    pub fn delete_container(&self, id: ContainerId) -> Self {
        let mut next = self.clone();
        next.containers.retain(|c| c.id != id);
        for item in &mut next.items {
            if item.container_id == Some(id) {
                item.container_id = None;
            }
        }
        next
    }

    /// Rename a container.
    #[must_use]
    pub fn rename_container(&self, id: ContainerId, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(c) = next.container_mut(id) {
            c.name = name.into();
        }
        next
    }

    /// Move a container's label to `origin`, carrying its members along.
    #[must_use]
    pub fn move_container(&self, id: ContainerId, origin: Point) -> Self {
        let Some(current) = self.container(id) else {
            return self.clone();
        };
        let delta = origin - current.origin;
        let mut next = self.clone();
        if let Some(c) = next.container_mut(id) {
            c.origin = origin;
        }
        next.shift_members(id, delta);
        next
    }

    /// Change a container's width and explicit height.
    ///
    /// Members are not moved; see the resize controller for repacking.
    #[must_use]
    pub fn resize_container(&self, id: ContainerId, width: f64, height: Option<f64>) -> Self {
        let mut next = self.clone();
        let width = clamp_width(&self.config, width);
        if let Some(c) = next.container_mut(id) {
            c.width = width;
            c.height = height;
        }
        next
    }

    /// Finish a label drag: push other containers out of the way.
    pub fn settle_container(&self, id: ContainerId) -> Settled {
        self.resolve(Some(id))
    }

    /// Put an item in `target` (or make it free-floating) at `position`.
    ///
    /// Member lists of the old and new container are updated. A `target` that
    /// does not exist leaves the item free-floating.
    #[must_use]
    pub fn assign(&self, item: ItemId, target: Option<ContainerId>, position: Point) -> Self {
        let mut next = self.clone();
        let target = target.filter(|t| next.container(*t).is_some());
        let Some(entry) = next.items.iter_mut().find(|i| i.id == item) else {
            return next;
        };
        let previous = entry.container_id;
        entry.container_id = target;
        entry.position = position;

        if let Some(prev) = previous
            && previous != target
            && let Some(c) = next.container_mut(prev)
        {
            c.member_ids.retain(|m| *m != item);
        }
        if let Some(t) = target
            && let Some(c) = next.container_mut(t)
            && !c.lists(item)
        {
            c.member_ids.push(item);
        }
        next
    }

    /// Set item positions.
    #[must_use]
    pub fn place(&self, placements: &[Placement]) -> Self {
        let mut next = self.clone();
        for p in placements {
            if let Some(item) = next.items.iter_mut().find(|i| i.id == p.id) {
                item.position = p.position;
            }
        }
        next
    }

    /// Reflow a container's members in member-list order.
    #[must_use]
    pub fn reflow(&self, id: ContainerId) -> Self {
        let Some(container) = self.container(id) else {
            return self.clone();
        };
        let members = self.members_of(id);
        self.place(&reflow_container(&self.config, container, &members))
    }

    /// Re-sort a container's member list into reading order of the cells its
    /// members occupy, then reflow.
    ///
    /// This is the commit-time pass after a drop: it closes gaps while keeping
    /// the arrangement the user just made.
    #[must_use]
    pub fn compact(&self, id: ContainerId) -> Self {
        let Some(container) = self.container(id) else {
            return self.clone();
        };
        if container.kind == ContainerKind::Freeform {
            return self.clone();
        }
        let ordered = reading_order(&self.config, container, &self.members_of(id));
        let mut member_ids: Vec<ItemId> = ordered.iter().map(|m| m.id).collect();
        // Stale ids stay listed for the caller to reconcile.
        member_ids.extend(
            container
                .member_ids
                .iter()
                .filter(|m| !ordered.iter().any(|o| o.id == **m))
                .copied(),
        );
        let mut next = self.clone();
        if let Some(c) = next.container_mut(id) {
            c.member_ids = member_ids;
        }
        next.reflow(id)
    }

    /// Run overlap resolution; moved containers carry their members along.
    pub fn resolve(&self, changed: Option<ContainerId>) -> Settled {
        let resolution =
            self.resolver
                .resolve(&self.containers, |c| self.member_count(c.id), changed);
        let mut next = self.clone();
        for (id, delta) in resolution.moved() {
            next.shift_members(id, delta);
        }
        next.containers = resolution.containers;
        Settled {
            board: next,
            converged: resolution.converged,
            passes: resolution.passes,
        }
    }

    /// Bulk layout, for example after loading: reflow every container in its
    /// member-list order, then resolve overlaps with no preferred container.
    pub fn arrange(&self) -> Settled {
        let mut next = self.clone();
        for id in self.containers.iter().map(|c| c.id) {
            next = next.reflow(id);
        }
        next.resolve(None)
    }

    /// Discard containers with no valid members.
    #[must_use]
    pub fn prune_empty(&self) -> Self {
        let mut next = self.clone();
        next.containers.retain(|c| self.member_count(c.id) > 0);
        next
    }

    fn container_mut(&mut self, id: ContainerId) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| c.id == id)
    }

    fn shift_members(&mut self, id: ContainerId, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        let members: Vec<ItemId> = self.members_of(id).iter().map(|m| m.id).collect();
        for item in &mut self.items {
            if members.contains(&item.id) {
                item.position += delta;
            }
        }
    }
}

/// Clamp a requested container width to the configured minimum.
pub fn clamp_width(config: &GridConfig, width: f64) -> f64 {
    if width.is_finite() {
        width.max(config.min_container_width)
    } else {
        config.default_container_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn photo(id: u64) -> Item {
        Item::new(ItemId(id), Point::ZERO, Size::new(140.0, 140.0))
    }

    fn board_with_group(n: u64) -> (Board, ContainerId) {
        let items: Vec<_> = (1..=n)
            .map(|i| (ItemId(i), Size::new(140.0, 140.0)))
            .collect();
        let (settled, id) =
            Board::new(GridConfig::default()).import_group("Trip", Point::new(100.0, 100.0), &items);
        (settled.board, id)
    }

    #[test]
    fn import_group_reflows_in_order() {
        let (board, id) = board_with_group(4);
        assert_eq!(id, ContainerId(1));
        assert_eq!(board.member_count(id), 4);
        assert_eq!(board.item(ItemId(4)).unwrap().position, Point::new(115.0, 297.0));
        assert_eq!(board.item(ItemId(2)).unwrap().position, Point::new(267.0, 145.0));
    }

    #[test]
    fn stale_references_are_skipped() {
        let (board, id) = board_with_group(2);
        // Item 2 now claims a container that does not exist.
        let board = board.with_item(photo(2).in_container(ContainerId(99)));
        let ids: Vec<_> = board.members_of(id).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![ItemId(1)]);
        // The dangling reference is left for the caller.
        assert_eq!(board.item(ItemId(2)).unwrap().container_id, Some(ContainerId(99)));
        // And a new container never reuses the dangling id.
        assert_eq!(board.next_container_id(), ContainerId(100));
    }

    #[test]
    fn unlisted_claimants_are_appended() {
        let (board, id) = board_with_group(1);
        let board = board.with_item(photo(7).in_container(id));
        let ids: Vec<_> = board.members_of(id).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![ItemId(1), ItemId(7)]);
    }

    #[test]
    fn assign_moves_membership() {
        let (board, a) = board_with_group(2);
        let (board, b) = board.create_container("Empty", Point::new(900.0, 100.0), 500.0);
        let board = board.assign(ItemId(1), Some(b), Point::new(915.0, 145.0));
        assert_eq!(board.container(a).unwrap().member_ids, vec![ItemId(2)]);
        assert_eq!(board.container(b).unwrap().member_ids, vec![ItemId(1)]);

        let board = board.assign(ItemId(1), Some(ContainerId(42)), Point::ZERO);
        assert_eq!(board.item(ItemId(1)).unwrap().container_id, None);
        assert!(board.container(b).unwrap().member_ids.is_empty());
    }

    #[test]
    fn move_container_carries_members() {
        let (board, id) = board_with_group(2);
        let before = board.item(ItemId(2)).unwrap().position;
        let moved = board.move_container(id, Point::new(150.0, 90.0));
        assert_eq!(
            moved.item(ItemId(2)).unwrap().position,
            before + Vec2::new(50.0, -10.0)
        );
        // The original snapshot is untouched.
        assert_eq!(board.item(ItemId(2)).unwrap().position, before);
    }

    #[test]
    fn resolve_shifts_members_with_their_container() {
        let (board, _) = board_with_group(1);
        let (board, b) = board.create_container("Second", Point::new(300.0, 120.0), 500.0);
        let board = board
            .with_item(photo(9))
            .assign(ItemId(9), Some(b), Point::new(315.0, 165.0));
        let settled = board.resolve(None);
        assert!(settled.converged);
        // Centers differ by (200, 20): "Second" goes right to 600 + 40.
        let moved = settled.board.container(b).unwrap().origin;
        assert_eq!(moved, Point::new(640.0, 120.0));
        assert_eq!(
            settled.board.item(ItemId(9)).unwrap().position,
            Point::new(655.0, 165.0)
        );
    }

    #[test]
    fn delete_leaves_members_floating() {
        let (board, id) = board_with_group(2);
        let board = board.delete_container(id);
        assert!(board.container(id).is_none());
        assert!(board.items().iter().all(|i| i.container_id.is_none()));
    }

    #[test]
    fn folder_names_fill_gaps() {
        let board = Board::new(GridConfig::default());
        let (board, _) = board.create_container("Folder 1", Point::ZERO, 500.0);
        let (board, _) = board.create_container("Folder 3", Point::ZERO, 500.0);
        assert_eq!(board.next_folder_name(), "Folder 2");
    }

    #[test]
    fn spawned_container_puts_item_in_first_cell() {
        let board = Board::new(GridConfig::default());
        let (board, id) = board.spawn_container_for(Point::new(415.0, 345.0));
        let c = board.container(id).unwrap();
        assert_eq!(c.origin, Point::new(400.0, 300.0));
        assert_eq!(c.name, "Folder 1");
        assert_eq!(c.width, 500.0);
    }

    #[test]
    fn widths_are_clamped() {
        let board = Board::new(GridConfig::default());
        let (board, id) = board.create_container("Tiny", Point::ZERO, 20.0);
        assert_eq!(board.container(id).unwrap().width, 180.0);
    }

    #[test]
    fn compact_closes_gaps_in_reading_order() {
        let (board, id) = board_with_group(3);
        // Drag item 1 into cell (1, 1) by hand; compaction puts it last.
        let board = board.place(&[Placement {
            id: ItemId(1),
            position: Point::new(267.0, 297.0),
        }]);
        let board = board.compact(id);
        assert_eq!(board.container(id).unwrap().member_ids, vec![
            ItemId(2),
            ItemId(3),
            ItemId(1)
        ]);
        assert_eq!(board.item(ItemId(1)).unwrap().position, Point::new(419.0, 145.0));
    }

    #[test]
    fn arrange_reflows_then_separates() {
        // Two containers loaded on top of each other with unplaced members.
        let a = Container::new(ContainerId(1), "A", Point::new(0.0, 0.0), 500.0)
            .with_members([ItemId(1)]);
        let b = Container::new(ContainerId(2), "B", Point::new(100.0, 20.0), 500.0)
            .with_members([ItemId(2)]);
        let board = Board::from_parts(GridConfig::default(), vec![a, b], vec![
            photo(1).in_container(ContainerId(1)),
            photo(2).in_container(ContainerId(2)),
        ]);
        let settled = board.arrange();
        assert!(settled.converged);
        let board = settled.board.rename_container(ContainerId(2), "Pets");
        // B yields to the right: 500 + 40 - 100 = 440.
        assert_eq!(board.container(ContainerId(2)).unwrap().origin, Point::new(540.0, 20.0));
        assert_eq!(board.container(ContainerId(2)).unwrap().name, "Pets");
        assert_eq!(board.item(ItemId(1)).unwrap().position, Point::new(15.0, 45.0));
        assert_eq!(board.item(ItemId(2)).unwrap().position, Point::new(555.0, 65.0));
    }

    #[test]
    fn prune_drops_only_empty_containers() {
        let (board, id) = board_with_group(1);
        let (board, empty) = board.create_container("Empty", Point::new(0.0, 900.0), 500.0);
        let board = board.prune_empty();
        assert!(board.container(id).is_some());
        assert!(board.container(empty).is_none());
    }

    #[test]
    fn container_at_prefers_topmost() {
        let board = Board::new(GridConfig::default());
        let (board, a) = board.create_container("A", Point::ZERO, 500.0);
        let (board, b) = board.create_container("B", Point::new(100.0, 0.0), 500.0);
        assert_eq!(board.container_at(Point::new(150.0, 50.0)), Some(b));
        assert_eq!(board.container_at(Point::new(50.0, 50.0)), Some(a));
        assert_eq!(board.container_at(Point::new(-5.0, 50.0)), None);
    }
}
