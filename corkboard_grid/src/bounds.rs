// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container bounding boxes and minimum sizes.

use kurbo::{Point, Rect, Size};

use crate::geometry::{columns, count_to_f64, rows_needed};
use crate::{Container, GridConfig};

/// Content-area height (label band excluded) before the minimum is applied.
fn natural_content_height(config: &GridConfig, width: f64, member_count: usize) -> f64 {
    let rows = rows_needed(member_count, columns(config, width));
    count_to_f64(rows) * config.cell_size() + 2.0 * config.container_padding
}

/// On-screen bounding box of `container`, label band included.
///
/// An explicit `container.height` wins over the member-count computation but
/// is never allowed to squeeze the content area below `min_container_height`.
/// An empty container still occupies one row.
pub fn bounds(config: &GridConfig, container: &Container, member_count: usize) -> Rect {
    let height = total_height(config, container.width, container.height, member_count);
    Rect::from_origin_size(container.origin, Size::new(container.width, height))
}

/// Total height, label band included, for the given width and optional override.
pub fn total_height(
    config: &GridConfig,
    width: f64,
    explicit: Option<f64>,
    member_count: usize,
) -> f64 {
    let content = match explicit {
        Some(h) => h - config.label_band_height,
        None => natural_content_height(config, width, member_count),
    };
    config.label_band_height + content.max(config.min_container_height)
}

/// Smallest size that shows `member_count` items without clipping when the
/// container is `proposed_width` wide.
///
/// The width floor is `min_container_width`; the height floor follows from the
/// number of columns the (clamped) proposed width offers.
pub fn minimum_size(config: &GridConfig, member_count: usize, proposed_width: f64) -> Size {
    let width = config.min_container_width;
    let effective = if proposed_width.is_finite() {
        proposed_width.max(width)
    } else {
        width
    };
    let content = natural_content_height(config, effective, member_count);
    Size::new(
        width,
        config.label_band_height + content.max(config.min_container_height),
    )
}

/// Point at which the renderer draws the container's name.
pub fn label_anchor(config: &GridConfig, container: &Container) -> Point {
    Point::new(
        container.origin.x + config.container_padding,
        container.origin.y + config.label_band_height / 2.0,
    )
}

/// Grid-aligned size for `columns × rows` cells with no partial-cell slack.
pub fn aligned_size(config: &GridConfig, columns: usize, rows: usize) -> Size {
    let pad = 2.0 * config.container_padding;
    let cell = config.cell_size();
    let width = (count_to_f64(columns.max(1)) * cell + pad).max(config.min_container_width);
    let content = (count_to_f64(rows.max(1)) * cell + pad).max(config.min_container_height);
    Size::new(width, config.label_band_height + content)
}
