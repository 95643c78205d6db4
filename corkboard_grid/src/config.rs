// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Process-wide grid configuration.

/// Geometry constants shared by every layout function.
///
/// All lengths are in world units (logical pixels). The struct is passed
/// explicitly to every function so that several configurations can coexist in
/// one process.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GridConfig {
    /// Largest display extent of an item on either axis.
    pub item_max_size: f64,
    /// Gap between adjacent cells.
    pub item_gap: f64,
    /// Padding between a container's edge and its first cell.
    pub container_padding: f64,
    /// Width given to newly created containers.
    pub default_container_width: f64,
    /// Narrowest width a container can be resized to.
    pub min_container_width: f64,
    /// Smallest content height (label band excluded).
    pub min_container_height: f64,
    /// Minimum clearance kept between any two containers.
    pub container_gap: f64,
    /// Height of the label band drawn above the content area.
    pub label_band_height: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            item_max_size: 140.0,
            item_gap: 12.0,
            container_padding: 15.0,
            default_container_width: 500.0,
            min_container_width: 180.0,
            min_container_height: 100.0,
            container_gap: 40.0,
            label_band_height: 30.0,
        }
    }
}

impl GridConfig {
    /// Pitch of one grid cell: `item_max_size + item_gap`.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.item_max_size + self.item_gap
    }

    /// Width of a container that holds exactly one column.
    #[inline]
    pub fn single_column_width(&self) -> f64 {
        2.0 * self.container_padding + self.item_max_size
    }

    /// Check the configuration once at startup.
    ///
    /// Geometry functions assume a valid configuration and never fail; this is
    /// the only fallible entry point of the crate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("item_max_size", self.item_max_size)?;
        positive("default_container_width", self.default_container_width)?;
        positive("min_container_width", self.min_container_width)?;
        non_negative("item_gap", self.item_gap)?;
        non_negative("container_padding", self.container_padding)?;
        non_negative("min_container_height", self.min_container_height)?;
        non_negative("container_gap", self.container_gap)?;
        non_negative("label_band_height", self.label_band_height)?;

        let needed = self.single_column_width();
        if self.min_container_width < needed {
            return Err(ConfigError::MinWidthTooNarrow {
                min_width: self.min_container_width,
                needed,
            });
        }
        if self.default_container_width < self.min_container_width {
            return Err(ConfigError::DefaultBelowMinimum {
                default: self.default_container_width,
                min: self.min_container_width,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

/// A [`GridConfig`] that cannot drive the layout engine.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A size that must be strictly positive is zero, negative, or not finite.
    #[error("`{field}` must be finite and positive, got {value}")]
    NotPositive {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A length that must be non-negative is negative or not finite.
    #[error("`{field}` must be finite and non-negative, got {value}")]
    Negative {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The minimum width cannot fit a single column of items.
    #[error("minimum container width {min_width} cannot hold one column ({needed} needed)")]
    MinWidthTooNarrow {
        /// Configured minimum width.
        min_width: f64,
        /// Width of a single-column container.
        needed: f64,
    },
    /// New containers would start narrower than the allowed minimum.
    #[error("default container width {default} is below the minimum {min}")]
    DefaultBelowMinimum {
        /// Configured default width.
        default: f64,
        /// Configured minimum width.
        min: f64,
    },
}
