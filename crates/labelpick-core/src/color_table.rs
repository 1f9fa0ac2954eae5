//! Per-label RGBA color tables and opacity dimming.

use std::collections::HashMap;

use glam::DVec4;

/// Default opacity applied to non-selected labels while a pick is armed.
pub const DEFAULT_DIM_OPACITY: f64 = 0.01;

/// A mapping from label id to RGBA color.
///
/// Cloning the table yields an independent snapshot: the picker clones the
/// pre-gesture table once on arming and restores that exact value when the
/// gesture ends, so recolor-and-restore is transactional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    colors: HashMap<u32, DVec4>,
}

impl ColorTable {
    /// Creates an empty color table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a table from a set of labels, asking `color_for` for each one.
    pub fn from_labels(
        labels: impl IntoIterator<Item = u32>,
        mut color_for: impl FnMut(u32) -> DVec4,
    ) -> Self {
        let colors = labels.into_iter().map(|l| (l, color_for(l))).collect();
        Self { colors }
    }

    /// Sets the color for a label.
    pub fn insert(&mut self, label: u32, color: DVec4) {
        let _ = self.colors.insert(label, color);
    }

    /// The color of a label, if present.
    #[must_use]
    pub fn get(&self, label: u32) -> Option<DVec4> {
        self.colors.get(&label).copied()
    }

    /// Number of labels in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterates over (label, color) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, DVec4)> + '_ {
        self.colors.iter().map(|(&l, &c)| (l, c))
    }

    /// Returns a new table where every label except `kept` has its RGBA
    /// scaled by `[1, 1, 1, opacity]`; the kept label's color is unchanged.
    #[must_use]
    pub fn dimmed_except(&self, kept: u32, opacity: f64) -> Self {
        let dim = DVec4::new(1.0, 1.0, 1.0, opacity);
        let colors = self
            .colors
            .iter()
            .map(|(&label, &color)| {
                if label == kept {
                    (label, color)
                } else {
                    (label, color * dim)
                }
            })
            .collect();
        Self { colors }
    }
}
