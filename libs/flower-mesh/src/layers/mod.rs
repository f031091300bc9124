//! Layer resolution.
//!
//! A flower is built from three concentric petal rings. The petal count of
//! each ring is not free-form: it is drawn from a fixed table of
//! Fibonacci-number combinations keyed by the base (outermost) count, which
//! is what keeps the layered look balanced.

use serde::{Deserialize, Serialize};

use crate::error::{FlowerError, FlowerResult};

#[cfg(test)]
mod tests;

/// One of the three concentric petal rings, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layer {
    /// Outermost ring.
    Base,
    /// Middle ring.
    Mid,
    /// Innermost ring.
    Inner,
}

impl Layer {
    /// All layers in build order, outermost first.
    pub const ALL: [Layer; 3] = [Layer::Base, Layer::Mid, Layer::Inner];

    /// Index of the layer within per-layer configuration arrays.
    pub const fn index(self) -> usize {
        match self {
            Layer::Base => 0,
            Layer::Mid => 1,
            Layer::Inner => 2,
        }
    }
}

/// Petal counts for the three rings of one flower.
///
/// Invariant: `base >= mid >= inner`, and all three counts are Fibonacci
/// numbers. Only the combinations in [`LAYER_SETS`] are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSet {
    /// Petal count of the outermost ring.
    pub base: u32,
    /// Petal count of the middle ring.
    pub mid: u32,
    /// Petal count of the innermost ring.
    pub inner: u32,
}

impl LayerSet {
    /// Builds a layer set from its three counts.
    pub const fn new(base: u32, mid: u32, inner: u32) -> Self {
        Self { base, mid, inner }
    }

    /// Petal count of the given layer.
    pub const fn count_for(&self, layer: Layer) -> u32 {
        match layer {
            Layer::Base => self.base,
            Layer::Mid => self.mid,
            Layer::Inner => self.inner,
        }
    }

    /// Total petal count across all three rings.
    pub const fn total(&self) -> u32 {
        self.base + self.mid + self.inner
    }
}

/// The supported layer combinations, keyed by base petal count.
pub const LAYER_SETS: [LayerSet; 7] = [
    LayerSet::new(3, 3, 3),
    LayerSet::new(5, 5, 3),
    LayerSet::new(8, 8, 5),
    LayerSet::new(13, 8, 5),
    LayerSet::new(21, 13, 8),
    LayerSet::new(34, 21, 13),
    LayerSet::new(55, 34, 21),
];

/// Resolves a base petal count to its layer set.
///
/// # Errors
/// Returns [`FlowerError::Configuration`] when the count is not one of the
/// enumerated base counts. There is no interpolation: unsupported counts
/// are rejected, not approximated.
///
/// # Examples
/// ```
/// use flower_mesh::resolve_layer_set;
///
/// let set = resolve_layer_set(21).unwrap();
/// assert_eq!((set.base, set.mid, set.inner), (21, 13, 8));
/// ```
pub fn resolve_layer_set(base_petal_count: u32) -> FlowerResult<LayerSet> {
    LAYER_SETS
        .iter()
        .copied()
        .find(|set| set.base == base_petal_count)
        .ok_or(FlowerError::Configuration {
            base_count: base_petal_count,
        })
}
