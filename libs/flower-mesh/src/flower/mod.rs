//! Flower configuration and the top-level orchestrator.

use glam::DVec3;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use config::constants::EPSILON_TOLERANCE;

use crate::disk::build_disk;
use crate::editor::scope::CreationScope;
use crate::editor::{MeshEditor, MeshHandle};
use crate::error::FlowerResult;
use crate::layers::{resolve_layer_set, Layer};
use crate::petal::sculpt_petal;
use crate::ring::arrange_ring;


// =============================================================================
// CONFIGURATION
// =============================================================================

/// Per-layer styling: ring radius plus the optional scale and tilt that
/// differentiate the mid and inner rings from the base ring.
///
/// Scale and tilt default to the identity, which leaves every layer sized
/// and oriented like the base layer; a preset (or caller) opts in by
/// setting them away from identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    /// Radius of the circle the layer's petals are placed on.
    pub radius: f64,
    /// Per-axis scale applied to each petal instance.
    pub scale: DVec3,
    /// Additional pitch, in degrees, tilting each petal out of the ring
    /// plane.
    pub tilt_degrees: f64,
}

impl LayerStyle {
    /// An identity style at the given ring radius.
    pub const fn at_radius(radius: f64) -> Self {
        Self {
            radius,
            scale: DVec3::ONE,
            tilt_degrees: 0.0,
        }
    }

    /// Whether the style's scale differs from the identity.
    pub fn has_scale(&self) -> bool {
        (self.scale - DVec3::ONE).abs().max_element() > EPSILON_TOLERANCE
    }

    /// Whether the style tilts the petal at all.
    pub fn has_tilt(&self) -> bool {
        self.tilt_degrees.abs() > EPSILON_TOLERANCE
    }
}

/// Immutable description of one kind of flower.
///
/// Selects the petal box dimensions and subdivisions, the disk radius, and
/// the style of each of the three petal layers. Construct via a preset such
/// as [`FlowerType::sunflower`] and adjust fields as needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowerType {
    /// Petal box width (base to tip).
    pub width: f64,
    /// Petal box height (thickness).
    pub height: f64,
    /// Petal box depth (side to side).
    pub depth: f64,
    /// Petal box subdivisions along its width.
    pub subdivisions_x: u32,
    /// Petal box subdivisions along its height.
    pub subdivisions_y: u32,
    /// Radius of the central disk.
    pub disk_radius: f64,
    /// Styling of the base, mid, and inner layers, in that order.
    pub layer_styles: [LayerStyle; 3],
}

impl FlowerType {
    /// The sunflower preset: wide flat petals on a broad disk, all three
    /// layers sharing one ring radius.
    pub const fn sunflower() -> Self {
        Self {
            width: 1.0,
            height: 0.05,
            depth: 0.2,
            subdivisions_x: 8,
            subdivisions_y: 1,
            disk_radius: 0.8,
            layer_styles: [LayerStyle::at_radius(0.6); 3],
        }
    }

    /// Style of the given layer.
    pub const fn layer_style(&self, layer: Layer) -> &LayerStyle {
        &self.layer_styles[layer.index()]
    }
}

impl Default for FlowerType {
    fn default() -> Self {
        Self::sunflower()
    }
}

// =============================================================================
// RESULT
// =============================================================================

/// A finished flower: the disk plus every petal instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flower {
    /// Handle of the central disk.
    pub disk: MeshHandle,
    /// All petal instances across the three layers, flattened in creation
    /// order: base ring first, each ring in ascending angular order.
    pub petals: Vec<MeshHandle>,
}

// =============================================================================
// ORCHESTRATOR
// =============================================================================

/// Builds a complete flower through the given editor.
///
/// Resolves the layer counts for `base_petal_count`, builds the disk, then
/// sculpts a fresh template and arranges one ring per layer. On any failure
/// every mesh created so far is rolled back before the error propagates, so
/// the scene is never left with a partial flower.
///
/// # Examples
/// ```
/// use flower_mesh::{create_flower, FlowerType, SceneEditor};
///
/// let mut editor = SceneEditor::new();
/// let flower = create_flower(&mut editor, &FlowerType::sunflower(), 21).unwrap();
/// assert_eq!(flower.petals.len(), 21 + 13 + 8);
/// ```
pub fn create_flower<E: MeshEditor>(
    editor: &mut E,
    flower_type: &FlowerType,
    base_petal_count: u32,
) -> FlowerResult<Flower> {
    let mut scope = CreationScope::new();
    match build(editor, &mut scope, flower_type, base_petal_count) {
        Ok(flower) => Ok(flower),
        Err(error) => {
            warn!("flower construction failed, rolling back partial geometry: {error}");
            scope.rollback(editor);
            Err(error)
        }
    }
}

fn build<E: MeshEditor>(
    editor: &mut E,
    scope: &mut CreationScope,
    flower_type: &FlowerType,
    base_petal_count: u32,
) -> FlowerResult<Flower> {
    let layer_set = resolve_layer_set(base_petal_count)?;
    debug!(
        "resolved layer counts: base {}, mid {}, inner {}",
        layer_set.base, layer_set.mid, layer_set.inner
    );

    let disk = build_disk(editor, scope, flower_type, layer_set.base)?;

    let mut petals = Vec::with_capacity(layer_set.total() as usize);
    for layer in Layer::ALL {
        let template = sculpt_petal(editor, scope, flower_type)?;
        let count = layer_set.count_for(layer);
        let instances = arrange_ring(
            editor,
            scope,
            template,
            count,
            flower_type.layer_style(layer),
        )?;
        debug!("arranged {count} petals for {layer:?} layer");
        petals.extend(instances);
    }

    info!("created flower: 1 disk, {} petals across 3 layers", petals.len());
    Ok(Flower { disk, petals })
}
