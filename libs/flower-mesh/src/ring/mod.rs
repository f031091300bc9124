//! Ring arrangement.
//!
//! Turns one petal template into a ring of evenly spaced instances around
//! the flower disk, then retires the template.

use glam::DVec3;
use log::debug;

use config::constants::{FLAT_LAY_PITCH_DEGREES, FULL_TURN_DEGREES};

use crate::editor::scope::CreationScope;
use crate::editor::{MeshEditor, MeshHandle};
use crate::error::{FlowerError, FlowerResult};
use crate::flower::LayerStyle;


/// Duplicates `template` into `count` instances evenly spaced on a circle.
///
/// For each instance `i`, at angle `i * 360 / count` degrees: the duplicate
/// is laid flat, the layer style's scale and tilt are applied when they are
/// not the identity, and the instance is moved to
/// `(radius * cos, 0, radius * sin)` and yawed by the negated angle so it
/// points outward. The template is deleted afterwards and the host
/// selection cleared, so no transient state leaks into later operations.
///
/// # Returns
/// The instance handles in ascending angular order.
///
/// # Errors
/// Returns [`FlowerError::InvalidArgument`] when `count` is zero. Editor
/// failures propagate unrecovered.
pub fn arrange_ring<E: MeshEditor>(
    editor: &mut E,
    scope: &mut CreationScope,
    template: MeshHandle,
    count: u32,
    style: &LayerStyle,
) -> FlowerResult<Vec<MeshHandle>> {
    if count == 0 {
        return Err(FlowerError::invalid_argument(
            "petal count must be greater than zero",
        ));
    }

    let increment = FULL_TURN_DEGREES / f64::from(count);
    let mut instances = Vec::with_capacity(count as usize);
    for i in 0..count {
        let angle = f64::from(i) * increment;
        let instance = scope.track(editor.duplicate(template)?);

        editor.rotate(instance, DVec3::new(FLAT_LAY_PITCH_DEGREES, 0.0, 0.0))?;
        if style.has_scale() {
            editor.scale(instance, style.scale)?;
        }
        if style.has_tilt() {
            editor.rotate(instance, DVec3::new(style.tilt_degrees, 0.0, 0.0))?;
        }

        let (sin, cos) = angle.to_radians().sin_cos();
        editor.translate(instance, DVec3::new(style.radius * cos, 0.0, style.radius * sin))?;
        editor.rotate(instance, DVec3::new(0.0, -angle, 0.0))?;

        instances.push(instance);
    }

    // The template is not part of the result.
    editor.delete(template)?;
    scope.untrack(template);
    editor.clear_selection()?;
    debug!("arranged {count} petals at radius {}", style.radius);

    Ok(instances)
}
