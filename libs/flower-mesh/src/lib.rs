//! Procedural flower mesh generation.
//!
//! Builds a stylized flower — a central disk plus three concentric rings of
//! duplicated, vertex-sculpted petals — entirely through the narrow
//! [`MeshEditor`] capability trait. The crate never talks to a host scene
//! graph directly: a host integration implements the trait, and the bundled
//! [`SceneEditor`] runs the same pipeline in memory for tests and headless
//! use.
//!
//! ## Pipeline
//!
//! ```text
//! FlowerType + base petal count
//!       ↓
//! resolve_layer_set      (fixed Fibonacci layer table)
//!       ↓
//! build_disk             (cylinder, radial segments = base count)
//!       ↓
//! sculpt_petal → arrange_ring      (once per layer)
//!       ↓
//! Flower { disk, petals }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use flower_mesh::{create_flower, FlowerType, SceneEditor};
//!
//! let mut editor = SceneEditor::new();
//! let flower = create_flower(&mut editor, &FlowerType::sunflower(), 21).unwrap();
//! assert_eq!(flower.petals.len(), 42);
//! ```

pub mod disk;
pub mod editor;
pub mod error;
pub mod flower;
pub mod layers;
pub mod petal;
pub mod ring;

pub use disk::build_disk;
pub use editor::scene::SceneEditor;
pub use editor::scope::CreationScope;
pub use editor::{MeshEditor, MeshHandle, VertexTopology};
pub use error::{FlowerError, FlowerResult};
pub use flower::{create_flower, Flower, FlowerType, LayerStyle};
pub use layers::{resolve_layer_set, Layer, LayerSet, LAYER_SETS};
pub use petal::{sculpt_petal, PETAL_VERTEX_OFFSETS};
pub use ring::arrange_ring;
