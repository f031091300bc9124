use super::*;

#[test]
fn test_cylinder_vertex_layout() {
    let mut editor = SceneEditor::new();
    let cyl = editor
        .create_cylinder(1.0, 0.1, 8, DVec3::Y)
        .expect("cylinder succeeds");
    // 2 rings of 8 vertices + 2 cap centers.
    assert_eq!(editor.vertex_count(cyl).expect("live mesh"), 18);
    assert_eq!(editor.radial_segments(cyl).expect("live mesh"), Some(8));
}

#[test]
fn test_cylinder_rejects_bad_parameters() {
    let mut editor = SceneEditor::new();
    assert!(matches!(
        editor.create_cylinder(0.0, 0.1, 8, DVec3::Y),
        Err(FlowerError::ExternalApi { .. })
    ));
    assert!(matches!(
        editor.create_cylinder(1.0, -1.0, 8, DVec3::Y),
        Err(FlowerError::ExternalApi { .. })
    ));
    assert!(matches!(
        editor.create_cylinder(1.0, 0.1, 2, DVec3::Y),
        Err(FlowerError::ExternalApi { .. })
    ));
    assert!(matches!(
        editor.create_cylinder(1.0, 0.1, 8, DVec3::ZERO),
        Err(FlowerError::ExternalApi { .. })
    ));
}

#[test]
fn test_box_halves_are_contiguous_sides() {
    let mut editor = SceneEditor::new();
    let cube = editor
        .create_box(0.8, 0.1, 0.2, 8, 1)
        .expect("box succeeds");
    let vertices = editor.vertices(cube).expect("live mesh");
    // 2 sides * 9 * 2 vertices, split evenly by index.
    assert_eq!(vertices.len(), 36);
    let half = vertices.len() / 2;
    assert!(vertices[..half].iter().all(|v| v.z == 0.1));
    assert!(vertices[half..].iter().all(|v| v.z == -0.1));
}

#[test]
fn test_box_rejects_flat_dimensions() {
    let mut editor = SceneEditor::new();
    assert!(matches!(
        editor.create_box(0.8, 0.0, 0.2, 8, 1),
        Err(FlowerError::ExternalApi { .. })
    ));
    assert!(matches!(
        editor.create_box(0.8, 0.1, 0.2, 0, 1),
        Err(FlowerError::ExternalApi { .. })
    ));
}

#[test]
fn test_duplicate_is_independent() {
    let mut editor = SceneEditor::new();
    let original = editor.create_box(1.0, 1.0, 1.0, 1, 1).expect("box");
    let copy = editor.duplicate(original).expect("duplicate");
    editor
        .move_vertex(copy, 0, DVec3::new(0.5, 0.0, 0.0))
        .expect("move vertex");

    let original_first = editor.vertices(original).expect("live mesh")[0];
    let copy_first = editor.vertices(copy).expect("live mesh")[0];
    assert_ne!(original_first, copy_first);
}

#[test]
fn test_transforms_accumulate() {
    let mut editor = SceneEditor::new();
    let cube = editor.create_box(1.0, 1.0, 1.0, 1, 1).expect("box");
    editor
        .translate(cube, DVec3::new(1.0, 0.0, 0.0))
        .expect("translate");
    editor
        .translate(cube, DVec3::new(0.0, 2.0, 0.0))
        .expect("translate");
    editor
        .rotate(cube, DVec3::new(90.0, 0.0, 0.0))
        .expect("rotate");
    editor
        .rotate(cube, DVec3::new(0.0, -45.0, 0.0))
        .expect("rotate");
    editor
        .scale(cube, DVec3::new(0.5, 1.0, 1.0))
        .expect("scale");

    assert_eq!(
        editor.translation(cube).expect("live mesh"),
        DVec3::new(1.0, 2.0, 0.0)
    );
    assert_eq!(
        editor.rotation_degrees(cube).expect("live mesh"),
        DVec3::new(90.0, -45.0, 0.0)
    );
    assert_eq!(
        editor.scale_factors(cube).expect("live mesh"),
        DVec3::new(0.5, 1.0, 1.0)
    );
}

#[test]
fn test_selection_follows_creation_and_clears() {
    let mut editor = SceneEditor::new();
    let first = editor.create_box(1.0, 1.0, 1.0, 1, 1).expect("box");
    assert_eq!(editor.selection(), &[first]);

    let second = editor.duplicate(first).expect("duplicate");
    assert_eq!(editor.selection(), &[second]);

    editor.clear_selection().expect("clear selection");
    assert!(editor.selection().is_empty());
}

#[test]
fn test_unknown_handle_is_external_error() {
    let mut editor = SceneEditor::new();
    let stale = MeshHandle::new(99);
    assert!(matches!(
        editor.delete(stale),
        Err(FlowerError::ExternalApi { .. })
    ));
    assert!(matches!(
        editor.duplicate(stale),
        Err(FlowerError::ExternalApi { .. })
    ));
    assert!(matches!(
        editor.vertex_count(stale),
        Err(FlowerError::ExternalApi { .. })
    ));
}

#[test]
fn test_delete_removes_mesh_and_selection() {
    let mut editor = SceneEditor::new();
    let cube = editor.create_box(1.0, 1.0, 1.0, 1, 1).expect("box");
    editor.delete(cube).expect("delete");
    assert!(!editor.contains(cube));
    assert_eq!(editor.mesh_count(), 0);
    assert!(editor.selection().is_empty());
}
