use super::*;
use crate::editor::scene::SceneEditor;

#[test]
fn rollback_deletes_tracked_meshes_only() {
    let mut editor = SceneEditor::new();
    let mut scope = CreationScope::new();
    let tracked = scope.track(editor.create_box(1.0, 1.0, 1.0, 1, 1).expect("box"));
    let untracked = editor.create_box(1.0, 1.0, 1.0, 1, 1).expect("box");

    scope.rollback(&mut editor);

    assert!(!editor.contains(tracked));
    assert!(editor.contains(untracked));
}

#[test]
fn untrack_skips_already_deleted_mesh() {
    let mut editor = SceneEditor::new();
    let mut scope = CreationScope::new();
    let template = scope.track(editor.create_box(1.0, 1.0, 1.0, 1, 1).expect("box"));
    let kept = scope.track(editor.create_box(1.0, 1.0, 1.0, 1, 1).expect("box"));

    editor.delete(template).expect("delete template");
    scope.untrack(template);
    assert_eq!(scope.tracked(), 1);

    // Rollback must not trip over the handle that was already deleted.
    scope.rollback(&mut editor);
    assert!(!editor.contains(kept));
    assert_eq!(editor.mesh_count(), 0);
}

#[test]
fn track_returns_the_same_handle() {
    let mut editor = SceneEditor::new();
    let mut scope = CreationScope::new();
    let created = editor.create_box(1.0, 1.0, 1.0, 1, 1).expect("box");
    assert_eq!(scope.track(created), created);
    assert_eq!(scope.tracked(), 1);
}
