use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sketchkit_core::blob::{FileBlob, MemoryBlob};
use sketchkit_core::error::DocumentError;
use sketchkit_core::event_bus::{DocumentEvent, EventCategory, EventFilter};
use sketchkit_core::scene::{Scene, SceneChange, SceneFile, Shape};
use sketchkit_editor::{Document, WindowHandle};

fn rect_change(id: u64) -> SceneChange {
    SceneChange::Insert {
        id,
        shape: Shape::Rectangle {
            x: 1.0,
            y: 2.0,
            width: 30.0,
            height: 40.0,
        },
    }
}

#[test]
fn untitled_document_uses_temporary_title() {
    let doc = Document::new(Scene::new(), None, "Untitled-1");
    assert_eq!(doc.title(), "Untitled-1");
    assert!(!doc.is_saveable());
}

#[test]
fn unsaved_edits_without_blob_are_not_saveable() {
    let mut doc = Document::new(Scene::new(), None, "Untitled-1");
    doc.editor_mut().apply_edit(rect_change(1));
    assert!(doc.editor().has_pending_modification());
    assert!(!doc.is_saveable());
}

#[test]
fn blob_name_becomes_the_title() {
    let mut doc = Document::new(Scene::new(), None, "Untitled-1");
    doc.set_blob(Arc::new(MemoryBlob::new("drawing.skk")));
    assert_eq!(doc.title(), "drawing.skk");
}

#[test]
fn save_writes_serialized_scene_and_resets_save_point() {
    let mut doc = Document::new(Scene::new(), None, "Untitled-1");
    let blob = Arc::new(MemoryBlob::new("drawing.skk"));
    doc.set_blob(blob.clone());

    doc.editor_mut().apply_edit(rect_change(1));
    assert!(doc.is_saveable());

    doc.save().unwrap();
    assert!(!doc.is_saveable());

    // The stored bytes are the canonical scene serialization.
    let stored = blob.contents().expect("blob received a write");
    let file = SceneFile::from_bytes(&stored).unwrap();
    assert_eq!(file.shapes.len(), 1);
}

#[test]
fn save_without_blob_is_a_silent_noop() {
    let mut doc = Document::new(Scene::new(), None, "Untitled-1");
    doc.editor_mut().apply_edit(rect_change(1));
    doc.save().unwrap();
    assert!(doc.editor().has_pending_modification());
}

#[test]
fn failed_write_keeps_document_saveable() {
    let mut doc = Document::new(Scene::new(), None, "Untitled-1");
    let blob = Arc::new(MemoryBlob::new("drawing.skk"));
    doc.set_blob(blob.clone());
    doc.editor_mut().apply_edit(rect_change(1));

    blob.set_fail_writes(true);
    let err = doc.save().unwrap_err();
    assert!(matches!(err, DocumentError::PersistenceWriteFailed { .. }));
    assert!(doc.is_saveable());

    // Retry once the store recovers.
    blob.set_fail_writes(false);
    doc.save().unwrap();
    assert!(!doc.is_saveable());
}

#[test]
fn reassigning_the_same_blob_changes_nothing() {
    let mut doc = Document::new(Scene::new(), None, "Untitled-1");
    let blob: Arc<MemoryBlob> = Arc::new(MemoryBlob::new("drawing.skk"));

    let notifications = Arc::new(AtomicUsize::new(0));
    let seen = notifications.clone();
    doc.events().subscribe(
        EventFilter::Categories(vec![EventCategory::Title, EventCategory::Saveability]),
        move |_| {
            seen.fetch_add(1, Ordering::Relaxed);
        },
    );

    doc.set_blob(blob.clone());
    let after_first = notifications.load(Ordering::Relaxed);
    assert_eq!(after_first, 2); // TitleChanged + SaveabilityChanged

    doc.set_blob(blob.clone());
    assert_eq!(doc.title(), "drawing.skk");
    assert_eq!(notifications.load(Ordering::Relaxed), after_first);
}

#[test]
fn set_blob_publishes_title_change() {
    let mut doc = Document::new(Scene::new(), None, "Untitled-1");
    let titles: Arc<parking_lot::Mutex<Vec<String>>> = Arc::default();
    let sink = titles.clone();
    doc.events().subscribe(
        EventFilter::Categories(vec![EventCategory::Title]),
        move |event| {
            if let DocumentEvent::TitleChanged { title } = event {
                sink.lock().push(title.clone());
            }
        },
    );

    doc.set_blob(Arc::new(MemoryBlob::new("drawing.skk")));
    assert_eq!(titles.lock().as_slice(), ["drawing.skk".to_string()]);
}

#[test]
fn save_to_file_blob_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.skk");

    let mut scene = Scene::with_name("drawing");
    scene.insert(Shape::Ellipse {
        cx: 10.0,
        cy: 10.0,
        rx: 5.0,
        ry: 3.0,
    });

    let mut doc = Document::new(scene, Some(Arc::new(FileBlob::new(&path))), "Untitled-1");
    assert_eq!(doc.title(), "drawing.skk");

    doc.editor_mut().apply_edit(rect_change(100));
    doc.save().unwrap();

    let restored = SceneFile::from_bytes(&std::fs::read(&path).unwrap())
        .unwrap()
        .into_scene();
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.name(), "drawing");
}

#[test]
fn undo_after_save_makes_document_saveable_again() {
    let mut doc = Document::new(Scene::new(), None, "Untitled-1");
    doc.set_blob(Arc::new(MemoryBlob::new("drawing.skk")));
    doc.editor_mut().apply_edit(rect_change(1));
    doc.save().unwrap();
    assert!(!doc.is_saveable());

    assert!(doc.editor_mut().undo());
    assert!(doc.is_saveable());
}

#[test]
fn active_window_is_always_a_member_or_empty() {
    let mut doc = Document::new(Scene::new(), None, "Untitled-1");
    let first = WindowHandle::new("main");
    let second = WindowHandle::new("detail");
    let first_id = first.id();
    let second_id = second.id();

    doc.attach_window(first);
    doc.attach_window(second);
    assert_eq!(doc.windows().len(), 2);

    // A foreign window cannot become active.
    assert!(!doc.set_active_window(Some(sketchkit_core::handles::WindowId::new())));
    assert_eq!(doc.active_window(), None);

    assert!(doc.set_active_window(Some(first_id)));
    assert_eq!(doc.active_window(), Some(first_id));

    // Detaching the active window clears the selection.
    assert!(doc.detach_window(first_id));
    assert_eq!(doc.active_window(), None);
    assert_eq!(doc.windows().len(), 1);

    assert!(doc.set_active_window(Some(second_id)));
    assert!(doc.set_active_window(None));
    assert_eq!(doc.active_window(), None);
}

#[test]
fn attaching_the_same_window_twice_is_a_noop() {
    let mut doc = Document::new(Scene::new(), None, "Untitled-1");
    let window = WindowHandle::new("main");
    doc.attach_window(window.clone());
    doc.attach_window(window);
    assert_eq!(doc.windows().len(), 1);
}
