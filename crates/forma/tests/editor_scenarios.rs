//! End-to-end scenarios driving an [`EditorSession`] against the
//! in-memory store.

use forma::{
    build_form, Alignment, ComponentKind, EditorCommand, EditorSession, GestureOutcome,
    ImageStore, Keystroke, MemoryStore, NewComponent, NewScreen, ProjectId, PropValue,
    PropertyBag, ResizeHandle, Section,
};
use glam::Vec2;
use store::{ComponentStore, DataUriUploader};

fn open_empty() -> EditorSession<MemoryStore> {
    EditorSession::open(MemoryStore::new(), ProjectId::new()).unwrap()
}

/// Opens a session whose screen already holds one component with the
/// given bounds.
fn open_with_bounds(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> (EditorSession<MemoryStore>, forma::ComponentId) {
    let mut store = MemoryStore::new();
    let project_id = ProjectId::new();
    let screen = store
        .create_screen(NewScreen::default_home(project_id))
        .unwrap();
    let component = store
        .create_component(NewComponent {
            screen_id: screen.id,
            kind: ComponentKind::Container,
            props: PropertyBag::new(),
            styles: PropertyBag::new(),
            x,
            y,
            width,
            height,
            layer_order: 0,
        })
        .unwrap();
    let session = EditorSession::open(store, project_id).unwrap();
    (session, component.id)
}

#[test]
fn drag_clamps_at_the_far_corner() {
    // A 20x20 component at (370, 660) dragged by (+50, +50) can only reach
    // (355, 647).
    let (mut session, id) = open_with_bounds(370.0, 660.0, 20.0, 20.0);

    session.pointer_down(id, Vec2::new(375.0, 665.0), 0);
    session.pointer_move(Vec2::new(425.0, 715.0));
    let outcome = session.pointer_up(Vec2::new(425.0, 715.0), 500);

    assert_eq!(outcome, GestureOutcome::Moved(id));
    let component = session.component(id).unwrap();
    assert_eq!((component.x, component.y), (355.0, 647.0));

    let store = session.into_store();
    let stored = store.component(id).unwrap();
    assert_eq!((stored.x, stored.y), (355.0, 647.0));
}

#[test]
fn west_resize_consumes_only_the_allowed_delta() {
    // Width 40 with a +30 westward drag floors at width 30; x moves by the
    // 10 units actually consumed.
    let (mut session, id) = open_with_bounds(100.0, 100.0, 40.0, 50.0);

    session.resize_start(id, ResizeHandle::West, Vec2::new(100.0, 120.0));
    session.pointer_move(Vec2::new(130.0, 120.0));
    let outcome = session.pointer_up(Vec2::new(130.0, 120.0), 500);

    assert_eq!(outcome, GestureOutcome::Resized(id));
    let component = session.component(id).unwrap();
    assert_eq!(component.width, 30.0);
    assert_eq!(component.x, 110.0);
}

#[test]
fn size_floors_hold_under_every_handle() {
    let handles = [
        ResizeHandle::North,
        ResizeHandle::South,
        ResizeHandle::East,
        ResizeHandle::West,
        ResizeHandle::NorthEast,
        ResizeHandle::NorthWest,
        ResizeHandle::SouthEast,
        ResizeHandle::SouthWest,
    ];
    for handle in handles {
        let (mut session, id) = open_with_bounds(150.0, 300.0, 60.0, 60.0);
        session.resize_start(id, handle, Vec2::new(150.0, 300.0));
        // Crush toward the component center from every direction.
        for target in [
            Vec2::new(400.0, 500.0),
            Vec2::new(-400.0, -500.0),
            Vec2::new(0.0, 0.0),
        ] {
            session.pointer_move(target);
            let component = session.component(id).unwrap();
            assert!(component.width >= 30.0, "{handle}: width {}", component.width);
            assert!(component.height >= 20.0, "{handle}: height {}", component.height);
        }
        session.pointer_up(Vec2::new(0.0, 0.0), 500);
    }
}

#[test]
fn align_center_rounds_from_canvas_center() {
    let (mut session, id) = open_with_bounds(0.0, 0.0, 100.0, 50.0);
    session.select(Some(id));
    session.align(Alignment::Center);
    // round(187.5 - 50) = 138
    assert_eq!(session.component(id).unwrap().x, 138.0);
}

#[test]
fn property_edits_are_last_write_wins() {
    let mut session = open_empty();
    let id = session.add_component(ComponentKind::Text).unwrap();

    session.update_property(id, "fontSize", 18.into());
    session.update_property(id, "fontSize", 22.into());
    session.update_property(id, "fontSize", 30.into());

    let component = session.component(id).unwrap();
    assert_eq!(component.props["fontSize"], 30.into());
    // One bag entry, three history snapshots.
    assert_eq!(
        component.props.keys().filter(|k| *k == "fontSize").count(),
        1
    );
    session.undo();
    assert_eq!(session.component(id).unwrap().props["fontSize"], 22.into());
}

#[test]
fn undo_then_edit_discards_the_redo_branch() {
    let mut session = open_empty();
    let id = session.add_component(ComponentKind::Button).unwrap();
    session.update_property(id, "text", "A".into());
    session.update_property(id, "text", "B".into());

    session.undo();
    assert_eq!(session.component(id).unwrap().props["text"], "A".into());

    session.update_property(id, "text", "C".into());
    assert!(!session.can_redo());
    session.undo();
    assert_eq!(session.component(id).unwrap().props["text"], "A".into());
    session.redo();
    assert_eq!(session.component(id).unwrap().props["text"], "C".into());
}

#[test]
fn paste_preserves_content_and_offsets_position() {
    let mut session = open_empty();
    let id = session.add_component(ComponentKind::Card).unwrap();
    session.update_property(id, "title", "Monthly report".into());
    session.copy();
    let pasted = session.paste().unwrap().unwrap();

    let source = session.component(id).unwrap().clone();
    let copy = session.component(pasted).unwrap();
    assert_eq!(copy.props, source.props);
    assert_eq!(copy.size(), source.size());
    assert_eq!(copy.x, source.x + 20.0);
    assert_eq!(copy.y, source.y + 20.0);
    assert_ne!(copy.id, source.id);
}

#[test]
fn layer_moves_are_noops_at_the_extremes() {
    let mut session = open_empty();
    let bottom = session.add_component(ComponentKind::Container).unwrap();
    let top = session.add_component(ComponentKind::Text).unwrap();

    session.layer_up(top);
    session.layer_down(bottom);
    assert_eq!(session.component(bottom).unwrap().layer_order, 0);
    assert_eq!(session.component(top).unwrap().layer_order, 1);

    session.layer_up(bottom);
    assert_eq!(session.component(bottom).unwrap().layer_order, 1);
    assert_eq!(session.component(top).unwrap().layer_order, 0);
}

#[test]
fn uploaded_image_lands_in_the_source_property() {
    let mut session = open_empty();
    let id = session.add_component(ComponentKind::Image).unwrap();

    let mut uploader = DataUriUploader::new();
    let url = uploader.upload_image(b"abc", "image/png").unwrap();
    session.update_property(id, "source", url.clone().into());

    let component = session.component(id).unwrap();
    assert_eq!(
        component.props["source"],
        "data:image/png;base64,YWJj".into()
    );
    assert_eq!(url, "data:image/png;base64,YWJj");
}

#[test]
fn command_stream_drives_a_full_edit() {
    let mut session = open_empty();
    let commands = [
        r#"{"type":"add_component","kind":"header"}"#,
        r#"{"type":"add_component","kind":"button"}"#,
        r#"{"type":"update_property","key":"text","value":"Sign up"}"#,
        r#"{"type":"align","alignment":"center"}"#,
        r#"{"type":"nudge","direction":"down","fast":true}"#,
        r#"{"type":"duplicate"}"#,
    ];
    for raw in commands {
        let command: EditorCommand = serde_json::from_str(raw).unwrap();
        session.execute(command).unwrap();
    }

    assert_eq!(session.components().len(), 3);
    let button = session.selected_component().unwrap();
    assert_eq!(button.props["text"], "Sign up".into());
    assert_eq!(button.x, 113.0);
    assert_eq!(button.y, 110.0);
}

#[test]
fn keyboard_session_round_trip() {
    let mut session = open_empty();
    session.add_component(ComponentKind::Text).unwrap();

    assert!(session.handle_keystroke(&Keystroke::parse("cmd-c")));
    assert!(session.handle_keystroke(&Keystroke::parse("cmd-v")));
    assert!(session.handle_keystroke(&Keystroke::parse("shift-down")));
    assert!(session.handle_keystroke(&Keystroke::parse("backspace")));
    assert_eq!(session.components().len(), 1);

    assert!(session.handle_keystroke(&Keystroke::parse("ctrl-z")));
    assert_eq!(session.components().len(), 2);
}

#[test]
fn form_follows_the_edited_bag() {
    let mut session = open_empty();
    let id = session.add_component(ComponentKind::Button).unwrap();

    let form = build_form(session.component(id).unwrap());
    let interactions = form
        .iter()
        .find(|s| s.section == Section::Interactions)
        .unwrap();
    assert_eq!(interactions.rows.len(), 1);

    session.update_property(id, "action", "navigate".into());
    let form = build_form(session.component(id).unwrap());
    let interactions = form
        .iter()
        .find(|s| s.section == Section::Interactions)
        .unwrap();
    assert_eq!(interactions.rows[1].key, "navigationTarget");
}

#[test]
fn gradient_enable_flows_through_update_property() {
    let mut session = open_empty();
    let id = session.add_component(ComponentKind::Container).unwrap();

    let seed = properties::gradient_seed(&session.component(id).unwrap().props);
    assert_eq!(seed, ["#1C1C1E", "#FF6B00"]);
    session.update_property(
        id,
        "gradientColors",
        PropValue::ColorStops(seed.to_vec()),
    );

    let component = session.component(id).unwrap();
    assert_eq!(
        component.props["gradientColors"],
        PropValue::ColorStops(vec!["#1C1C1E".into(), "#FF6B00".into()])
    );
}
