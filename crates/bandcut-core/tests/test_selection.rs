use approx::assert_relative_eq;
use proptest::prelude::*;

use bandcut_core::selection::{Marker, Selection, SelectionEvent, SelectionState};

fn both_set(start: f64, end: f64) -> Selection {
    let mut s = Selection::new(1000);
    s.on_primary_click(start);
    s.on_primary_click(end);
    s
}

#[test]
fn test_new_selection_is_empty() {
    let s = Selection::new(1000);
    assert_eq!(s.state(), SelectionState::Empty);
    assert_eq!(s.bounds(), None);
    assert_eq!(s.dragging(), None);
}

#[test]
fn test_clicks_create_markers_in_order() {
    let mut s = Selection::new(1000);
    assert!(s.on_primary_click(200.0));
    assert_eq!(s.state(), SelectionState::StartSet);
    assert_eq!(s.start_y(), Some(200.0));
    assert_eq!(s.end_y(), None);

    assert!(s.on_primary_click(600.0));
    assert_eq!(s.state(), SelectionState::BothSet);
    assert_eq!(s.bounds(), Some((200.0, 600.0)));
}

#[test]
fn test_reversed_clicks_are_swapped() {
    let s = both_set(600.0, 200.0);
    assert_eq!(s.bounds(), Some((200.0, 600.0)));
}

#[test]
fn test_third_click_is_ignored() {
    let mut s = both_set(200.0, 600.0);
    assert!(!s.on_primary_click(800.0));
    assert_eq!(s.bounds(), Some((200.0, 600.0)));
}

#[test]
fn test_clicks_are_clamped_to_image() {
    let s = both_set(-50.0, 5000.0);
    assert_eq!(s.bounds(), Some((0.0, 1000.0)));
}

#[test]
fn test_same_row_clicks_keep_minimum_gap() {
    let s = both_set(300.0, 300.0);
    assert_eq!(s.bounds(), Some((300.0, 301.0)));
}

#[test]
fn test_same_row_clicks_at_bottom_edge() {
    let s = both_set(1000.0, 1000.0);
    assert_eq!(s.bounds(), Some((999.0, 1000.0)));
}

#[test]
fn test_non_finite_input_is_ignored() {
    let mut s = Selection::new(1000);
    assert!(!s.on_primary_click(f64::NAN));
    assert_eq!(s.state(), SelectionState::Empty);
}

#[test]
fn test_drag_requires_existing_marker() {
    let mut s = Selection::new(1000);
    assert!(!s.begin_drag_start());
    assert_eq!(s.dragging(), None);

    s.on_primary_click(100.0);
    assert!(!s.begin_drag_end());
    assert_eq!(s.dragging(), None);
    assert!(s.begin_drag_start());
    assert_eq!(s.dragging(), Some(Marker::Start));
}

#[test]
fn test_drag_without_begin_does_nothing() {
    let mut s = both_set(200.0, 600.0);
    assert!(!s.drag_start_to(300.0));
    assert!(!s.drag_end_to(700.0));
    assert_eq!(s.bounds(), Some((200.0, 600.0)));
}

#[test]
fn test_drag_start_marker() {
    let mut s = both_set(200.0, 600.0);
    s.begin_drag_start();
    assert!(s.drag_start_to(250.0));
    assert_eq!(s.bounds(), Some((250.0, 600.0)));
    // Dragging the end marker is not active.
    assert!(!s.drag_end_to(700.0));
    s.end_drag();
    assert_eq!(s.dragging(), None);
    assert_eq!(s.bounds(), Some((250.0, 600.0)));
}

#[test]
fn test_drag_start_onto_end_clamps_below_it() {
    let mut s = both_set(200.0, 600.0);
    s.begin_drag_start();
    s.drag_start_to(600.0);
    assert_eq!(s.bounds(), Some((599.0, 600.0)));
    s.drag_start_to(900.0);
    assert_eq!(s.bounds(), Some((599.0, 600.0)));
}

#[test]
fn test_drag_end_above_start_clamps_below_start() {
    let mut s = both_set(200.0, 600.0);
    s.begin_drag_end();
    s.drag_end_to(50.0);
    assert_eq!(s.bounds(), Some((200.0, 201.0)));
}

#[test]
fn test_drag_end_is_clamped_to_image() {
    let mut s = both_set(200.0, 600.0);
    s.begin_drag_end();
    s.drag_end_to(1e9);
    assert_eq!(s.bounds(), Some((200.0, 1000.0)));
}

#[test]
fn test_drag_start_alone() {
    let mut s = Selection::new(1000);
    s.on_primary_click(500.0);
    s.begin_drag_start();
    s.drag_start_to(-20.0);
    assert_eq!(s.start_y(), Some(0.0));
    assert_eq!(s.state(), SelectionState::StartSet);
}

#[test]
fn test_reset_clears_everything() {
    let mut s = both_set(200.0, 600.0);
    s.begin_drag_end();
    s.reset();
    assert_eq!(s.state(), SelectionState::Empty);
    assert_eq!(s.dragging(), None);
    assert_relative_eq!(s.image_height(), 1000.0);
}

#[test]
fn test_marker_at_picks_nearest() {
    let s = both_set(200.0, 206.0);
    assert_eq!(s.marker_at(202.0, 5.0), Some(Marker::Start));
    assert_eq!(s.marker_at(205.0, 5.0), Some(Marker::End));
    assert_eq!(s.marker_at(400.0, 5.0), None);
}

#[test]
fn test_press_on_marker_begins_drag() {
    let mut s = both_set(200.0, 600.0);
    assert!(s.press(603.0, 5.0));
    assert_eq!(s.dragging(), Some(Marker::End));
    assert_eq!(s.bounds(), Some((200.0, 600.0)));
}

#[test]
fn test_press_away_from_markers_is_ignored_when_both_set() {
    let mut s = both_set(200.0, 600.0);
    assert!(!s.press(400.0, 5.0));
    assert_eq!(s.dragging(), None);
    assert_eq!(s.bounds(), Some((200.0, 600.0)));
}

#[test]
fn test_press_creates_markers_before_both_set() {
    let mut s = Selection::new(1000);
    s.press(300.0, 5.0);
    s.press(100.0, 5.0);
    assert_eq!(s.bounds(), Some((100.0, 300.0)));
    assert_eq!(s.dragging(), None);
}

#[test]
fn test_apply_is_pure() {
    let s = Selection::new(1000);
    let next = s.apply(SelectionEvent::Click(10.0));
    assert_eq!(s.state(), SelectionState::Empty);
    assert_eq!(next.start_y(), Some(10.0));
}

#[test]
fn test_single_row_image_keeps_gap_inside_image() {
    let mut s = Selection::new(1);
    s.on_primary_click(0.5);
    s.on_primary_click(0.5);
    assert_eq!(s.bounds(), Some((0.0, 1.0)));

    s.begin_drag_start();
    s.drag_start_to(1.0);
    assert_eq!(s.bounds(), Some((0.0, 1.0)));

    s.end_drag();
    s.begin_drag_end();
    s.drag_end_to(0.0);
    assert_eq!(s.bounds(), Some((0.0, 1.0)));
}

#[test]
fn test_clicks_at_bottom_edge_anchor_band_to_last_row() {
    let mut s = Selection::new(10);
    s.on_primary_click(9.8);
    s.on_primary_click(9.6);
    let (start, end) = s.bounds().unwrap();
    assert_relative_eq!(start, 9.0);
    assert_relative_eq!(end, 10.0);
}

fn event_strategy(height: f64) -> impl Strategy<Value = SelectionEvent> {
    let rows = -0.2 * height..1.2 * height;
    prop_oneof![
        rows.clone().prop_map(SelectionEvent::Click),
        Just(SelectionEvent::BeginDrag(Marker::Start)),
        Just(SelectionEvent::BeginDrag(Marker::End)),
        rows.prop_map(SelectionEvent::DragTo),
        Just(SelectionEvent::EndDrag),
        Just(SelectionEvent::Reset),
    ]
}

fn height_and_events() -> impl Strategy<Value = (u32, Vec<SelectionEvent>)> {
    (1u32..2000).prop_flat_map(|height| {
        (
            Just(height),
            prop::collection::vec(event_strategy(height as f64), 0..60),
        )
    })
}

proptest! {
    #[test]
    fn prop_invariants_hold_for_any_event_sequence(
        (height, events) in height_and_events(),
    ) {
        let h = height as f64;
        let mut s = Selection::new(height);
        for event in events {
            s = s.apply(event);

            match (s.start_y(), s.end_y()) {
                (None, None) => prop_assert_eq!(s.state(), SelectionState::Empty),
                (Some(start), None) => {
                    prop_assert!((0.0..=h).contains(&start));
                }
                (Some(start), Some(end)) => {
                    prop_assert!((0.0..=h).contains(&start));
                    prop_assert!((0.0..=h).contains(&end));
                    prop_assert!(start <= end - 1.0 + 1e-9);
                }
                (None, Some(_)) => prop_assert!(false, "end marker without start"),
            }
        }
    }
}
