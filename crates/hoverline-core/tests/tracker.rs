// File: crates/hoverline-core/tests/tracker.rs
// Purpose: Nearest-point search and the Idle/Hovering state machine.

use hoverline_core::{nearest_index, HoverUpdate, Point, PointerTracker, ProjectedPoint, TrackerState};

fn row(xs: &[f32]) -> Vec<ProjectedPoint> {
    xs.iter()
        .enumerate()
        .map(|(index, &x)| ProjectedPoint { index, screen: Point::new(x, 0.0) })
        .collect()
}

#[test]
fn picks_the_closest_point() {
    let pts = row(&[0.0, 10.0, 100.0]);
    assert_eq!(nearest_index(Point::new(9.0, 0.0), &pts), Some(1));
    assert_eq!(nearest_index(Point::new(70.0, 0.0), &pts), Some(2));
    assert_eq!(nearest_index(Point::new(-5.0, 40.0), &pts), Some(0));
}

#[test]
fn ties_go_to_first_point() {
    let pts = row(&[0.0, 10.0]);
    assert_eq!(nearest_index(Point::new(5.0, 3.0), &pts), Some(0));
}

#[test]
fn reports_dataset_indices() {
    let pts = vec![
        ProjectedPoint { index: 7, screen: Point::new(0.0, 0.0) },
        ProjectedPoint { index: 3, screen: Point::new(50.0, 50.0) },
    ];
    assert_eq!(nearest_index(Point::new(45.0, 45.0), &pts), Some(3));
}

#[test]
fn empty_set_has_no_nearest_point() {
    assert_eq!(nearest_index(Point::new(1.0, 1.0), &[]), None);
    let mut tracker = PointerTracker::new();
    assert_eq!(tracker.pointer_moved(Point::new(1.0, 1.0), &[]), HoverUpdate::NoPoint);
    assert_eq!(tracker.state(), TrackerState::Idle);
}

#[test]
fn same_nearest_index_is_a_no_op() {
    let pts = row(&[0.0, 10.0, 100.0]);
    let mut tracker = PointerTracker::new();
    assert_eq!(tracker.state(), TrackerState::Idle);

    assert_eq!(tracker.pointer_moved(Point::new(9.0, 0.0), &pts), HoverUpdate::Changed(1));
    assert_eq!(tracker.state(), TrackerState::Hovering(1));

    // different pointer, same nearest point
    assert_eq!(tracker.pointer_moved(Point::new(11.0, 2.0), &pts), HoverUpdate::Unchanged);
    assert_eq!(tracker.state(), TrackerState::Hovering(1));

    assert_eq!(tracker.pointer_moved(Point::new(90.0, 0.0), &pts), HoverUpdate::Changed(2));
    assert_eq!(tracker.hovered(), Some(2));
}

#[test]
fn leaving_clears_memory() {
    let pts = row(&[0.0, 10.0, 100.0]);
    let mut tracker = PointerTracker::new();
    tracker.pointer_moved(Point::new(9.0, 0.0), &pts);

    assert!(tracker.pointer_left());
    assert_eq!(tracker.state(), TrackerState::Idle);
    assert!(!tracker.pointer_left());

    // identical move after leaving is reported again
    assert_eq!(tracker.pointer_moved(Point::new(9.0, 0.0), &pts), HoverUpdate::Changed(1));
}

#[test]
fn non_finite_pointer_resolves_to_no_point() {
    let pts = row(&[0.0, 10.0, 100.0]);
    assert_eq!(nearest_index(Point::new(f32::NAN, 0.0), &pts), None);
    assert_eq!(nearest_index(Point::new(f32::INFINITY, 0.0), &pts), None);

    let mut tracker = PointerTracker::new();
    tracker.pointer_moved(Point::new(9.0, 0.0), &pts);
    assert_eq!(tracker.pointer_moved(Point::new(f32::NAN, f32::NAN), &pts), HoverUpdate::NoPoint);
    // the remembered point survives a pointer that cannot be placed
    assert_eq!(tracker.state(), TrackerState::Hovering(1));
}
