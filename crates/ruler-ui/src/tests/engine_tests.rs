use super::*;
use ruler_core::Point;

const FRAME: Duration = Duration::from_millis(16);

/// `[0, 100]` in tenths, 10 px per tenth, selection at 50.
fn engine() -> RulerEngine {
    let axis = BoundedAxis::new(0, 1000, 1, 10.0).unwrap();
    RulerEngine::new(axis, 500, GestureConfig::default(), "ruler::test", false)
}

fn pump(engine: &mut RulerEngine) -> usize {
    let mut frames = 0;
    while engine.advance(FRAME) {
        frames += 1;
        assert!(frames < 1_000, "motion never settled");
    }
    frames
}

#[test]
fn dragging_left_advances_the_value() {
    let mut engine = engine();
    engine.handle_pointer(&PointerEvent::down(1, 500.0, 0.0, 0));
    assert_eq!(engine.state(), GestureState::Dragging);

    let response = engine.handle_pointer(&PointerEvent::moved(1, 480.0, 0.0, 16));
    assert!(response.redraw);
    assert_eq!(engine.position(), 5_020.0);
    assert_eq!(engine.value(), 502);

    engine.handle_pointer(&PointerEvent::moved(1, 380.0, 0.0, 32));
    assert_eq!(engine.value(), 512);
}

#[test]
fn slop_and_vertical_motion_are_absorbed() {
    let mut engine = engine();
    engine.handle_pointer(&PointerEvent::down(1, 500.0, 0.0, 0));
    let response = engine.handle_pointer(&PointerEvent::moved(1, 495.0, 0.0, 16));
    assert!(!response.redraw);
    engine.handle_pointer(&PointerEvent::moved(1, 480.0, 60.0, 32));
    assert_eq!(engine.position(), 5_000.0);
    engine.handle_pointer(&PointerEvent::up(1, 480.0, 60.0, 48));
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.value(), 500);
}

#[test]
fn slow_release_snaps_to_the_nearest_tick() {
    let mut engine = engine();
    engine.handle_pointer(&PointerEvent::down(1, 500.0, 0.0, 0));
    engine.handle_pointer(&PointerEvent::moved(1, 480.0, 0.0, 16));
    engine.handle_pointer(&PointerEvent::moved(1, 477.0, 0.0, 32));
    assert_eq!(engine.position(), 5_023.0);

    let response = engine.handle_pointer(&PointerEvent::up(1, 477.0, 0.0, 400));
    assert!(response.redraw);
    assert!(!engine.is_animating());
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.value(), 502);
    assert_eq!(engine.position(), 5_020.0);
}

#[test]
fn fast_release_flings_forward_then_settles_on_the_grid() {
    let mut engine = engine();
    engine.handle_pointer(&PointerEvent::down(1, 500.0, 0.0, 0));
    for i in 1..=5 {
        engine.handle_pointer(&PointerEvent::moved(1, 500.0 - i as f32 * 20.0, 0.0, i * 10));
    }
    let released_at = engine.position();
    engine.handle_pointer(&PointerEvent::up(1, 380.0, 0.0, 60));
    assert_eq!(engine.state(), GestureState::Flinging);
    assert!(engine.is_animating());

    assert!(pump(&mut engine) > 0);
    assert_eq!(engine.state(), GestureState::Idle);
    assert!(engine.position() > released_at);
    assert_eq!(engine.position(), engine.value() as f32 * 10.0);
}

#[test]
fn fling_stops_at_the_end_of_the_range() {
    let axis = BoundedAxis::new(0, 1000, 1, 10.0).unwrap();
    let mut engine = RulerEngine::new(axis, 990, GestureConfig::default(), "ruler::test", false);
    engine.handle_pointer(&PointerEvent::down(1, 500.0, 0.0, 0));
    for i in 1..=5 {
        engine.handle_pointer(&PointerEvent::moved(1, 500.0 - i as f32 * 10.0, 0.0, i * 5));
    }
    engine.handle_pointer(&PointerEvent::up(1, 440.0, 0.0, 30));
    pump(&mut engine);
    assert_eq!(engine.value(), 1000);
    assert_eq!(engine.position(), 10_000.0);
}

#[test]
fn dragging_past_either_end_clamps() {
    let mut engine = engine();
    engine.handle_pointer(&PointerEvent::down(1, 0.0, 0.0, 0));
    engine.handle_pointer(&PointerEvent::moved(1, 9_000.0, 0.0, 16));
    assert_eq!(engine.position(), 0.0);
    assert_eq!(engine.value(), 0);
    engine.handle_pointer(&PointerEvent::moved(1, -20_000.0, 0.0, 32));
    assert_eq!(engine.position(), 10_000.0);
    assert_eq!(engine.value(), 1000);
}

#[test]
fn cancel_abandons_without_snapping() {
    let mut engine = engine();
    engine.handle_pointer(&PointerEvent::down(1, 500.0, 0.0, 0));
    engine.handle_pointer(&PointerEvent::moved(1, 480.0, 0.0, 16));
    engine.handle_pointer(&PointerEvent::moved(1, 477.0, 0.0, 32));
    engine.handle_pointer(&PointerEvent::cancel(1, 48));
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.position(), 5_023.0);

    // Stale moves from the cancelled pointer are ignored.
    engine.handle_pointer(&PointerEvent::moved(1, 300.0, 0.0, 64));
    assert_eq!(engine.position(), 5_023.0);
}

#[test]
fn a_press_during_a_fling_stops_it_in_place() {
    let mut engine = engine();
    engine.animate_to(900, Duration::from_millis(500));
    engine.advance(FRAME);
    engine.advance(FRAME);
    let stopped_at = engine.position();
    assert!(stopped_at > 5_000.0 && stopped_at < 9_000.0);

    engine.handle_pointer(&PointerEvent::down(1, 100.0, 0.0, 100));
    assert!(!engine.is_animating());
    assert_eq!(engine.state(), GestureState::Dragging);
    assert_eq!(engine.position(), stopped_at);

    // Lifting without dragging settles the interrupted position.
    engine.handle_pointer(&PointerEvent::up(1, 100.0, 0.0, 150));
    assert_eq!(engine.position() % 10.0, 0.0);
    assert_eq!(engine.position(), engine.value() as f32 * 10.0);
}

#[test]
fn jump_cancels_motion() {
    let mut engine = engine();
    engine.animate_to(900, Duration::from_millis(500));
    engine.jump_to(123);
    assert!(!engine.is_animating());
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.position(), 1_230.0);
    assert!(!engine.advance(FRAME));
}

#[test]
fn extra_pointers_are_ignored_without_pinch() {
    let mut engine = engine();
    engine.handle_pointer(&PointerEvent::down(1, 500.0, 0.0, 0));
    engine.handle_pointer(&PointerEvent::down(2, 700.0, 0.0, 5));
    assert_eq!(engine.state(), GestureState::Dragging);
    let response = engine.handle_pointer(&PointerEvent::moved(2, 900.0, 0.0, 10));
    assert_eq!(response, EngineResponse::default());
    engine.handle_pointer(&PointerEvent::moved(1, 480.0, 0.0, 16));
    assert_eq!(engine.value(), 502);
}

#[test]
fn pinch_suppresses_drag_and_rearms_afterwards() {
    let mut engine = engine().with_pinch(8.0);
    engine.handle_pointer(&PointerEvent::down(1, 400.0, 0.0, 0));
    engine.handle_pointer(&PointerEvent::down(2, 500.0, 0.0, 5));
    assert_eq!(engine.state(), GestureState::Zooming);

    let response = engine.handle_pointer(&PointerEvent::moved(2, 600.0, 0.0, 16));
    assert_eq!(response.zoom_factor, Some(2.0));
    let response = engine.handle_pointer(&PointerEvent::moved(1, 300.0, 0.0, 32));
    assert_eq!(response.zoom_factor, Some(1.5));
    assert_eq!(engine.position(), 5_000.0);

    engine.handle_pointer(&PointerEvent::up(2, 600.0, 0.0, 48));
    assert_eq!(engine.state(), GestureState::Idle);

    // The first move after the pinch only re-arms detection.
    engine.handle_pointer(&PointerEvent::moved(1, 250.0, 0.0, 64));
    assert_eq!(engine.state(), GestureState::Dragging);
    assert_eq!(engine.position(), 5_000.0);
    engine.handle_pointer(&PointerEvent::moved(1, 245.0, 0.0, 80));
    assert_eq!(engine.position(), 5_000.0);
    engine.handle_pointer(&PointerEvent::moved(1, 240.0, 0.0, 96));
    assert_eq!(engine.position(), 5_005.0);
}

#[test]
fn lifting_both_pinch_fingers_leaves_the_value_alone() {
    let axis = BoundedAxis::new(0, 86_400, 60, 12.0).unwrap();
    let mut engine =
        RulerEngine::new(axis, 125, GestureConfig::default(), "ruler::test", false).with_pinch(8.0);
    engine.handle_pointer(&PointerEvent::down(1, 100.0, 0.0, 0));
    engine.handle_pointer(&PointerEvent::down(2, 200.0, 0.0, 0));
    engine.handle_pointer(&PointerEvent::up(1, 100.0, 0.0, 10));
    engine.handle_pointer(&PointerEvent::up(2, 200.0, 0.0, 20));
    assert_eq!(engine.state(), GestureState::Idle);
    assert_eq!(engine.value(), 125);
}

#[test]
fn rescale_keeps_the_value() {
    let axis = BoundedAxis::new(0, 86_400, 60, 12.0).unwrap();
    let mut engine = RulerEngine::new(axis, 3_600, GestureConfig::default(), "ruler::test", false);
    assert_eq!(engine.position(), 720.0);
    engine.rescale(BoundedAxis::new(0, 86_400, 10, 6.0).unwrap());
    assert_eq!(engine.value(), 3_600);
    assert_eq!(engine.position(), 2_160.0);
}

#[test]
fn non_finite_events_are_ignored() {
    let mut engine = engine();
    engine.handle_pointer(&PointerEvent::down(1, f32::NAN, 0.0, 0));
    assert_eq!(engine.state(), GestureState::Idle);
    engine.handle_pointer(&PointerEvent::down(1, 500.0, 0.0, 0));
    engine.handle_pointer(&PointerEvent::moved(1, f32::INFINITY, 0.0, 16));
    engine.handle_pointer(&PointerEvent::new(
        PointerEventKind::Move,
        1,
        Point::new(480.0, f32::NAN),
        20,
    ));
    assert_eq!(engine.position(), 5_000.0);
    engine.handle_pointer(&PointerEvent::moved(1, 480.0, 0.0, 32));
    assert_eq!(engine.position(), 5_020.0);
}
