//! End-to-end drag and swipe handling through `Carousel::handle_input`.

use glide::surface::Cursor;
use glide_core::config::CarouselConfig;
use glide_core::input::{InputEvent, InputResponse, PointerEvent, PointerPhase, TargetTag};
use glide_harness::{
    RecordingSurface, Slide, carousel, feed, mouse_drag, mouse_drag_over, settle, touch_swipe,
};

fn mouse(phase: PointerPhase, x: f64) -> InputEvent {
    PointerEvent::mouse(phase, x).into()
}

fn touch(phase: PointerPhase, x: f64, y: f64) -> InputEvent {
    PointerEvent::touch(phase, x, y).into()
}

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

#[test]
fn mouse_drag_follows_pointer_without_transition() {
    let (mut c, _) = carousel(4, CarouselConfig::default()).expect("carousel");

    let down = c.handle_input(mouse(PointerPhase::Down, 200.0));
    assert_eq!(
        down,
        InputResponse::PREVENT_DEFAULT | InputResponse::STOP_PROPAGATION
    );
    let mv = c.handle_input(mouse(PointerPhase::Move, 150.0));
    assert_eq!(mv, InputResponse::PREVENT_DEFAULT);

    assert!(c.is_dragging());
    assert_eq!(c.surface().offset(), -50.0);
    assert_eq!(c.surface().cursor(), Some(Cursor::Grabbing));
    assert!(c.surface().transition().is_some_and(|t| t.is_instant()));
}

#[test]
fn mouse_drag_past_threshold_commits_next() {
    let (mut c, log) = carousel(4, CarouselConfig::default()).expect("carousel");
    feed(&mut c, mouse_drag(200.0, 110.0, 3));

    assert_eq!(c.current_slide(), 1);
    assert_eq!(c.surface().offset(), -300.0);
    assert_eq!(c.surface().cursor(), Some(Cursor::Grab));
    assert_eq!(c.surface().transition().map(|t| t.duration_ms), Some(200));
    assert!(!c.is_dragging());
    assert_eq!(log.slides(), vec![1]);
}

#[test]
fn thirty_pixel_drag_commits_and_five_pixel_drag_resettles() {
    let (mut c, log) = carousel(5, CarouselConfig::default()).expect("carousel");
    feed(&mut c, mouse_drag(100.0, 70.0, 1));
    assert_eq!(log.slides(), vec![1]);

    c.surface_mut().take_ops();
    feed(&mut c, mouse_drag(100.0, 95.0, 1));
    assert_eq!(log.slides(), vec![1]);
    assert_eq!(c.surface().painted_offsets(), vec![-305.0, -300.0]);
}

#[test]
fn short_drag_springs_back() {
    let (mut c, log) = carousel(4, CarouselConfig::default()).expect("carousel");
    c.go_to(1);
    log.clear();
    feed(&mut c, mouse_drag(200.0, 185.0, 2));
    assert_eq!(c.current_slide(), 1);
    assert_eq!(c.surface().offset(), -300.0);
    assert!(log.changes().is_empty());
}

#[test]
fn drag_exactly_at_threshold_does_not_commit() {
    let (mut c, _) = carousel(4, CarouselConfig::default()).expect("carousel");
    feed(&mut c, mouse_drag(200.0, 180.0, 1));
    assert_eq!(c.current_slide(), 0);
}

#[test]
fn long_drag_moves_several_slides() {
    let (mut c, log) = carousel(5, CarouselConfig::default()).expect("carousel");
    feed(&mut c, mouse_drag(700.0, 50.0, 5));
    assert_eq!(c.current_slide(), 3);
    assert_eq!(log.changes().len(), 1);
}

#[test]
fn long_drag_moves_one_slide_without_multiple_drag() {
    let (mut c, _) =
        carousel(5, CarouselConfig::default().multiple_drag(false)).expect("carousel");
    feed(&mut c, mouse_drag(700.0, 50.0, 5));
    assert_eq!(c.current_slide(), 1);
}

#[test]
fn drag_toward_previous_at_start_settles_in_place() {
    let (mut c, log) = carousel(4, CarouselConfig::default()).expect("carousel");
    feed(&mut c, mouse_drag(100.0, 190.0, 3));
    assert_eq!(c.current_slide(), 0);
    assert_eq!(c.surface().offset(), 0.0);
    assert!(log.changes().is_empty());
}

#[test]
fn press_and_release_without_moving_does_nothing() {
    let (mut c, log) = carousel(4, CarouselConfig::default()).expect("carousel");
    feed(
        &mut c,
        [mouse(PointerPhase::Down, 100.0), mouse(PointerPhase::Up, 100.0)],
    );
    assert_eq!(c.current_slide(), 0);
    assert!(log.changes().is_empty());
}

#[test]
fn mouse_leave_ends_the_drag() {
    let (mut c, _) = carousel(4, CarouselConfig::default()).expect("carousel");
    let responses = feed(
        &mut c,
        [
            mouse(PointerPhase::Down, 200.0),
            mouse(PointerPhase::Move, 100.0),
            mouse(PointerPhase::Leave, 90.0),
        ],
    );
    assert_eq!(responses[2], InputResponse::NONE);
    assert_eq!(c.current_slide(), 1);
    assert!(!c.is_dragging());

    // A later move with the button up is ignored.
    c.handle_input(mouse(PointerPhase::Move, 0.0));
    assert_eq!(c.surface().offset(), -300.0);
}

#[test]
fn drags_starting_on_form_controls_are_ignored() {
    let (mut c, _) = carousel(4, CarouselConfig::default()).expect("carousel");
    for tag in [
        TargetTag::Input,
        TargetTag::TextArea,
        TargetTag::Select,
        TargetTag::Option,
    ] {
        let responses = feed(&mut c, mouse_drag_over(300.0, 0.0, 3, tag));
        assert_eq!(responses[0], InputResponse::NONE);
        assert_eq!(c.current_slide(), 0);
        assert_eq!(c.surface().offset(), 0.0);
    }
}

// ---------------------------------------------------------------------------
// Click suppression
// ---------------------------------------------------------------------------

#[test]
fn click_after_link_drag_is_cancelled_once() {
    let (mut c, _) = carousel(4, CarouselConfig::default()).expect("carousel");
    feed(&mut c, mouse_drag_over(200.0, 100.0, 2, TargetTag::Anchor));
    assert_eq!(
        c.handle_input(InputEvent::Click),
        InputResponse::PREVENT_DEFAULT
    );
    assert_eq!(c.handle_input(InputEvent::Click), InputResponse::NONE);
}

#[test]
fn click_after_plain_drag_passes() {
    let (mut c, _) = carousel(4, CarouselConfig::default()).expect("carousel");
    feed(&mut c, mouse_drag(200.0, 100.0, 2));
    assert_eq!(c.handle_input(InputEvent::Click), InputResponse::NONE);
}

#[test]
fn leaving_clears_link_click_suppression() {
    let (mut c, _) = carousel(4, CarouselConfig::default()).expect("carousel");
    feed(
        &mut c,
        [
            PointerEvent::mouse(PointerPhase::Down, 200.0)
                .with_target(TargetTag::Anchor)
                .into(),
            PointerEvent::mouse(PointerPhase::Move, 150.0)
                .with_target(TargetTag::Anchor)
                .into(),
            mouse(PointerPhase::Leave, 150.0),
        ],
    );
    assert_eq!(c.handle_input(InputEvent::Click), InputResponse::NONE);
}

// ---------------------------------------------------------------------------
// Touch
// ---------------------------------------------------------------------------

#[test]
fn horizontal_swipe_commits() {
    let (mut c, _) = carousel(4, CarouselConfig::default()).expect("carousel");
    let responses = feed(&mut c, touch_swipe((200.0, 100.0), (100.0, 105.0), 2));
    assert_eq!(responses[0], InputResponse::STOP_PROPAGATION);
    assert_eq!(
        responses[1],
        InputResponse::PREVENT_DEFAULT | InputResponse::STOP_PROPAGATION
    );
    assert_eq!(c.current_slide(), 1);
    // Touch never changes the cursor away from grab.
    assert_eq!(c.surface().cursor(), Some(Cursor::Grab));
}

#[test]
fn vertical_swipe_scrolls_the_page() {
    let (mut c, log) = carousel(4, CarouselConfig::default()).expect("carousel");
    c.surface_mut().take_ops();
    let responses = feed(&mut c, touch_swipe((100.0, 100.0), (60.0, 300.0), 4));

    assert!(responses[1..5].iter().all(|r| *r == InputResponse::STOP_PROPAGATION));
    assert_eq!(c.current_slide(), 0);
    assert!(c.surface().painted_offsets().iter().all(|&x| x == 0.0));
    assert!(log.changes().is_empty());
}

#[test]
fn axis_lock_is_decided_once_per_gesture() {
    let (mut c, _) = carousel(4, CarouselConfig::default()).expect("carousel");
    feed(
        &mut c,
        [
            touch(PointerPhase::Down, 200.0, 100.0),
            touch(PointerPhase::Move, 190.0, 101.0),
            // Mostly vertical from here on, but the gesture is already horizontal.
            touch(PointerPhase::Move, 150.0, 400.0),
        ],
    );
    assert!(c.is_dragging());
    assert_eq!(c.surface().offset(), -50.0);
}

// ---------------------------------------------------------------------------
// RTL and looping
// ---------------------------------------------------------------------------

#[test]
fn rtl_drag_right_goes_next() {
    let (mut c, _) = carousel(4, CarouselConfig::default().rtl(true)).expect("carousel");
    feed(&mut c, mouse_drag(100.0, 190.0, 3));
    assert_eq!(c.current_slide(), 1);
    assert_eq!(c.surface().offset(), 300.0);
}

#[test]
fn loop_drag_across_the_seam_snaps_with_drag_delta() {
    let (mut c, log) = carousel(5, CarouselConfig::default().looping(true)).expect("carousel");
    feed(
        &mut c,
        [
            mouse(PointerPhase::Down, 100.0),
            mouse(PointerPhase::Move, 190.0),
        ],
    );
    assert_eq!(c.surface().offset(), -210.0);
    c.surface_mut().take_ops();

    c.handle_input(mouse(PointerPhase::Up, 190.0));
    assert_eq!(c.current_slide(), 4);
    assert_eq!(log.slides(), vec![4]);
    assert_eq!(c.surface().painted_offsets(), vec![-1710.0]);

    settle(&mut c);
    assert_eq!(c.surface().offset(), -1500.0);
    assert_eq!(c.surface().visible(1), vec![Slide(4)]);
}

#[test]
fn loop_drag_inside_track_paints_immediately() {
    let (mut c, _) = carousel(5, CarouselConfig::default().looping(true)).expect("carousel");
    feed(&mut c, mouse_drag(200.0, 100.0, 2));
    assert_eq!(c.current_slide(), 1);
    assert_eq!(c.surface().offset(), -600.0);
    settle(&mut c);
    assert_eq!(c.surface().offset(), -600.0);
}

#[test]
fn long_loop_drag_forward_lands_on_a_real_slot() {
    let (mut c, log) = carousel(2, CarouselConfig::default().looping(true)).expect("carousel");
    feed(&mut c, mouse_drag(2000.0, 10.0, 4));
    settle(&mut c);
    assert_eq!(c.current_slide(), 1);
    assert_eq!(c.surface().offset(), -600.0);
    assert_eq!(c.surface().visible(1), vec![Slide(1)]);
    assert_eq!(log.slides(), vec![1]);
}

#[test]
fn long_loop_drag_backward_crosses_and_lands_on_a_real_slot() {
    let (mut c, _) = carousel(2, CarouselConfig::default().looping(true)).expect("carousel");
    feed(&mut c, mouse_drag(10.0, 2000.0, 4));
    settle(&mut c);
    assert_eq!(c.current_slide(), 1);
    assert_eq!(c.surface().offset(), -600.0);
    assert_eq!(c.surface().visible(1), vec![Slide(1)]);
}

#[test]
fn enormous_drag_clamps_to_the_last_slide() {
    let (mut c, _) = carousel(5, CarouselConfig::default()).expect("carousel");
    feed(&mut c, mouse_drag(1.0e300, 0.0, 1));
    assert_eq!(c.current_slide(), 4);
    assert_eq!(c.surface().offset(), -1200.0);
}

#[test]
fn non_draggable_ignores_pointer_input() {
    let surface = RecordingSurface::with_slides(4);
    let mut c = glide::Carousel::new(
        surface,
        CarouselConfig::default().draggable(false),
        glide::CarouselHooks::new(),
    )
    .expect("carousel");
    let responses = feed(&mut c, mouse_drag(300.0, 0.0, 3));
    assert!(responses.iter().all(|r| r.is_empty()));
    assert_eq!(c.current_slide(), 0);
    assert_eq!(c.handle_input(InputEvent::Click), InputResponse::NONE);
}

#[test]
fn resize_during_drag_keeps_tracking() {
    let (mut c, _) = carousel(4, CarouselConfig::default()).expect("carousel");
    feed(
        &mut c,
        [
            mouse(PointerPhase::Down, 200.0),
            mouse(PointerPhase::Move, 150.0),
            InputEvent::Resize,
            mouse(PointerPhase::Move, 100.0),
            mouse(PointerPhase::Up, 100.0),
        ],
    );
    assert_eq!(c.current_slide(), 1);
}
