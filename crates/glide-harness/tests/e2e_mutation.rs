//! End-to-end mutation: insert/remove/prepend/append, resize, destroy.

use glide::surface::{Cursor, ListenerKind};
use glide_core::config::{Breakpoints, CarouselConfig};
use glide_core::error::{Error, RangeError};
use glide_core::input::InputEvent;
use glide_harness::{RecordingSurface, Slide, SurfaceOp, carousel, settle};

fn slides(ids: &[u32]) -> Vec<Slide> {
    ids.iter().copied().map(Slide).collect()
}

// ---------------------------------------------------------------------------
// Insert
// ---------------------------------------------------------------------------

#[test]
fn insert_before_current_keeps_view_stable() {
    let (mut c, _) = carousel(5, CarouselConfig::default()).expect("carousel");
    c.go_to(2);
    c.insert(Slide(99), 0).expect("insert");

    assert_eq!(c.current_slide(), 3);
    assert_eq!(c.items(), slides(&[99, 0, 1, 2, 3, 4]).as_slice());
    assert_eq!(c.surface().visible(1), slides(&[2]));
    assert_eq!(c.surface().offset(), -900.0);
}

#[test]
fn insert_after_current_does_not_shift() {
    let (mut c, _) = carousel(5, CarouselConfig::default()).expect("carousel");
    c.go_to(2);
    c.insert(Slide(99), 3).expect("insert");
    assert_eq!(c.current_slide(), 2);
    assert_eq!(c.items()[3], Slide(99));
}

#[test]
fn insert_rebuilds_track_widths() {
    let (mut c, _) = carousel(4, CarouselConfig::default()).expect("carousel");
    c.insert(Slide(9), 2).expect("insert");
    assert_eq!(c.surface().track().len(), 5);
    assert!(c.surface().track().iter().all(|s| s.width_percent == 20.0));
    assert_eq!(c.surface().frame_width(), 1500.0);
}

#[test]
fn prepend_and_append() {
    let (mut c, _) = carousel(2, CarouselConfig::default()).expect("carousel");
    c.prepend(Slide(10)).expect("prepend");
    c.append(Slide(11)).expect("append");
    assert_eq!(c.items(), slides(&[10, 0, 1, 11]).as_slice());
    assert_eq!(c.current_slide(), 1);
}

#[test]
fn insert_one_past_the_end_appends() {
    let (mut c, _) = carousel(3, CarouselConfig::default()).expect("carousel");
    c.insert(Slide(7), 4).expect("insert");
    assert_eq!(c.items().last(), Some(&Slide(7)));
}

#[test]
fn insert_out_of_range_leaves_state_untouched() {
    let (mut c, _) = carousel(5, CarouselConfig::default()).expect("carousel");
    c.go_to(1);
    let before = c.snapshot();
    let err = c.insert(Slide(99), 7).unwrap_err();
    assert_eq!(
        err,
        Error::Range(RangeError::InsertOutOfBounds { index: 7, len: 5 })
    );
    assert!(err.is_recoverable());
    assert_eq!(c.snapshot(), before);
}

#[test]
fn insert_duplicate_is_rejected() {
    let (mut c, _) = carousel(5, CarouselConfig::default()).expect("carousel");
    let err = c.insert(Slide(2), 0).unwrap_err();
    assert_eq!(err, Error::Range(RangeError::DuplicateItem { index: 2 }));
    assert_eq!(c.item_count(), 5);
}

#[test]
fn insert_into_loop_rebuilds_clones() {
    let (mut c, _) = carousel(3, CarouselConfig::default().looping(true)).expect("carousel");
    c.append(Slide(3)).expect("append");
    assert_eq!(c.surface().track_slides(), slides(&[3, 0, 1, 2, 3, 0]));
}

#[test]
fn insert_with_runs_callback_on_success_only() {
    let (mut c, _) = carousel(3, CarouselConfig::default()).expect("carousel");
    let mut called = 0;
    c.insert_with(Slide(5), 0, |_| called += 1).expect("insert");
    let _ = c.insert_with(Slide(5), 0, |_| called += 1);
    assert_eq!(called, 1);
}

// ---------------------------------------------------------------------------
// Remove
// ---------------------------------------------------------------------------

#[test]
fn remove_before_current_shifts_back() {
    let (mut c, _) = carousel(5, CarouselConfig::default()).expect("carousel");
    c.go_to(3);
    let removed = c.remove(1).expect("remove");
    assert_eq!(removed, Slide(1));
    assert_eq!(c.current_slide(), 2);
    assert_eq!(c.surface().visible(1), slides(&[3]));
}

#[test]
fn removing_the_last_visible_slide_steps_back() {
    let (mut c, _) = carousel(5, CarouselConfig::default()).expect("carousel");
    c.go_to(2);
    c.remove(2).expect("remove");
    assert_eq!(c.current_slide(), 1);
}

#[test]
fn removing_at_the_end_stays_on_a_full_page() {
    let (mut c, _) = carousel(5, CarouselConfig::default().per_page(2)).expect("carousel");
    c.go_to(3);
    c.remove(3).expect("remove");
    assert_eq!(c.current_slide(), 2);
    assert_eq!(c.surface().visible(2), slides(&[2, 4]));
}

#[test]
fn removing_first_slide_at_start_stays_at_zero() {
    let (mut c, _) = carousel(3, CarouselConfig::default()).expect("carousel");
    c.remove(0).expect("remove");
    assert_eq!(c.raw_slide(), 0);
    assert_eq!(c.items(), slides(&[1, 2]).as_slice());
}

#[test]
fn remove_out_of_range_is_rejected() {
    let (mut c, _) = carousel(3, CarouselConfig::default()).expect("carousel");
    let before = c.snapshot();
    let err = c.remove(3).unwrap_err();
    assert_eq!(
        err,
        Error::Range(RangeError::RemoveOutOfBounds { index: 3, len: 3 })
    );
    assert_eq!(c.snapshot(), before);
}

#[test]
fn removing_everything_leaves_an_inert_carousel() {
    let (mut c, log) = carousel(3, CarouselConfig::default()).expect("carousel");
    c.go_to(2);
    for _ in 0..3 {
        c.remove(0).expect("remove");
    }
    assert_eq!(c.item_count(), 0);
    assert_eq!(c.raw_slide(), 0);
    assert!(c.surface().track().is_empty());
    log.clear();
    assert!(!c.next(1));
    assert!(log.changes().is_empty());

    c.append(Slide(42)).expect("append");
    assert_eq!(c.surface().track()[0].width_percent, 100.0);
}

#[test]
fn remove_in_loop_normalizes_raw_index_first() {
    let config = CarouselConfig::default().looping(true).per_page(2).start_index(3);
    let (mut c, _) = carousel(5, config).expect("carousel");
    c.next(1);
    settle(&mut c);
    assert_eq!(c.raw_slide(), -1);

    c.remove(0).expect("remove");
    assert_eq!(c.raw_slide(), 3);
    assert_eq!(c.items()[3], Slide(4));
    assert!(!c.has_pending_frames());
}

#[test]
fn remove_with_returns_item_and_calls_back() {
    let (mut c, _) = carousel(3, CarouselConfig::default()).expect("carousel");
    let mut seen = None;
    let removed = c
        .remove_with(1, |info| seen = Some(info.item_count))
        .expect("remove");
    assert_eq!(removed, Slide(1));
    assert_eq!(seen, Some(2));
}

// ---------------------------------------------------------------------------
// Resize
// ---------------------------------------------------------------------------

#[test]
fn resize_reresolves_per_page_and_clamps() {
    let surface = RecordingSurface::with_slides(5).widths(300.0, 500);
    let config = CarouselConfig::default().per_page(Breakpoints::new().with(800, 3));
    let mut c = glide::Carousel::new(surface, config, glide::CarouselHooks::new())
        .expect("carousel");
    assert_eq!(c.per_page(), 1);
    c.go_to(4);

    c.surface_mut().set_widths(900.0, 1024);
    c.handle_input(InputEvent::Resize);

    assert_eq!(c.per_page(), 3);
    assert_eq!(c.current_slide(), 2);
    assert_eq!(c.container_width(), 900.0);
    assert_eq!(c.surface().offset(), -600.0);
    assert!(c.surface().track().iter().all(|s| s.width_percent == 20.0));
}

#[test]
fn resize_does_not_fire_change() {
    let (mut c, log) = carousel(5, CarouselConfig::default()).expect("carousel");
    c.go_to(4);
    log.clear();
    c.surface_mut().set_widths(600.0, 1024);
    c.resize();
    assert!(log.changes().is_empty());
    assert_eq!(c.surface().offset(), -2400.0);
}

#[test]
fn resize_with_unchanged_widths_keeps_position() {
    let (mut c, _) = carousel(2, CarouselConfig::default()).expect("carousel");
    c.go_to(1);
    c.resize();
    assert_eq!(c.current_slide(), 1);
}

#[test]
fn resize_with_reports_new_page_size() {
    let surface = RecordingSurface::with_slides(6).widths(300.0, 500);
    let config = CarouselConfig::default().per_page(Breakpoints::new().with(768, 2));
    let mut c = glide::Carousel::new(surface, config, glide::CarouselHooks::new())
        .expect("carousel");
    c.surface_mut().set_widths(300.0, 800);
    let mut seen = 0;
    c.resize_with(|info| seen = info.per_page);
    assert_eq!(seen, 2);
}

// ---------------------------------------------------------------------------
// Destroy
// ---------------------------------------------------------------------------

#[test]
fn destroy_detaches_and_restores() {
    let (mut c, _) = carousel(3, CarouselConfig::default().looping(true)).expect("carousel");
    assert_eq!(
        c.surface().live_listeners().len(),
        1 + ListenerKind::POINTER.len()
    );
    c.next(1);

    let surface = c.destroy(true);
    assert!(surface.live_listeners().is_empty());
    assert_eq!(surface.children_now(), slides(&[0, 1, 2]).as_slice());
    assert!(surface.track().is_empty());
    assert_eq!(surface.cursor(), Some(Cursor::Auto));
    let unlistens = surface
        .ops()
        .iter()
        .filter(|op| matches!(op, SurfaceOp::Unlisten(_)))
        .count();
    assert_eq!(unlistens, 9);
}

#[test]
fn destroy_without_restore_leaves_markup() {
    let (c, _) = carousel(3, CarouselConfig::default()).expect("carousel");
    let surface = c.destroy(false);
    assert!(!surface.ops().iter().any(|op| matches!(op, SurfaceOp::Restore(_))));
    assert_eq!(surface.track().len(), 3);
}

#[test]
fn destroy_of_non_draggable_removes_only_resize() {
    let (c, _) = carousel(3, CarouselConfig::default().draggable(false)).expect("carousel");
    assert_eq!(c.surface().live_listeners(), vec![ListenerKind::Resize]);
    let surface = c.destroy(false);
    assert!(surface.live_listeners().is_empty());
}

#[test]
fn destroy_with_runs_callback() {
    let (c, _) = carousel(3, CarouselConfig::default()).expect("carousel");
    let mut done = false;
    let _surface = c.destroy_with(true, || done = true);
    assert!(done);
}
