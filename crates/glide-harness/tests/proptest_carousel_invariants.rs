//! Property tests over whole carousels driven by random operations.
//!
//! 1. Without looping, the index stays inside `[0, max(0, N - perPage)]`
//! 2. With looping, the reported slide stays inside `[0, N)`
//! 3. After clean gestures settle, the frame rests at the current offset
//! 4. `on_change` only fires when the reported position moved
//! 5. Destroy releases every listener it registered

use glide::carousel::Carousel;
use glide_core::config::CarouselConfig;
use glide_harness::{
    GesturePattern, RecordingSurface, Slide, carousel, feed, generate_storm, settle,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Next(usize),
    Prev(usize),
    GoTo(isize),
    Insert(usize),
    Remove(usize),
    Resize(u32, u32),
    Frame,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..4).prop_map(Op::Next),
        (1usize..4).prop_map(Op::Prev),
        (-12isize..12).prop_map(Op::GoTo),
        (0usize..12).prop_map(Op::Insert),
        (0usize..12).prop_map(Op::Remove),
        (100u32..1200, 300u32..1600).prop_map(|(w, v)| Op::Resize(w, v)),
        Just(Op::Frame),
    ]
}

fn config_strategy() -> impl Strategy<Value = CarouselConfig> {
    (1usize..4, any::<bool>(), any::<bool>(), -6isize..6).prop_map(
        |(per_page, looping, rtl, start)| {
            CarouselConfig::default()
                .per_page(per_page)
                .looping(looping)
                .rtl(rtl)
                .start_index(start)
        },
    )
}

fn apply(c: &mut Carousel<RecordingSurface>, op: &Op, next_id: &mut u32) {
    match *op {
        Op::Next(n) => {
            c.next(n);
        }
        Op::Prev(n) => {
            c.prev(n);
        }
        Op::GoTo(i) => {
            c.go_to(i);
        }
        Op::Insert(i) => {
            *next_id += 1;
            let _ = c.insert(Slide(1000 + *next_id), i);
        }
        Op::Remove(i) => {
            let _ = c.remove(i);
        }
        Op::Resize(w, v) => {
            c.surface_mut().set_widths(f64::from(w), v);
            c.resize();
        }
        Op::Frame => {
            c.on_animation_frame();
        }
    }
}

fn assert_in_range(c: &Carousel<RecordingSurface>) -> Result<(), TestCaseError> {
    let n = c.item_count();
    if c.config().looping {
        prop_assert!(n == 0 || c.current_slide() < n);
    } else {
        let upper = (n as isize - c.per_page() as isize).max(0);
        prop_assert!((0..=upper).contains(&c.raw_slide()));
    }
    Ok(())
}

proptest! {
    #[test]
    fn operations_keep_index_in_range(
        count in 1u32..10,
        config in config_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..60),
    ) {
        let (mut c, _) = carousel(count, config).expect("carousel");
        let mut next_id = 0;
        assert_in_range(&c)?;
        for op in &ops {
            apply(&mut c, op, &mut next_id);
            assert_in_range(&c)?;
        }
    }

    #[test]
    fn settled_frame_rests_on_current_slide(
        count in 1u32..10,
        config in config_strategy(),
        swipes in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let (mut c, _) = carousel(count, config).expect("carousel");
        let pattern = if swipes {
            GesturePattern::SwipeFlood { gestures: 12 }
        } else {
            GesturePattern::DragFlood { gestures: 12 }
        };
        let storm = generate_storm(pattern, seed);
        feed(&mut c, storm.events);
        settle(&mut c);

        prop_assert!(!c.is_dragging());
        let expected = c.layout().offset_for(c.raw_slide());
        prop_assert!((c.surface().offset() - expected).abs() < 1e-6);
        assert_in_range(&c)?;
    }

    #[test]
    fn jitter_never_escapes_range(
        count in 1u32..8,
        config in config_strategy(),
        seed in any::<u64>(),
    ) {
        let (mut c, _) = carousel(count, config).expect("carousel");
        let storm = generate_storm(GesturePattern::Jitter { events: 300 }, seed);
        for event in storm.events {
            c.handle_input(event);
            assert_in_range(&c)?;
        }
    }

    #[test]
    fn changes_report_real_moves(
        count in 2u32..8,
        config in config_strategy(),
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let (mut c, log) = carousel(count, config).expect("carousel");
        let mut next_id = 0;
        for op in &ops {
            apply(&mut c, op, &mut next_id);
        }
        for change in log.changes() {
            prop_assert_ne!(change.previous, change.current.current_slide);
        }
    }

    #[test]
    fn destroy_releases_every_listener(
        count in 1u32..6,
        draggable in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let (mut c, _) =
            carousel(count, CarouselConfig::default().draggable(draggable)).expect("carousel");
        let storm = generate_storm(GesturePattern::ResizeStorm { gestures: 4 }, seed);
        feed(&mut c, storm.events);
        let surface = c.destroy(true);
        prop_assert!(surface.live_listeners().is_empty());
        prop_assert_eq!(surface.children_now().len(), count as usize);
    }
}
