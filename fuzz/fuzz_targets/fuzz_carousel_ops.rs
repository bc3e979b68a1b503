#![no_main]

use arbitrary::Arbitrary;
use glide_core::config::CarouselConfig;
use glide_harness::{Slide, carousel};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Next(u8),
    Prev(u8),
    GoTo(i8),
    Insert(u8),
    Remove(u8),
    Resize { container: u16, viewport: u16 },
    Frame,
}

#[derive(Debug, Arbitrary)]
struct Input {
    items: u8,
    per_page: u8,
    looping: bool,
    start: i8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    // Mutations and navigation in any order keep the carousel consistent.
    let config = CarouselConfig::default()
        .per_page(usize::from(input.per_page % 5) + 1)
        .looping(input.looping)
        .start_index(isize::from(input.start));
    let Ok((mut c, _)) = carousel(u32::from(input.items % 16) + 1, config) else {
        return;
    };

    let mut next_id = 10_000u32;
    for op in input.ops.iter().take(256) {
        match *op {
            Op::Next(n) => {
                c.next(usize::from(n % 8));
            }
            Op::Prev(n) => {
                c.prev(usize::from(n % 8));
            }
            Op::GoTo(i) => {
                c.go_to(isize::from(i));
            }
            Op::Insert(i) => {
                next_id += 1;
                let before = c.item_count();
                if c.insert(Slide(next_id), usize::from(i)).is_ok() {
                    assert_eq!(c.item_count(), before + 1);
                }
            }
            Op::Remove(i) => {
                let before = c.item_count();
                if c.remove(usize::from(i)).is_ok() {
                    assert_eq!(c.item_count(), before - 1);
                }
            }
            Op::Resize { container, viewport } => {
                c.surface_mut()
                    .set_widths(f64::from(container), u32::from(viewport));
                c.resize();
            }
            Op::Frame => {
                c.on_animation_frame();
            }
        }

        let n = c.item_count();
        assert!(n == 0 || c.current_slide() < n);
        assert_eq!(c.surface().track().len(), c.layout().plan().len());
    }
});
