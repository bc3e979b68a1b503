#![no_main]

use arbitrary::Arbitrary;
use glide_core::config::CarouselConfig;
use glide_core::input::{InputEvent, PointerEvent, PointerPhase, PointerSource, TargetTag};
use glide_harness::carousel;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzEvent {
    Pointer {
        touch: bool,
        phase: u8,
        x: i16,
        y: i16,
        anchor: bool,
    },
    Click,
    Resize,
}

#[derive(Debug, Arbitrary)]
struct Input {
    items: u8,
    per_page: u8,
    looping: bool,
    rtl: bool,
    multiple_drag: bool,
    threshold: u8,
    events: Vec<FuzzEvent>,
}

fn to_event(event: &FuzzEvent) -> InputEvent {
    match *event {
        FuzzEvent::Click => InputEvent::Click,
        FuzzEvent::Resize => InputEvent::Resize,
        FuzzEvent::Pointer {
            touch,
            phase,
            x,
            y,
            anchor,
        } => {
            let source = if touch {
                PointerSource::Touch
            } else {
                PointerSource::Mouse
            };
            let phase = match phase % 4 {
                0 => PointerPhase::Down,
                1 => PointerPhase::Move,
                2 => PointerPhase::Up,
                _ => PointerPhase::Leave,
            };
            let target = if anchor {
                TargetTag::Anchor
            } else {
                TargetTag::Other
            };
            PointerEvent::new(source, phase, f64::from(x), f64::from(y))
                .with_target(target)
                .into()
        }
    }
}

fuzz_target!(|input: Input| {
    // Arbitrary pointer streams must never panic or push the index out of range.
    let config = CarouselConfig::default()
        .per_page(usize::from(input.per_page % 5) + 1)
        .looping(input.looping)
        .rtl(input.rtl)
        .multiple_drag(input.multiple_drag)
        .threshold(u32::from(input.threshold));
    let Ok((mut c, _)) = carousel(u32::from(input.items % 16) + 1, config) else {
        return;
    };

    for event in input.events.iter().take(512) {
        c.handle_input(to_event(event));
        c.on_animation_frame();

        let n = c.item_count();
        assert!(c.current_slide() < n);
        if !input.looping {
            let upper = (n as isize - c.per_page() as isize).max(0);
            assert!((0..=upper).contains(&c.raw_slide()));
        }
    }

    let surface = c.destroy(true);
    assert!(surface.live_listeners().is_empty());
});
