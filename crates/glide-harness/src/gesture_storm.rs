#![forbid(unsafe_code)]

//! Scripted and generated pointer input.
//!
//! The `mouse_drag` / `touch_swipe` helpers build one clean gesture. The
//! storm generator produces long deterministic sequences for stress tests.
//!
//! # Patterns
//!
//! | Pattern | Description |
//! |---------|-------------|
//! | [`GesturePattern::DragFlood`] | Many mouse drags of random length and direction |
//! | [`GesturePattern::SwipeFlood`] | Many touch swipes, some of them vertical |
//! | [`GesturePattern::Jitter`] | Random phases, sources and coordinates |
//! | [`GesturePattern::ResizeStorm`] | Resize events interleaved with drags |

use glide_core::input::{InputEvent, PointerEvent, PointerPhase, TargetTag};

/// A mouse drag from `from` to `to` in `steps` moves, then release.
#[must_use]
pub fn mouse_drag(from: f64, to: f64, steps: usize) -> Vec<InputEvent> {
    mouse_drag_over(from, to, steps, TargetTag::Other)
}

/// [`mouse_drag`] starting over a specific element kind.
#[must_use]
pub fn mouse_drag_over(from: f64, to: f64, steps: usize, target: TargetTag) -> Vec<InputEvent> {
    let steps = steps.max(1);
    let mut events = Vec::with_capacity(steps + 2);
    events.push(PointerEvent::mouse(PointerPhase::Down, from).with_target(target).into());
    for i in 1..=steps {
        let x = from + (to - from) * (i as f64 / steps as f64);
        events.push(PointerEvent::mouse(PointerPhase::Move, x).with_target(target).into());
    }
    events.push(PointerEvent::mouse(PointerPhase::Up, to).with_target(target).into());
    events
}

/// A touch swipe between two points in `steps` moves, then touch end.
#[must_use]
pub fn touch_swipe(from: (f64, f64), to: (f64, f64), steps: usize) -> Vec<InputEvent> {
    let steps = steps.max(1);
    let mut events = Vec::with_capacity(steps + 2);
    events.push(PointerEvent::touch(PointerPhase::Down, from.0, from.1).into());
    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        let x = from.0 + (to.0 - from.0) * t;
        let y = from.1 + (to.1 - from.1) * t;
        events.push(PointerEvent::touch(PointerPhase::Move, x, y).into());
    }
    events.push(PointerEvent::touch(PointerPhase::Up, to.0, to.1).into());
    events
}

// ============================================================================
// Storm generation
// ============================================================================

/// Shape of a generated storm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePattern {
    DragFlood { gestures: usize },
    SwipeFlood { gestures: usize },
    Jitter { events: usize },
    ResizeStorm { gestures: usize },
}

impl GesturePattern {
    /// Name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DragFlood { .. } => "drag_flood",
            Self::SwipeFlood { .. } => "swipe_flood",
            Self::Jitter { .. } => "jitter",
            Self::ResizeStorm { .. } => "resize_storm",
        }
    }
}

/// Deterministic xorshift64.
struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform in `[-span, span]`, whole pixels.
    fn coord(&mut self, span: u32) -> f64 {
        let width = u64::from(span) * 2 + 1;
        (self.next() % width) as f64 - f64::from(span)
    }

    fn below(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        (self.next() % max as u64) as usize
    }
}

/// Generated events plus metadata.
#[derive(Debug, Clone)]
pub struct GestureStorm {
    pub events: Vec<InputEvent>,
    pub pattern_name: &'static str,
    pub seed: u64,
}

/// Generate a deterministic storm.
#[must_use]
pub fn generate_storm(pattern: GesturePattern, seed: u64) -> GestureStorm {
    let mut rng = Rng::new(seed);
    let events = match pattern {
        GesturePattern::DragFlood { gestures } => {
            let mut events = Vec::new();
            for _ in 0..gestures {
                let from = rng.coord(400);
                let to = from + rng.coord(900);
                events.extend(mouse_drag(from, to, 1 + rng.below(6)));
            }
            events
        }
        GesturePattern::SwipeFlood { gestures } => {
            let mut events = Vec::new();
            for _ in 0..gestures {
                let from = (rng.coord(400), rng.coord(400));
                let to = (from.0 + rng.coord(900), from.1 + rng.coord(300));
                events.extend(touch_swipe(from, to, 1 + rng.below(6)));
            }
            events
        }
        GesturePattern::Jitter { events: count } => (0..count)
            .map(|_| jitter_event(&mut rng))
            .collect(),
        GesturePattern::ResizeStorm { gestures } => {
            let mut events = Vec::new();
            for _ in 0..gestures {
                let from = rng.coord(400);
                let mut drag = mouse_drag(from, from + rng.coord(900), 3);
                let at = 1 + rng.below(drag.len() - 1);
                drag.insert(at, InputEvent::Resize);
                events.extend(drag);
            }
            events
        }
    };
    GestureStorm {
        events,
        pattern_name: pattern.name(),
        seed,
    }
}

fn jitter_event(rng: &mut Rng) -> InputEvent {
    let x = rng.coord(2000);
    let y = rng.coord(2000);
    let phase = match rng.below(4) {
        0 => PointerPhase::Down,
        1 => PointerPhase::Move,
        2 => PointerPhase::Up,
        _ => PointerPhase::Leave,
    };
    match rng.below(10) {
        0 => InputEvent::Click,
        1..=4 => PointerEvent::touch(phase, x, y).into(),
        _ => PointerEvent::mouse(phase, x).into(),
    }
}
