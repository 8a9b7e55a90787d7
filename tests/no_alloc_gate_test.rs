use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_pong::core::{run_frame, EventBatch, GameState, InputSource};
use tui_pong::input::KeyReleaseTracker;
use tui_pong::term::{Canvas, Viewport};
use tui_pong::types::{Extent, InputEvent, Key};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

/// Cycles through paddle keys; never closes.
struct Drummer {
    frame: u32,
}

impl InputSource for Drummer {
    fn poll_events(&mut self, out: &mut EventBatch) -> anyhow::Result<()> {
        self.frame += 1;
        let key = match self.frame % 4 {
            0 => Key::LeftUp,
            1 => Key::LeftDown,
            2 => Key::RightUp,
            _ => Key::RightDown,
        };
        out.push(InputEvent::KeyDown(key));
        if self.frame % 7 == 0 {
            out.push(InputEvent::KeyUp(key));
        }
        Ok(())
    }
}

#[test]
fn simulation_does_not_allocate() {
    let mut gs = GameState::default();

    // Warm-up.
    let _ = gs.tick();

    let allocs = with_alloc_counting(|| {
        // Long enough to finish the idle match and keep ticking a frozen one.
        for _ in 0..3000 {
            let _ = gs.tick();
        }
        gs.handle_event(InputEvent::KeyDown(Key::Restart));
        for _ in 0..500 {
            gs.handle_event(InputEvent::KeyDown(Key::LeftUp));
            let _ = gs.tick();
            gs.handle_event(InputEvent::KeyUp(Key::LeftUp));
        }
    });

    assert!(gs.match_id() == 1);
    assert!(allocs == 0);
}

#[test]
fn frames_drawn_to_a_canvas_do_not_allocate() {
    let mut gs = GameState::default();
    let mut canvas = Canvas::offscreen(Extent::default(), Viewport::new(120, 40));
    let mut input = Drummer { frame: 0 };
    let mut events = EventBatch::new();

    // Warm-up.
    let _ = run_frame(&mut gs, &mut canvas, &mut input, &mut events);

    let mut ok = true;
    let allocs = with_alloc_counting(|| {
        for _ in 0..500 {
            ok &= run_frame(&mut gs, &mut canvas, &mut input, &mut events).is_ok();
        }
    });

    assert!(ok);
    assert!(allocs == 0);
}

#[test]
fn key_release_tracking_does_not_allocate() {
    let mut tracker = KeyReleaseTracker::new(false).with_timeout_ms(50);
    let mut out = EventBatch::new();

    let allocs = with_alloc_counting(|| {
        for now in 0..1000u64 {
            out.clear();
            if now % 3 == 0 {
                let _ = tracker.observe(InputEvent::KeyDown(Key::RightUp), now);
            }
            if now % 200 == 0 {
                let _ = tracker.observe(InputEvent::KeyDown(Key::LeftDown), now);
            }
            tracker.expire(now, &mut out);
        }
    });

    assert!(allocs == 0);
}
