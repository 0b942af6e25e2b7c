//! Allocation gate: the engine's per-frame paths must stay allocation-free.
//! Pieces are Copy, cell lists live in fixed-capacity arrays, and snapshots
//! are plain arrays, so a regression here means a data structure changed.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use blockfall::core::GameState;
use blockfall::types::GameAction;

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

#[test]
fn engine_hot_paths_do_not_allocate() {
    // Setup outside counting so one-time allocations don't trip the gate.
    let mut game = GameState::new(1);

    // Warm-up.
    let _ = game.tick(16);
    let _ = game.apply_action(GameAction::MoveLeft);

    let allocs = with_alloc_counting(|| {
        for now_ms in (0..200u64).map(|i| i * 16) {
            let _ = game.tick(now_ms);
        }

        for _ in 0..50 {
            let _ = game.apply_action(GameAction::MoveLeft);
            let _ = game.apply_action(GameAction::MoveRight);
            let _ = game.apply_action(GameAction::RotateCw);
            let _ = game.apply_action(GameAction::SoftDrop);
        }

        // Hard drops exercise locking, line clears, and spawning.
        for _ in 0..25 {
            let _ = game.apply_action(GameAction::HardDrop);
            if game.is_game_over() {
                game.reset(0);
            }
        }

        // The driver takes a snapshot every frame.
        for _ in 0..100 {
            let _ = game.snapshot();
        }
    });

    assert_eq!(allocs, 0);
}
