//! Integration test: arena lifetime coupling through bindings.
//!
//! Verifies the ownership chain binding → arena binding → fusion group:
//! record memory is released exactly when the last host reference into
//! its group drops, and never earlier — including across fused arenas
//! and module teardown.

use std::cell::Cell;
use std::rc::Rc;

use tether_bridge::{ArenaBinding, ModuleState, RecordBinding};

// ── Drop-observable record type ──────────────────────────────────────

/// A record whose drop flips a shared flag, so tests can observe the
/// moment arena memory is actually released.
struct Tracked {
    payload: u64,
    alive: Rc<Cell<bool>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

fn tracked(payload: u64) -> (Tracked, Rc<Cell<bool>>) {
    let alive = Rc::new(Cell::new(true));
    (
        Tracked {
            payload,
            alive: Rc::clone(&alive),
        },
        alive,
    )
}

// ── Scenarios ────────────────────────────────────────────────────────

#[test]
fn record_binding_keeps_the_arena_alive() {
    let state = ModuleState::new();
    let (record, alive) = tracked(5);

    let binding = {
        let pool = ArenaBinding::new();
        let ptr = pool.native().alloc(record).unwrap();
        RecordBinding::bind(&state, ptr, &pool).unwrap()
        // The pool's own Rc drops here; the binding's counted reference
        // must keep the arena alive on its own.
    };

    assert!(alive.get());
    assert_eq!(binding.record().payload, 5);

    drop(binding);
    assert!(!alive.get());
}

#[test]
fn sibling_bindings_share_the_arena_hold() {
    let state = ModuleState::new();
    let pool = ArenaBinding::new();
    let (record_a, alive_a) = tracked(1);
    let (record_b, _alive_b) = tracked(2);
    let ptr_a = pool.native().alloc(record_a).unwrap();
    let ptr_b = pool.native().alloc(record_b).unwrap();

    let bind_a = RecordBinding::bind(&state, ptr_a, &pool).unwrap();
    let bind_b = RecordBinding::bind(&state, ptr_b, &pool).unwrap();
    drop(pool);

    // Dropping one binding must not free the arena while its sibling
    // still points into it.
    drop(bind_a);
    assert!(alive_a.get());
    assert_eq!(bind_b.record().payload, 2);

    drop(bind_b);
    assert!(!alive_a.get());
}

#[test]
fn fused_arenas_survive_through_either_binding() {
    let state = ModuleState::new();
    let pool_a = ArenaBinding::new();
    let pool_b = ArenaBinding::new();
    pool_a.fuse(&pool_b);

    let (record, alive) = tracked(9);
    let ptr = pool_a.native().alloc(record).unwrap();

    // The binding nominally holds pool_b, but the fuse makes pool_b's
    // group keep pool_a's records alive too.
    let binding = RecordBinding::bind(&state, ptr, &pool_b).unwrap();
    drop(pool_a);
    drop(pool_b);

    assert!(alive.get());
    assert_eq!(binding.record().payload, 9);

    drop(binding);
    assert!(!alive.get());
}

#[test]
fn module_teardown_before_binding_death_is_safe() {
    let state = ModuleState::new();
    let pool = ArenaBinding::new();
    let (record, alive) = tracked(3);
    let ptr = pool.native().alloc(record).unwrap();
    let binding = RecordBinding::bind(&state, ptr, &pool).unwrap();

    // Interpreter-shutdown ordering: the module state dies first. The
    // binding must still be able to deregister afterwards.
    drop(state);
    assert!(alive.get());
    assert_eq!(binding.record().payload, 3);
    drop(binding);
    assert!(!alive.get());
}

#[test]
fn scenario_full_lifecycle() {
    // Create arena A; allocate record R1 in A; bind twice; drop one
    // reference, then the other; the cache entry disappears and A's
    // memory is released with the last arena reference.
    let state = ModuleState::new();
    let pool = ArenaBinding::new();
    let (record, alive) = tracked(1);
    let r1 = pool.native().alloc(record).unwrap();

    let first = RecordBinding::bind(&state, r1, &pool).unwrap();
    let second = RecordBinding::bind(&state, r1, &pool).unwrap();
    assert!(Rc::ptr_eq(&first, &second));

    drop(first);
    assert!(state.cache().contains(r1.addr()));
    assert!(alive.get());

    drop(second);
    assert!(!state.cache().contains(r1.addr()));
    assert!(alive.get(), "arena still holds R1 through `pool`");

    drop(pool);
    assert!(!alive.get());
}
