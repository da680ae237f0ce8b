use std::{
    sync::{
        atomic::{AtomicBool, AtomicU32, AtomicU8, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use crate::{TickInt, TickTimer};

pub struct FakeAdapter;

/// Register file of a fake 24 bit countdown timer.
#[derive(Default)]
pub struct FakeRegs {
    pub load: AtomicU32,
    pub val: AtomicU32,
    pub priority: AtomicU8,
    pub running: AtomicBool,
    pub int_enabled: AtomicBool,
    /// The number of writes to the reload register.
    pub load_writes: AtomicUsize,
}

#[derive(Clone, Default)]
pub struct FakeTimer(pub Arc<FakeRegs>);

impl TickTimer<FakeAdapter> for FakeTimer {
    const MAX: u32 = 0xFFFFFF;

    fn set_priority(&self, priority: u8) {
        self.0.priority.store(priority, Ordering::Relaxed);
    }

    fn reload(&self) -> u32 {
        self.0.load.load(Ordering::Relaxed)
    }

    fn set_reload(&self, reload: u32) {
        assert!(reload <= Self::MAX);
        self.0.load.store(reload, Ordering::Relaxed);
        self.0.load_writes.fetch_add(1, Ordering::Relaxed);
    }

    fn start(&self) {
        self.0.running.store(true, Ordering::Relaxed);
    }

    fn int_enable(&self) {
        self.0.int_enabled.store(true, Ordering::Relaxed);
    }
}

type Handler = Box<dyn FnMut() + Send>;

/// A fake interrupt line holding the attached handlers.
#[derive(Clone, Default)]
pub struct FakeInt(pub Arc<Mutex<Vec<Handler>>>);

impl FakeInt {
    pub fn handlers(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    /// Run all attached handlers as if the interrupt fired.
    pub fn fire(&self) {
        for handler in self.0.lock().unwrap().iter_mut() {
            handler();
        }
    }
}

impl TickInt<FakeAdapter> for FakeInt {
    fn attach<F: FnMut() + Send + 'static>(&self, handler: F) {
        self.0.lock().unwrap().push(Box::new(handler));
    }
}

/// Clock the fake timer `cycles` times, firing the interrupt on every expiry.
/// Returns the cycle numbers (1-based, relative to this call) at which the interrupt fired.
///
/// Each cycle either decrements the counter, firing when it reaches zero,
/// or, when the counter already is zero, reloads it from the reload register.
/// A reload value of `n` thereby gives a period of `n + 1` cycles.
pub fn clock(timer: &FakeTimer, int: &FakeInt, cycles: u32) -> Vec<u32> {
    let regs = &timer.0;
    let mut fired = Vec::new();
    if !regs.running.load(Ordering::Relaxed) {
        return fired;
    }

    for cycle in 1..=cycles {
        let val = regs.val.load(Ordering::Relaxed);
        if val == 0 {
            regs.val.store(regs.load.load(Ordering::Relaxed), Ordering::Relaxed);
        } else {
            regs.val.store(val - 1, Ordering::Relaxed);
            if val == 1 {
                if regs.int_enabled.load(Ordering::Relaxed) {
                    int.fire();
                }
                fired.push(cycle);
            }
        }
    }

    fired
}
