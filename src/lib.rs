//! Periodic scheduler tick for Drone OS.
//!
//! A [`TickDrv`] derives the reload value of a countdown timer from a [`TickClock`],
//! arms the timer and notifies a [`Scheduler`] on every expiry. With the `adjtime`
//! feature the tick period can be lengthened or shortened at runtime through
//! [`PeriodAdjust`].
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod adapters;
#[cfg(feature = "adjtime")]
mod adjust;
pub mod drivers;
mod jiffies;
mod reg;
mod reload;
mod tick_drv;

#[cfg(feature = "adjtime")]
pub use self::adjust::PeriodAdjust;
pub use self::{
    adapters::int::TickInt,
    adapters::sched::Scheduler,
    adapters::tick::{base_reload, ClockSource, TickClock},
    adapters::timer::TickTimer,
    jiffies::Jiffies,
    reg::{ReloadReg, Written},
    reload::{compute_base_reload, ConfigError, RELOAD_MAX},
    tick_drv::{TickDrv, TickError, DEFAULT_PRIORITY},
};
