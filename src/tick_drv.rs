use core::{
    fmt,
    marker::PhantomData,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::{
    compute_base_reload, ClockSource, ConfigError, ReloadReg, Scheduler, TickClock, TickInt,
    TickTimer,
};

/// The priority of the tick interrupt.
///
/// This is the middle of the 8 bit Cortex-M priority range.
pub const DEFAULT_PRIORITY: u8 = 0x80;

/// Error returned from the tick driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickError {
    /// The clock configuration cannot be programmed into the timer.
    Config(ConfigError),
    /// The tick timer is already armed.
    AlreadyArmed,
}

impl From<ConfigError> for TickError {
    fn from(err: ConfigError) -> Self {
        TickError::Config(err)
    }
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickError::Config(err) => write!(f, "invalid tick configuration: {}", err),
            TickError::AlreadyArmed => f.write_str("tick timer is already armed"),
        }
    }
}

/// The periodic scheduler tick.
pub struct TickDrv<C: TickClock, Timer: TickTimer<A>, A: Send + Sync> {
    clock: PhantomData<C>,
    pub(crate) reg: ReloadReg<Timer, A>,
    /// The reload value giving the nominal tick period.
    pub(crate) base_reload: u32,
    armed: AtomicBool,
}

impl<C, Timer, A> TickDrv<C, Timer, A>
where
    C: TickClock,
    Timer: TickTimer<A>,
    A: Send + Sync + 'static,
{
    /// Create a new tick driver.
    /// This fails if the clock cannot be ticked at the requested rate,
    /// and the timer is then left untouched.
    pub fn new(timer: Timer, _clock: C) -> Result<Self, TickError> {
        let base_reload = compute_base_reload(C::FREQ, C::TICK_FREQ)?;
        if base_reload > Timer::MAX {
            // The timer is narrower than the 24 bit reload register.
            return Err(ConfigError::ReloadOutOfRange {
                reload: base_reload,
            }
            .into());
        }

        log::info!(
            "tick: {} Hz from {} Hz clock, reload {}",
            C::TICK_FREQ,
            C::FREQ,
            base_reload
        );

        Ok(Self {
            clock: PhantomData,
            reg: ReloadReg::new(timer),
            base_reload,
            armed: AtomicBool::new(false),
        })
    }

    /// Arm the timer so that `scheduler` is notified on every tick.
    ///
    /// The timer is armed exactly once. Any later call returns [`TickError::AlreadyArmed`]
    /// and leaves the running timer as is.
    pub fn initialize<Int: TickInt<A>, S: Scheduler>(
        &self,
        timer_int: Int,
        scheduler: S,
    ) -> Result<(), TickError> {
        if self
            .armed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("tick: timer is already armed");
            return Err(TickError::AlreadyArmed);
        }

        if C::SOURCE != ClockSource::Hclk {
            log::warn!("tick: clock source {:?} is not supported, using HCLK", C::SOURCE);
        }

        let timer = self.reg.timer();
        timer.set_priority(DEFAULT_PRIORITY);
        self.reg.write(self.base_reload as i64);

        // The hardware reloads the counter by itself, so the handler only notifies the scheduler.
        timer_int.attach(move || scheduler.on_tick());

        timer.start();
        timer.int_enable();

        log::info!("tick: armed");
        Ok(())
    }

    /// Get whether the timer is armed.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::Acquire)
    }

    /// Get the reload value giving the nominal tick period.
    pub fn base_reload(&self) -> u32 {
        self.base_reload
    }

    /// Get the currently programmed reload value.
    pub fn reload(&self) -> u32 {
        self.reg.read()
    }
}
