use core::marker::PhantomData;

use crate::TickTimer;

/// The outcome of [`ReloadReg::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Written {
    /// The value that was stored in the register.
    pub reload: u32,
    /// Whether the requested value was outside the register range.
    pub clamped: bool,
}

/// The reload register of a tick timer.
///
/// This is the only path through which the current reload value is read or written,
/// and every write is clamped to `0..=Timer::MAX`.
pub struct ReloadReg<Timer: TickTimer<A>, A> {
    timer: Timer,
    adapter: PhantomData<A>,
}

impl<Timer: TickTimer<A>, A> ReloadReg<Timer, A> {
    pub fn new(timer: Timer) -> Self {
        Self {
            timer,
            adapter: PhantomData,
        }
    }

    /// Get the underlying timer.
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Read the currently programmed reload value.
    #[inline]
    pub fn read(&self) -> u32 {
        self.timer.reload()
    }

    /// Write `candidate` clamped to the register range.
    pub fn write(&self, candidate: i64) -> Written {
        let (reload, clamped) = Self::clamp(candidate);
        self.timer.set_reload(reload);
        Written { reload, clamped }
    }

    fn clamp(candidate: i64) -> (u32, bool) {
        if candidate < 0 {
            (0, true)
        } else if candidate > Timer::MAX as i64 {
            (Timer::MAX, true)
        } else {
            (candidate as u32, false)
        }
    }
}
