use crate::{TickClock, TickDrv, TickTimer};

const MICROS_PER_SECOND: u32 = 1_000_000;

/// Runtime adjustment of the tick period, e.g. for an `adjtime` service.
///
/// Adjustments never restart the timer. The period currently counting down
/// completes as programmed and the new period takes effect at the next expiry.
pub trait PeriodAdjust {
    /// Lengthen (positive) or shorten (negative) the tick period by `delta_us` microseconds
    /// relative to the nominal period. A `delta_us` of zero restores the nominal period.
    ///
    /// A period that does not fit the reload register is silently clamped to the nearest
    /// value that does.
    fn adjust_period(&self, delta_us: i64);

    /// Get the currently programmed tick period in microseconds.
    fn period(&self) -> u64;
}

impl<C, Timer, A> PeriodAdjust for TickDrv<C, Timer, A>
where
    C: TickClock,
    Timer: TickTimer<A>,
    A: Send + Sync + 'static,
{
    fn adjust_period(&self, delta_us: i64) {
        let candidate = if delta_us == 0 {
            self.base_reload as i64
        } else {
            (self.base_reload as i64).saturating_add(delta_ticks::<C>(delta_us))
        };

        let written = self.reg.write(candidate);
        log::debug!(
            "tick: period adjusted by {} us, reload {}{}",
            delta_us,
            written.reload,
            if written.clamped { " (clamped)" } else { "" }
        );
    }

    fn period(&self) -> u64 {
        let cycles = self.reg.read() as u64 + 1;
        match ticks_per_us::<C>() {
            0 => cycles * MICROS_PER_SECOND as u64 / C::FREQ as u64,
            per_us => cycles / per_us as u64,
        }
    }
}

fn ticks_per_us<C: TickClock>() -> u32 {
    C::FREQ / MICROS_PER_SECOND
}

/// Convert a period change in microseconds to a reload change.
fn delta_ticks<C: TickClock>(delta_us: i64) -> i64 {
    match ticks_per_us::<C>() {
        // The clock is slower than 1 MHz, so a single tick spans more than a microsecond.
        // Round to the nearest tick instead of dropping one.
        0 => {
            let scaled = (C::FREQ as i64).saturating_mul(delta_us);
            let half = MICROS_PER_SECOND as i64 / 2 * scaled.signum();
            scaled.saturating_add(half) / MICROS_PER_SECOND as i64
        }
        per_us => (per_us as i64).saturating_mul(delta_us).saturating_sub(1),
    }
}
