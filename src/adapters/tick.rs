use crate::reload;

/// The clock feeding the tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource {
    /// The core clock (HCLK).
    Hclk,
    /// The core clock divided by 8.
    ///
    /// Accepted for configuration compatibility but currently inert:
    /// the counter comes up clocked from HCLK and keeps running from it.
    HclkDiv8,
}

pub trait TickClock: Send + Sync + 'static {
    /// The core clock frequency in Hz.
    const HCLK: u32;

    /// The number of scheduler ticks per second.
    const TICK_FREQ: u32;

    /// The requested clock source.
    const SOURCE: ClockSource = ClockSource::Hclk;

    /// The frequency actually clocking the counter.
    /// This is always `HCLK` as the source selection has no effect.
    const FREQ: u32 = Self::HCLK;
}

/// Fail the build if the reload value derived from a [`TickClock`]
/// does not fit the 24 bit reload register.
///
/// ```ignore
/// struct SysClock;
///
/// impl TickClock for SysClock {
///     const HCLK: u32 = 168_000_000;
///     const TICK_FREQ: u32 = 100;
/// }
///
/// assert_tick_clock!(SysClock);
/// ```
#[macro_export]
macro_rules! assert_tick_clock {
    ($clock:ty) => {
        const _: () = match $crate::compute_base_reload(
            <$clock as $crate::TickClock>::FREQ,
            <$clock as $crate::TickClock>::TICK_FREQ,
        ) {
            Ok(_) => (),
            Err(_) => panic!("tick reload value exceeds the range of the reload register"),
        };
    };
}

/// Get the base reload value for `C` at compile time.
pub const fn base_reload<C: TickClock>() -> Result<u32, reload::ConfigError> {
    reload::compute_base_reload(C::FREQ, C::TICK_FREQ)
}
