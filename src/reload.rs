use core::fmt;

/// The largest value the 24 bit reload register can hold.
pub const RELOAD_MAX: u32 = 0x00FF_FFFF;

/// The tick configuration cannot be programmed into the reload register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested tick frequency is zero.
    ZeroTickFrequency,
    /// The counter clock is slower than the requested tick frequency.
    ClockSlowerThanTick,
    /// The derived reload value does not fit the reload register.
    ReloadOutOfRange { reload: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTickFrequency => f.write_str("tick frequency is zero"),
            ConfigError::ClockSlowerThanTick => {
                f.write_str("clock frequency is below the tick frequency")
            }
            ConfigError::ReloadOutOfRange { reload } => write!(
                f,
                "reload value {:#x} exceeds the reload register maximum {:#x}",
                reload, RELOAD_MAX
            ),
        }
    }
}

/// Derive the countdown reload value for ticking at `tick_freq`
/// from a counter clocked at `clock_freq`.
///
/// The division truncates, so the resulting tick rate may be slightly above `tick_freq`.
pub const fn compute_base_reload(clock_freq: u32, tick_freq: u32) -> Result<u32, ConfigError> {
    if tick_freq == 0 {
        return Err(ConfigError::ZeroTickFrequency);
    }
    if clock_freq < tick_freq {
        return Err(ConfigError::ClockSlowerThanTick);
    }

    let reload = clock_freq / tick_freq - 1;
    if reload > RELOAD_MAX {
        Err(ConfigError::ReloadOutOfRange { reload })
    } else {
        Ok(reload)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn stm32_16mhz_at_100hz() {
        assert_eq!(Ok(159_999), compute_base_reload(16_000_000, 100));
    }

    #[test]
    fn truncates_remainder() {
        // 1000 / 3 = 333.33 cycles per tick.
        assert_eq!(Ok(332), compute_base_reload(1000, 3));
    }

    #[test]
    fn clock_equal_to_tick() {
        assert_eq!(Ok(0), compute_base_reload(100, 100));
    }

    #[test]
    fn largest_reload_fits() {
        assert_eq!(Ok(RELOAD_MAX), compute_base_reload(RELOAD_MAX + 1, 1));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            Err(ConfigError::ReloadOutOfRange { reload: 0x0100_0000 }),
            compute_base_reload(RELOAD_MAX + 2, 1)
        );
        assert_eq!(
            Err(ConfigError::ReloadOutOfRange { reload: 167_999_999 }),
            compute_base_reload(168_000_000, 1)
        );
    }

    #[test]
    fn invalid_frequencies() {
        assert_eq!(
            Err(ConfigError::ZeroTickFrequency),
            compute_base_reload(16_000_000, 0)
        );
        assert_eq!(
            Err(ConfigError::ClockSlowerThanTick),
            compute_base_reload(99, 100)
        );
    }
}
