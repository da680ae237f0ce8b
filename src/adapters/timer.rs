/// The hardware countdown timer driving the scheduler tick.
///
/// The timer counts down from its reload value and, on expiry,
/// reloads the value by itself and keeps counting.
pub trait TickTimer<A>: Send + Sync + 'static {
    /// The maximum reload value.
    const MAX: u32;

    /// Set the priority of the timer interrupt.
    fn set_priority(&self, priority: u8);

    /// Get the currently programmed reload value.
    fn reload(&self) -> u32;

    /// Program the reload value used from the next expiry.
    /// `reload` must not exceed `MAX`.
    fn set_reload(&self, reload: u32);

    /// Select the clock source and start counting.
    fn start(&self);

    /// Enable the expiry interrupt.
    fn int_enable(&self);
}
