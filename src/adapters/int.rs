/// The platform interrupt dispatcher for the tick timer interrupt.
pub trait TickInt<A>: Send + 'static {
    /// Attach `handler` to the timer interrupt.
    /// The handler is invoked in interrupt context once for every timer expiry.
    fn attach<F: FnMut() + Send + 'static>(&self, handler: F);
}
