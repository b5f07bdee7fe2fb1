//! Cancellable fixed-interval polling.
//!
//! Used in lieu of a push channel for notification freshness: the owner
//! keeps the [`PollHandle`] alive for as long as it wants the repeat to
//! fire and drops it on teardown (components do this via `on_cleanup`).
//! Cancellation stops future ticks; an already in-flight request is allowed
//! to finish and its result is simply dropped with the owning signal.

pub struct PollHandle {
    #[cfg(feature = "csr")]
    _interval: Option<gloo_timers::callback::Interval>,
}

/// Schedule `tick` every `millis`. The first invocation is up to the
/// caller (the notification bells fetch once immediately, then poll).
pub fn start<F: FnMut() + 'static>(millis: u32, tick: F) -> PollHandle {
    #[cfg(feature = "csr")]
    {
        PollHandle {
            _interval: Some(gloo_timers::callback::Interval::new(millis, tick)),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (millis, tick);
        PollHandle {}
    }
}
