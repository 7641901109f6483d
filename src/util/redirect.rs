//! Cancellable delayed navigation.
//!
//! Auth forms show their success banner for a moment before leaving the
//! page. The pending navigation is held in a guard value: dropping it
//! (page unmount, or a newer submission replacing it) cancels the timer,
//! so a stale redirect can never fire after the user has moved on.

/// Milliseconds between a successful submission and the follow-up
/// navigation. Matches how long the success banner stays readable.
pub const REDIRECT_DELAY_MS: u32 = 2_000;

/// Guard for one scheduled navigation. The action runs after the delay
/// unless the guard is dropped first.
#[cfg(feature = "hydrate")]
#[must_use = "dropping the guard cancels the scheduled navigation"]
pub struct ScheduledRedirect {
    _timer: gloo_timers::callback::Timeout,
}

#[cfg(feature = "hydrate")]
impl ScheduledRedirect {
    /// Schedules `action` to run after `delay_ms`.
    pub fn after(delay_ms: u32, action: impl FnOnce() + 'static) -> Self {
        Self { _timer: gloo_timers::callback::Timeout::new(delay_ms, action) }
    }
}

/// Guard for one scheduled navigation. Inert outside the browser, where
/// nothing ever schedules one.
#[cfg(not(feature = "hydrate"))]
#[must_use = "dropping the guard cancels the scheduled navigation"]
pub struct ScheduledRedirect;

#[cfg(not(feature = "hydrate"))]
impl ScheduledRedirect {
    /// Schedules nothing; the action is discarded.
    pub fn after(_delay_ms: u32, _action: impl FnOnce() + 'static) -> Self {
        Self
    }
}
