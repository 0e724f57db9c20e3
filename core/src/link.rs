//! Timer-gated connection state machine
//!
//! Tracks a single outbound TCP link as one of three states and enforces a
//! fixed spacing between connection attempts. Timekeeping is the caller's
//! concern: every operation that needs "now" takes a millisecond timestamp
//! from whatever monotonic clock the platform provides.

/// State of the outbound TCP link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// No connection; attempts are gated by the reconnect interval
    Disconnected,
    /// A connection attempt has started and has not yet resolved
    Connecting,
    /// The connection is established
    Connected,
}

/// Reconnect gate: link state plus the attempt timer
///
/// Attempts are spaced attempt-start to attempt-start: a failed connect does
/// not reset the timer to the moment of failure, so a server that drops the
/// handshake late cannot stretch the effective retry period.
#[derive(Debug, Clone, Copy)]
pub struct ReconnectGate {
    state: LinkState,
    last_attempt_ms: Option<u64>,
    interval_ms: u64,
}

impl ReconnectGate {
    /// Create a gate enforcing `interval_ms` between connection attempts
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            state: LinkState::Disconnected,
            last_attempt_ms: None,
            interval_ms,
        }
    }

    /// Current link state
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Milliseconds to wait before the next attempt is permitted
    ///
    /// Returns `None` when an attempt is due now. The very first attempt is
    /// always due. Only meaningful while `Disconnected`; in other states an
    /// attempt is never pending, so `None` is returned.
    pub fn delay_before_attempt(&self, now_ms: u64) -> Option<u64> {
        if self.state != LinkState::Disconnected {
            return None;
        }
        let last = self.last_attempt_ms?;
        // Wrapping subtraction so a tick-counter wrap cannot stall reconnects.
        let elapsed = now_ms.wrapping_sub(last);
        if elapsed >= self.interval_ms {
            None
        } else {
            Some(self.interval_ms - elapsed)
        }
    }

    /// Record an attempt starting now and transition to `Connecting`
    pub fn attempt_started(&mut self, now_ms: u64) {
        self.last_attempt_ms = Some(now_ms);
        self.state = LinkState::Connecting;
    }

    /// The attempt succeeded
    pub fn link_up(&mut self) {
        self.state = LinkState::Connected;
    }

    /// The connection dropped or the attempt failed
    ///
    /// Does not touch the attempt timestamp; the next attempt is measured
    /// from the start of the previous one.
    pub fn link_down(&mut self) {
        self.state = LinkState::Disconnected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: u64 = 5000;

    #[test]
    fn first_attempt_is_immediate() {
        let gate = ReconnectGate::new(INTERVAL);
        assert_eq!(gate.state(), LinkState::Disconnected);
        assert_eq!(gate.delay_before_attempt(0), None);
        assert_eq!(gate.delay_before_attempt(123_456), None);
    }

    #[test]
    fn attempts_are_spaced_by_the_interval() {
        let mut gate = ReconnectGate::new(INTERVAL);
        gate.attempt_started(1000);
        gate.link_down();

        assert_eq!(gate.delay_before_attempt(1000), Some(5000));
        assert_eq!(gate.delay_before_attempt(3000), Some(3000));
        assert_eq!(gate.delay_before_attempt(5999), Some(1));
        assert_eq!(gate.delay_before_attempt(6000), None);
        assert_eq!(gate.delay_before_attempt(9000), None);
    }

    #[test]
    fn state_transitions() {
        let mut gate = ReconnectGate::new(INTERVAL);
        gate.attempt_started(0);
        assert_eq!(gate.state(), LinkState::Connecting);
        gate.link_up();
        assert_eq!(gate.state(), LinkState::Connected);
        gate.link_down();
        assert_eq!(gate.state(), LinkState::Disconnected);
    }

    #[test]
    fn connect_failure_keeps_the_timer_running() {
        // Connecting -> Disconnected without link_up: the interval is still
        // measured from the start of the failed attempt.
        let mut gate = ReconnectGate::new(INTERVAL);
        gate.attempt_started(2000);
        gate.link_down();
        assert_eq!(gate.delay_before_attempt(4000), Some(3000));
        assert_eq!(gate.delay_before_attempt(7000), None);
    }

    #[test]
    fn no_delay_reported_while_connected() {
        let mut gate = ReconnectGate::new(INTERVAL);
        gate.attempt_started(0);
        gate.link_up();
        assert_eq!(gate.delay_before_attempt(1), None);
    }

    #[test]
    fn clock_wrap_does_not_stall_reconnects() {
        let mut gate = ReconnectGate::new(INTERVAL);
        gate.attempt_started(u64::MAX - 999);
        gate.link_down();
        // 1000 ms elapsed across the wrap boundary
        assert_eq!(gate.delay_before_attempt(0), Some(4000));
        assert_eq!(gate.delay_before_attempt(4000), None);
    }
}
