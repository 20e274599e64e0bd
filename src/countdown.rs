use std::time::Duration;

use crate::error::GameError;

pub const DEFAULT_ROUND_SECS: u32 = 60;
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Remaining(u32),
    Expired,
}

/// Recurring interval handle. Owned by the countdown; dropping it cancels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    carried: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            carried: Duration::ZERO,
        }
    }

    /// Feeds wall-clock time in and returns how many whole periods fired.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }

        self.carried += elapsed;
        let mut fired = 0;
        while self.carried >= self.period {
            self.carried -= self.period;
            fired += 1;
        }
        fired
    }
}

/// One-shot round clock: Idle -> Running -> Expired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    round_secs: u32,
    time_left: u32,
    state: TimerState,
    interval: Option<Interval>,
}

impl Countdown {
    pub fn new(round_secs: u32) -> Self {
        let round_secs = round_secs.max(1);
        Self {
            round_secs,
            time_left: round_secs,
            state: TimerState::Idle,
            interval: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn round_secs(&self) -> u32 {
        self.round_secs
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn has_interval(&self) -> bool {
        self.interval.is_some()
    }

    pub fn start(&mut self) -> Result<u32, GameError> {
        if self.state != TimerState::Idle {
            return Err(GameError::AlreadyStarted);
        }

        self.time_left = self.round_secs;
        self.state = TimerState::Running;
        self.interval = Some(Interval::new(TICK_PERIOD));
        Ok(self.time_left)
    }

    /// A single one-second tick. Does nothing unless running.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.state != TimerState::Running {
            return None;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.cancel();
            self.state = TimerState::Expired;
            return Some(TickOutcome::Expired);
        }

        Some(TickOutcome::Remaining(self.time_left))
    }

    /// Runs every tick that fell due within `elapsed`, stopping at expiry.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TickOutcome> {
        let fired = match self.interval.as_mut() {
            Some(interval) => interval.advance(elapsed),
            None => return Vec::new(),
        };

        let mut outcomes = Vec::with_capacity(fired as usize);
        for _ in 0..fired {
            match self.tick() {
                Some(TickOutcome::Expired) => {
                    outcomes.push(TickOutcome::Expired);
                    break;
                }
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }
        outcomes
    }

    fn cancel(&mut self) {
        self.interval = None;
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_ROUND_SECS)
    }
}
