use std::cell::Cell;
use std::time::Instant;

/// A source of milliseconds, abstracted so that everything depending on the
/// passage of time can be tested without sleeping.
pub trait Clock {
    /// Gets the number of milliseconds that have passed since some fixed but
    /// arbitrary origin.
    fn millis(&self) -> u64;
}

/// The [`Clock`] backed by the actual system time. Its origin is the moment
/// it was constructed.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// A [`Clock`] that returns a predetermined sequence of values, for use in
/// tests. Once the sequence runs out, it keeps returning the last value.
pub struct FakeClock {
    values: Vec<u64>,
    cursor: Cell<usize>,
}

impl FakeClock {
    /// Constructs a `FakeClock` that yields the given values in order. The
    /// sequence must not be empty.
    pub fn new(values: Vec<u64>) -> Self {
        assert!(!values.is_empty(), "a FakeClock needs at least 1 value");
        Self {
            values,
            cursor: Cell::new(0),
        }
    }
}

impl Clock for FakeClock {
    fn millis(&self) -> u64 {
        let index = self.cursor.get();
        if index + 1 < self.values.len() {
            self.cursor.set(index + 1);
        }
        self.values[index]
    }
}

/// Something that runs to completion over a period of time after being
/// started, like the countdown of a timer.
pub trait Elapsable {
    /// Gets the completed fraction of this process, in the range 0.0 to 1.0.
    /// Before [`start`](Elapsable::start) has been called, this is 0.0.
    fn elapsed_percent(&self) -> f64;

    /// Starts the process. Calling this again restarts it.
    fn start(&self);
}

/// An [`Elapsable`] that completes a fixed number of milliseconds after it
/// was started.
pub struct Expiration {
    clock: Box<dyn Clock>,
    to_elapse: u64,
    beginning: Cell<u64>,
    started: Cell<bool>,
}

impl Expiration {
    /// Constructs an `Expiration` on the system clock that completes the
    /// given number of milliseconds after [`start`](Elapsable::start).
    pub fn new(to_elapse: u64) -> Self {
        Self::with_clock(SystemClock::new(), to_elapse)
    }

    /// Constructs an `Expiration` on the given clock, mostly for tests.
    pub fn with_clock(clock: impl Clock + 'static, to_elapse: u64) -> Self {
        Self {
            clock: Box::new(clock),
            to_elapse,
            beginning: Cell::new(0),
            started: Cell::new(false),
        }
    }
}

impl Elapsable for Expiration {
    fn elapsed_percent(&self) -> f64 {
        if !self.started.get() {
            return 0.0;
        }
        let passed = self.clock.millis().saturating_sub(self.beginning.get());
        let fraction = passed as f64 / self.to_elapse as f64;
        fraction.min(1.0)
    }

    fn start(&self) {
        self.beginning.set(self.clock.millis());
        self.started.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_clock_sticks_on_its_last_value() {
        let clock = FakeClock::new(vec![3, 8]);
        assert_eq!(3, clock.millis());
        assert_eq!(8, clock.millis());
        assert_eq!(8, clock.millis());
    }

    #[test]
    #[should_panic]
    fn test_fake_clock_rejects_empty_sequence() {
        FakeClock::new(vec![]);
    }

    #[test]
    fn test_expiration_is_zero_before_start() {
        let expiration = Expiration::with_clock(FakeClock::new(vec![0, 50]), 100);
        assert_eq!(0.0, expiration.elapsed_percent());
    }

    #[test]
    fn test_expiration_reports_the_elapsed_fraction() {
        let expiration = Expiration::with_clock(FakeClock::new(vec![0, 25, 50]), 100);
        expiration.start();
        assert_eq!(0.25, expiration.elapsed_percent());
        assert_eq!(0.5, expiration.elapsed_percent());
    }

    #[test]
    fn test_expiration_clamps_at_one() {
        let expiration = Expiration::with_clock(FakeClock::new(vec![0, 300]), 100);
        expiration.start();
        assert_eq!(1.0, expiration.elapsed_percent());
    }

    #[test]
    fn test_expiration_can_be_restarted() {
        let expiration = Expiration::with_clock(FakeClock::new(vec![0, 100, 100, 150]), 100);
        expiration.start();
        assert_eq!(1.0, expiration.elapsed_percent());
        expiration.start();
        assert_eq!(0.5, expiration.elapsed_percent());
    }
}
