use std::fmt::Debug;
use std::fmt::Error;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Deref};
use std::time::Duration;
use std::time::Instant;

#[derive(Clone, Copy, Debug)]
pub struct GsTimer {
    instant: Instant,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GsDuration {
    duration: Duration,
}

impl GsTimer {
    pub fn now() -> Self {
        Self { instant: Instant::now() }
    }

    pub fn elapsed(&self) -> GsDuration {
        GsDuration { duration: self.instant.elapsed() }
    }
}

impl GsDuration {
    pub fn from_duration(duration: Duration) -> Self {
        Self { duration }
    }

    /// Elapsed time as fractional seconds, never negative.
    pub fn to_seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn to_millis_string(&self) -> String {
        const MICRO_PER_MILLI: u128 = 1_000;
        format!(
            "{}.{:03} ms",
            self.duration.as_micros() / MICRO_PER_MILLI,
            self.duration.as_micros() % MICRO_PER_MILLI
        )
    }

    pub fn to_seconds_string(&self) -> String {
        format!("{}.{:06} s", self.duration.as_secs(), self.duration.subsec_micros())
    }

    /// Seconds with millisecond precision and no unit, as used in report tables.
    pub fn to_report_string(&self) -> String {
        format!("{:.3}", self.to_seconds())
    }
}

impl Debug for GsDuration {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{:?}", self.duration)
    }
}

impl Deref for GsDuration {
    type Target = Duration;

    fn deref(&self) -> &Self::Target {
        &self.duration
    }
}

impl Add for GsDuration {
    type Output = GsDuration;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.duration += rhs.duration;
        self
    }
}

impl AddAssign for GsDuration {
    fn add_assign(&mut self, rhs: Self) {
        self.duration += rhs.duration;
    }
}
