use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};

// Board time is UTC+3 year-round, no daylight saving.
pub const UTC_OFFSET_MINUTES: i64 = 180;

#[derive(Debug, Clone, Copy)]
pub struct Now {
    pub hour: u32,
    pub minute: u32,
    pub weekday: Weekday,
}

impl Now {
    pub fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

pub trait TimeSource {
    fn now(&self) -> Now;
}

/// Wall clock pinned to the fixed +180 minute offset. Cannot fail: it
/// shifts the UTC instant and reads the components off the shifted value.
#[derive(Debug, Default)]
pub struct MoscowClock;

impl MoscowClock {
    fn decompose(instant: DateTime<Utc>) -> Now {
        let shifted = instant + Duration::minutes(UTC_OFFSET_MINUTES);

        Now {
            hour: shifted.hour(),
            minute: shifted.minute(),
            weekday: shifted.date_naive().weekday(),
        }
    }
}

impl TimeSource for MoscowClock {
    fn now(&self) -> Now {
        Self::decompose(Utc::now())
    }
}

/// Preset time source, used for tests and for the `--at`/`--day`
/// overrides on the command line.
#[derive(Debug, Clone, Copy)]
pub struct FixedNow(pub Now);

impl TimeSource for FixedNow {
    fn now(&self) -> Now {
        self.0
    }
}
