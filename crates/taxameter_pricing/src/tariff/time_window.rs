use jiff::civil::Time;
use serde::{Deserialize, Serialize};

/// Wall-clock validity range with minute resolution.
///
/// `start < end` is a plain same-day range `[start, end)`. `start >= end`
/// wraps past midnight and covers `[start, 24:00) ∪ [00:00, end)`; the
/// degenerate `start == end` window therefore covers the whole day.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    start: Time,
    end: Time,
}

impl TimeWindow {
    pub fn new(start: Time, end: Time) -> Self {
        TimeWindow { start, end }
    }

    /// Panics on malformed times; catalog definitions use fixed literals.
    pub fn from_hm(start: &str, end: &str) -> Self {
        let start = start.parse().expect("Error parsing wall-clock time");
        let end = end.parse().expect("Error parsing wall-clock time");
        TimeWindow { start, end }
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    pub fn wraps_midnight(&self) -> bool {
        minute_of_day(self.start) >= minute_of_day(self.end)
    }

    /// Lower bound inclusive, upper bound exclusive, on both branches.
    pub fn contains(&self, time: Time) -> bool {
        let t = minute_of_day(time);
        let start = minute_of_day(self.start);
        let end = minute_of_day(self.end);

        if start < end {
            t >= start && t < end
        } else {
            t >= start || t < end
        }
    }
}

/// Minutes since midnight, `[0, 1440)`. Seconds are ignored: windows are
/// configured with minute precision.
fn minute_of_day(time: Time) -> i16 {
    time.hour() as i16 * 60 + time.minute() as i16
}
