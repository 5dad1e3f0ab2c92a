use chrono::{DateTime, FixedOffset, Local};

/// Source of the current time for attempt timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        now()
    }
}

pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

pub fn to_rfc3339(dt: DateTime<FixedOffset>) -> String {
    dt.to_rfc3339()
}

pub fn from_rfc3339(s: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    Ok(DateTime::parse_from_rfc3339(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_original_offset() {
        let dt = from_rfc3339("2024-03-10T08:15:00+05:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 5 * 3600);
        assert_eq!(to_rfc3339(dt), "2024-03-10T08:15:00+05:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(from_rfc3339("yesterday").is_err());
    }

    #[test]
    fn system_clock_moves_forward() {
        let first = SystemClock.now();
        let second = SystemClock.now();
        assert!(second >= first);
    }
}
