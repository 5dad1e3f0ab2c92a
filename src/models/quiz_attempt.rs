use super::quiz::Quiz;
use crate::error::{Error, Result};
use crate::utils::time::to_rfc3339;
use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: u64,
    pub quiz_id: u64,
    pub start_time: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<FixedOffset>>,
}

impl QuizAttempt {
    pub fn start(id: u64, quiz_id: u64, start_time: DateTime<FixedOffset>) -> Self {
        Self {
            id,
            quiz_id,
            start_time,
            end_time: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// Marks the attempt finished. An attempt can only be finished once.
    pub fn finish(&mut self, end_time: DateTime<FixedOffset>) -> Result<()> {
        if let Some(existing) = self.end_time {
            return Err(Error::Conflict(format!(
                "attempt {} was already finished at {}",
                self.id,
                to_rfc3339(existing)
            )));
        }
        self.end_time = Some(end_time);
        Ok(())
    }

    /// True unless the attempt has an end time earlier than its start time.
    pub fn is_chronological(&self) -> bool {
        self.end_time.map_or(true, |end| end >= self.start_time)
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.end_time
            .map(|end| end.signed_duration_since(self.start_time))
    }
}

/// An attempt together with the quiz it points at, borrowed from whatever
/// directory resolved it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResolvedAttempt<'a> {
    pub attempt: &'a QuizAttempt,
    pub quiz: &'a Quiz,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::from_rfc3339;

    fn at(s: &str) -> DateTime<FixedOffset> {
        from_rfc3339(s).unwrap()
    }

    #[test]
    fn in_progress_attempt_differs_from_finished_one() {
        let open = QuizAttempt::start(1, 10, at("2024-05-01T09:00:00+02:00"));
        let mut done = open.clone();
        done.finish(at("2024-05-01T09:12:30+02:00")).unwrap();

        assert!(!open.is_finished());
        assert!(done.is_finished());
        assert_ne!(open, done);
        assert_eq!(open.elapsed(), None);
        assert_eq!(done.elapsed(), Some(Duration::seconds(750)));
    }

    #[test]
    fn finishing_twice_is_a_conflict() {
        let mut attempt = QuizAttempt::start(4, 1, at("2024-05-01T09:00:00Z"));
        attempt.finish(at("2024-05-01T09:05:00Z")).unwrap();

        let err = attempt.finish(at("2024-05-01T09:06:00Z")).unwrap_err();
        assert!(matches!(
            err,
            Error::Conflict(msg) if msg == "attempt 4 was already finished at 2024-05-01T09:05:00+00:00"
        ));
        assert_eq!(attempt.end_time, Some(at("2024-05-01T09:05:00Z")));
    }

    #[test]
    fn chronology_compares_instants_across_offsets() {
        let mut attempt = QuizAttempt::start(2, 1, at("2024-05-01T10:00:00+02:00"));
        attempt.end_time = Some(at("2024-05-01T08:30:00Z"));
        assert!(attempt.is_chronological());

        attempt.end_time = Some(at("2024-05-01T07:59:59Z"));
        assert!(!attempt.is_chronological());
    }

    #[test]
    fn end_time_is_omitted_while_in_progress() {
        let attempt = QuizAttempt::start(3, 1, at("2024-05-01T09:00:00+00:00"));
        let json = serde_json::to_value(&attempt).unwrap();
        assert!(json.get("end_time").is_none());

        let back: QuizAttempt = serde_json::from_value(json).unwrap();
        assert_eq!(back.end_time, None);
    }
}
