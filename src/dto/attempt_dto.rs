use super::quiz_dto::PlayableQuestion;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartAttemptResponse {
    pub attempt_id: u64,
    pub quiz_id: u64,
    pub start_time: DateTime<FixedOffset>,
    pub questions: Vec<PlayableQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptSummary {
    pub attempt_id: u64,
    pub quiz_id: u64,
    pub quiz_name: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub total_questions: usize,
    pub answered_questions: usize,
    pub finished: bool,
}
