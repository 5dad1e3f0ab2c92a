pub mod answer;
pub mod question;
pub mod question_answer;
pub mod quiz;
pub mod quiz_attempt;
