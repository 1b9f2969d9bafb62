use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Weekly averages from `GET /wellbeing/dashboard/trends`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyTrend {
    pub week: u32,
    pub average_stress: f64,
    pub average_sleep: f64,
}

/// Body of `POST /wellbeing/surveys`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurveyCreate {
    pub student_number: String,
    pub week_number: u32,
    /// Self-reported, 1-5.
    pub stress_level: u8,
    pub hours_slept: f64,
}

/// Stored survey record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Survey {
    pub id: i64,
    pub week_number: u32,
    pub stress_level: u8,
    pub hours_slept: f64,
    pub recorded_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentBasic {
    pub full_name: String,
    pub student_number: String,
    pub email: String,
}

/// Entry of `GET /wellbeing/dashboard/alerts`: a survey that crossed a risk
/// threshold, with the student it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAlert {
    #[serde(flatten)]
    pub survey: Survey,
    pub student: StudentBasic,
}
