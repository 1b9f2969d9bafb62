use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Course as listed by `GET /academic/courses`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub name: String,
}

/// Aggregates for one course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseAnalytics {
    pub average_grade: f64,
    /// Percentage, 0-100.
    pub attendance_rate: f64,
    pub total_students_enrolled: u32,
}

/// Response of `GET /academic/courses/{id}/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseDashboard {
    pub course_name: String,
    pub course_code: String,
    pub analytics: CourseAnalytics,
}

/// One graded submission, from `GET /academic/courses/{id}/grades`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub assignment_title: String,
    pub score: f64,
    pub submission_date: NaiveDateTime,
}
