//! # Service Traits
//!
//! Traits for dependency injection. The orchestrator talks to the backend only
//! through [`ApiService`], so tests can swap in a mock.

use async_trait::async_trait;
use serde_json::Value;
use shared::{
    Course, CourseDashboard, Grade, RiskAlert, Survey, SurveyCreate, TokenResponse, WeeklyTrend,
};

use crate::services::api::{self, ApiClient, ApiError, CsvUpload};

/// Backend operations used by the dashboard.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Exchange credentials for a token. Does not touch the session.
    async fn login(&self, username: String, password: String) -> Result<TokenResponse, ApiError>;

    async fn get_courses(&self) -> Result<Vec<Course>, ApiError>;

    async fn get_course_analytics(&self, course_id: i64) -> Result<CourseDashboard, ApiError>;

    async fn get_course_grades(&self, course_id: i64) -> Result<Vec<Grade>, ApiError>;

    async fn get_academic_alerts(&self) -> Result<Value, ApiError>;

    async fn get_student_details(&self, student_number: &str) -> Result<Value, ApiError>;

    async fn get_wellbeing_trends(&self) -> Result<Vec<WeeklyTrend>, ApiError>;

    async fn get_risk_alerts(&self) -> Result<Vec<RiskAlert>, ApiError>;

    async fn create_survey(&self, survey: &SurveyCreate) -> Result<Survey, ApiError>;

    async fn get_student_history(&self, student_number: &str) -> Result<Value, ApiError>;

    async fn upload_csv_surveys(&self, upload: CsvUpload) -> Result<Value, ApiError>;
}

#[async_trait]
impl ApiService for ApiClient {
    async fn login(&self, username: String, password: String) -> Result<TokenResponse, ApiError> {
        api::auth::login(self, username, password).await
    }

    async fn get_courses(&self) -> Result<Vec<Course>, ApiError> {
        api::academic::get_courses(self).await
    }

    async fn get_course_analytics(&self, course_id: i64) -> Result<CourseDashboard, ApiError> {
        api::academic::get_course_analytics(self, course_id).await
    }

    async fn get_course_grades(&self, course_id: i64) -> Result<Vec<Grade>, ApiError> {
        api::academic::get_course_grades(self, course_id).await
    }

    async fn get_academic_alerts(&self) -> Result<Value, ApiError> {
        api::academic::get_academic_alerts(self).await
    }

    async fn get_student_details(&self, student_number: &str) -> Result<Value, ApiError> {
        api::academic::get_student_details(self, student_number).await
    }

    async fn get_wellbeing_trends(&self) -> Result<Vec<WeeklyTrend>, ApiError> {
        api::wellbeing::get_wellbeing_trends(self).await
    }

    async fn get_risk_alerts(&self) -> Result<Vec<RiskAlert>, ApiError> {
        api::wellbeing::get_risk_alerts(self).await
    }

    async fn create_survey(&self, survey: &SurveyCreate) -> Result<Survey, ApiError> {
        api::wellbeing::create_survey(self, survey).await
    }

    async fn get_student_history(&self, student_number: &str) -> Result<Value, ApiError> {
        api::wellbeing::get_student_history(self, student_number).await
    }

    async fn upload_csv_surveys(&self, upload: CsvUpload) -> Result<Value, ApiError> {
        api::wellbeing::upload_csv_surveys(self, upload).await
    }
}
