//! # Wellbeing Endpoints
//!
//! Wellbeing-officer views: weekly trends, risk alerts, survey entry,
//! per-student history and bulk CSV ingestion.

use shared::{RiskAlert, Survey, SurveyCreate, WeeklyTrend};

use super::client::ApiClient;
use super::error::ApiError;
use super::request::{ApiRequest, CsvUpload};

pub fn trends_request() -> ApiRequest {
    ApiRequest::get("/wellbeing/dashboard/trends")
}

pub fn risk_alerts_request() -> ApiRequest {
    ApiRequest::get("/wellbeing/dashboard/alerts")
}

pub fn create_survey_request(survey: &SurveyCreate) -> Result<ApiRequest, ApiError> {
    ApiRequest::post_json("/wellbeing/surveys", survey)
}

pub fn student_history_request(student_number: &str) -> ApiRequest {
    ApiRequest::get(format!("/wellbeing/students/{}/history", student_number))
}

pub fn upload_csv_request(upload: CsvUpload) -> ApiRequest {
    ApiRequest::post_multipart("/wellbeing/upload_csv", upload)
}

/// Weekly average stress and sleep.
#[tracing::instrument(skip(client))]
pub async fn get_wellbeing_trends(client: &ApiClient) -> Result<Vec<WeeklyTrend>, ApiError> {
    client.fetch_json(trends_request()).await
}

/// Surveys that crossed a risk threshold, most recent weeks first.
#[tracing::instrument(skip(client))]
pub async fn get_risk_alerts(client: &ApiClient) -> Result<Vec<RiskAlert>, ApiError> {
    let alerts = client.fetch_json::<Vec<RiskAlert>>(risk_alerts_request()).await?;
    tracing::debug!(count = alerts.len(), "Risk alerts fetched");
    Ok(alerts)
}

/// Record one survey result.
#[tracing::instrument(skip(client, survey), fields(student_number = %survey.student_number))]
pub async fn create_survey(client: &ApiClient, survey: &SurveyCreate) -> Result<Survey, ApiError> {
    client.fetch_json(create_survey_request(survey)?).await
}

/// Survey history of one student. The backend does not fix its shape.
#[tracing::instrument(skip(client))]
pub async fn get_student_history(
    client: &ApiClient,
    student_number: &str,
) -> Result<serde_json::Value, ApiError> {
    client
        .fetch_json(student_history_request(student_number))
        .await
}

/// Bulk survey ingestion from a CSV file.
#[tracing::instrument(skip(client, upload), fields(file_name = %upload.file_name, bytes = upload.contents.len()))]
pub async fn upload_csv_surveys(
    client: &ApiClient,
    upload: CsvUpload,
) -> Result<serde_json::Value, ApiError> {
    client.fetch_json(upload_csv_request(upload)).await
}
