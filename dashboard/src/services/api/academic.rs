//! # Academic Endpoints
//!
//! Course-director views: course list, per-course analytics and grades,
//! academic alerts and student details.

use shared::{Course, CourseDashboard, Grade};

use super::client::ApiClient;
use super::error::ApiError;
use super::request::ApiRequest;

pub fn courses_request() -> ApiRequest {
    ApiRequest::get("/academic/courses")
}

pub fn course_dashboard_request(course_id: i64) -> ApiRequest {
    ApiRequest::get(format!("/academic/courses/{}/dashboard", course_id))
}

pub fn course_grades_request(course_id: i64) -> ApiRequest {
    ApiRequest::get(format!("/academic/courses/{}/grades", course_id))
}

pub fn academic_alerts_request() -> ApiRequest {
    ApiRequest::get("/academic/dashboard/alerts")
}

pub fn student_details_request(student_number: &str) -> ApiRequest {
    ApiRequest::get(format!("/academic/students/{}/details", student_number))
}

/// List all courses.
#[tracing::instrument(skip(client))]
pub async fn get_courses(client: &ApiClient) -> Result<Vec<Course>, ApiError> {
    let courses = client.fetch_json::<Vec<Course>>(courses_request()).await?;
    tracing::debug!(count = courses.len(), "Courses fetched");
    Ok(courses)
}

/// Analytics for one course (average grade, attendance, enrolment).
#[tracing::instrument(skip(client))]
pub async fn get_course_analytics(
    client: &ApiClient,
    course_id: i64,
) -> Result<CourseDashboard, ApiError> {
    client.fetch_json(course_dashboard_request(course_id)).await
}

/// Every graded submission of one course.
#[tracing::instrument(skip(client))]
pub async fn get_course_grades(client: &ApiClient, course_id: i64) -> Result<Vec<Grade>, ApiError> {
    client.fetch_json(course_grades_request(course_id)).await
}

/// Academic alerts feed. The backend does not fix its shape.
#[tracing::instrument(skip(client))]
pub async fn get_academic_alerts(client: &ApiClient) -> Result<serde_json::Value, ApiError> {
    client.fetch_json(academic_alerts_request()).await
}

/// Student detail record. The backend does not fix its shape.
#[tracing::instrument(skip(client))]
pub async fn get_student_details(
    client: &ApiClient,
    student_number: &str,
) -> Result<serde_json::Value, ApiError> {
    client
        .fetch_json(student_details_request(student_number))
        .await
}
