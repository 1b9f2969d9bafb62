//! # Command Line Front End
//!
//! Each subcommand is one user action against [`App`]. Results are printed to
//! stdout as JSON; notices raised along the way go to stderr.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use shared::SurveyCreate;

use crate::app::{App, AppConfig, Navigation, View};
use crate::core::{AppError, Result};
use crate::services::api::CsvUpload;

/// Student analytics dashboard
#[derive(Parser, Debug)]
#[command(version, propagate_version = true, subcommand_required = true)]
pub struct DashboardCommand {
    #[command(flatten)]
    pub options: ClientOptions,
    #[command(subcommand)]
    pub command: Command,
}

/// Client options. Unset flags fall back to the environment.
#[derive(Args, Debug, Default)]
pub struct ClientOptions {
    /// Backend base URL [env: DASHBOARD_API_URL]
    #[arg(long, global = true)]
    pub api_url: Option<String>,
    /// Request timeout in milliseconds [env: DASHBOARD_API_TIMEOUT_MS]
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,
    /// Persisted session file [env: DASHBOARD_SESSION_FILE]
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,
}

impl ClientOptions {
    pub fn into_config(self) -> AppConfig {
        let mut config = AppConfig::from_env();
        if let Some(url) = self.api_url {
            config.api.base_url = url;
        }
        if let Some(ms) = self.timeout_ms {
            config.api.timeout = Duration::from_millis(ms);
        }
        if let Some(path) = self.session_file {
            config.session_file = path;
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and open the dashboard for your role
    Login {
        username: String,
        #[arg(long, env = "DASHBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Resolve a path through the router
    Navigate { path: String },
    /// List courses
    Courses,
    /// Analytics for one course
    Course { id: i64 },
    /// Grades for one course
    Grades { id: i64 },
    /// Academic alerts
    AcademicAlerts,
    /// Details for one student
    Student { student_number: String },
    /// Weekly wellbeing trends
    Trends,
    /// Students flagged as at risk
    RiskAlerts,
    /// Record a wellbeing survey
    CreateSurvey {
        student_number: String,
        #[arg(long)]
        week: u32,
        #[arg(long)]
        stress: u8,
        #[arg(long)]
        sleep: f64,
    },
    /// Survey history for one student
    History { student_number: String },
    /// Upload surveys from a CSV file
    UploadCsv { path: PathBuf },
}

/// Parse command line args
pub fn parse() -> DashboardCommand {
    DashboardCommand::parse()
}

/// Run one command. Notices are printed even when the command fails.
pub async fn run(command: DashboardCommand) -> Result<()> {
    let mut app = App::new(command.options.into_config())?;
    let outcome = execute(&mut app, command.command).await;

    for notice in app.take_notices() {
        eprintln!("{}", notice);
    }
    outcome
}

async fn execute(app: &mut App, command: Command) -> Result<()> {
    match command {
        Command::Login { username, password } => {
            let nav = app.login(username, password).await?;
            print_navigation(&nav);
        }
        Command::Logout => {
            let nav = app.logout()?;
            print_navigation(&nav);
        }
        Command::Whoami => {
            let session = app.session().snapshot();
            print_json(&json!({
                "authenticated": session.has_token(),
                "username": session.username,
                "role": session.role,
            }))?;
        }
        Command::Navigate { path } => {
            let nav = app.navigate(&path)?;
            print_navigation(&nav);
        }
        Command::Courses => {
            enter(app, View::AcademicDashboard)?;
            let courses = app.call(|api| async move { api.get_courses().await }).await?;
            print_json(&courses)?;
        }
        Command::Course { id } => {
            enter(app, View::AcademicDashboard)?;
            let dashboard = app
                .call(|api| async move { api.get_course_analytics(id).await })
                .await?;
            print_json(&dashboard)?;
        }
        Command::Grades { id } => {
            enter(app, View::AcademicDashboard)?;
            let grades = app
                .call(|api| async move { api.get_course_grades(id).await })
                .await?;
            print_json(&grades)?;
        }
        Command::AcademicAlerts => {
            enter(app, View::AcademicDashboard)?;
            let alerts = app
                .call(|api| async move { api.get_academic_alerts().await })
                .await?;
            print_json(&alerts)?;
        }
        Command::Student { student_number } => {
            enter(app, View::AcademicDashboard)?;
            let details = app
                .call(|api| async move { api.get_student_details(&student_number).await })
                .await?;
            print_json(&details)?;
        }
        Command::Trends => {
            enter(app, View::WellbeingDashboard)?;
            let trends = app
                .call(|api| async move { api.get_wellbeing_trends().await })
                .await?;
            print_json(&trends)?;
        }
        Command::RiskAlerts => {
            enter(app, View::WellbeingDashboard)?;
            let alerts = app.call(|api| async move { api.get_risk_alerts().await }).await?;
            print_json(&alerts)?;
        }
        Command::CreateSurvey {
            student_number,
            week,
            stress,
            sleep,
        } => {
            enter(app, View::WellbeingDashboard)?;
            let survey = SurveyCreate {
                student_number,
                week_number: week,
                stress_level: stress,
                hours_slept: sleep,
            };
            let created = app
                .call(|api| async move { api.create_survey(&survey).await })
                .await?;
            print_json(&created)?;
        }
        Command::History { student_number } => {
            enter(app, View::WellbeingDashboard)?;
            let history = app
                .call(|api| async move { api.get_student_history(&student_number).await })
                .await?;
            print_json(&history)?;
        }
        Command::UploadCsv { path } => {
            enter(app, View::WellbeingDashboard)?;
            let upload = CsvUpload::from_path(&path).await?;
            let reply = app
                .call(|api| async move { api.upload_csv_surveys(upload).await })
                .await?;
            print_json(&reply)?;
        }
    }
    Ok(())
}

/// Open the dashboard a command belongs to. Fails if the guard sends the user
/// anywhere else.
fn enter(app: &mut App, view: View) -> Result<()> {
    let path = match view {
        View::AcademicDashboard => crate::app::ACADEMIC_DASHBOARD_PATH,
        View::WellbeingDashboard => crate::app::WELLBEING_DASHBOARD_PATH,
        View::Login => crate::app::LOGIN_PATH,
    };
    let nav = app.navigate(path)?;
    if nav.view == view {
        return Ok(());
    }
    let reason = if app.session().is_authenticated() {
        "not available for the signed-in role"
    } else {
        "requires signing in first"
    };
    Err(AppError::Navigation(format!("{} is {}", view.title(), reason)))
}

fn print_navigation(nav: &Navigation) {
    println!("{} ({})", nav.path, nav.view.title());
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{}", out);
    Ok(())
}
