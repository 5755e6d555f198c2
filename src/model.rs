//! Data models of the classic Harvest API
use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A value object the API serves under a fixed JSON root key.
///
/// The classic wire format wraps every object in its type name, e.g.
/// `{"client": {...}}`, and collections are arrays of such wrapped objects.
/// `ROOT` names that key; the shared plumbing unwraps it.
pub trait Resource: Serialize + DeserializeOwned {
    const ROOT: &'static str;

    /// Server-assigned id, `None` until the model has been saved.
    fn id(&self) -> Option<i64>;
}

/// A [`Resource`] with an activation flag the API can toggle.
pub trait Toggleable: Resource {
    fn is_active(&self) -> bool;
}

/// Usage window returned by `GET /account/rate_limit_status`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RateLimitStatus {
    /// Requests spent in the current window.
    pub count: u32,
    /// Requests allowed per window.
    pub max_calls: u32,
    /// Window length in seconds.
    pub lifetime: u32,
    pub last_refresh: Option<DateTime<Utc>>,
}

impl RateLimitStatus {
    pub fn over_limit(&self) -> bool {
        self.count >= self.max_calls
    }
}

impl Resource for RateLimitStatus {
    const ROOT: &'static str = "rate_limit_status";

    fn id(&self) -> Option<i64> {
        None
    }
}

/// Response of `GET /account/who_am_i`: the authenticated user and the
/// account-wide company settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct WhoAmI {
    pub user: User,
    pub company: Company,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub base_uri: Option<String>,
    pub full_domain: Option<String>,
    pub active: Option<bool>,
    pub week_start_day: Option<String>,
    pub time_format: Option<String>,
    pub clock: Option<String>,
}

/// A client (customer) work is billed to.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Client {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Client {
    pub fn new(name: &str) -> Self {
        Client {
            name: name.to_owned(),
            active: true,
            ..Default::default()
        }
    }
}

impl Resource for Client {
    const ROOT: &'static str = "client";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Toggleable for Client {
    fn is_active(&self) -> bool {
        self.active
    }
}

/// A contact person attached to a [`Client`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub client_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
}

impl Resource for Contact {
    const ROOT: &'static str = "contact";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub client_id: i64,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Project {
    const ROOT: &'static str = "project";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Toggleable for Project {
    fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_by_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<bool>,
}

impl Resource for Task {
    const ROOT: &'static str = "task";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A person with access to the account. The classic API calls these
/// "people" on the wire.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contractor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<f64>,
}

impl Resource for User {
    const ROOT: &'static str = "user";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Toggleable for User {
    fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Makes a [`Task`] workable on a [`Project`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TaskAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub project_id: i64,
    pub task_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
}

impl Resource for TaskAssignment {
    const ROOT: &'static str = "task_assignment";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Puts a [`User`] on a [`Project`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserAssignment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub project_id: i64,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_project_manager: Option<bool>,
}

impl Resource for UserAssignment {
    const ROOT: &'static str = "user_assignment";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExpenseCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
}

impl Resource for ExpenseCategory {
    const ROOT: &'static str = "expense_category";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Expense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub project_id: i64,
    pub expense_category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
}

impl Resource for Expense {
    const ROOT: &'static str = "expense";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// A single timesheet entry. Hours are fractional; a running timer is
/// indicated by `timer_started_at`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DayEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub project_id: i64,
    pub task_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_at: Option<NaiveDate>,
    #[serde(default)]
    pub hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer_started_at: Option<DateTime<Utc>>,
}

impl DayEntry {
    pub fn timer_running(&self) -> bool {
        self.timer_started_at.is_some()
    }
}

impl Resource for DayEntry {
    const ROOT: &'static str = "day_entry";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// One day of the timesheet: its entries plus the projects and tasks the
/// authenticated user may track time against. The daily endpoints serve
/// this shape unwrapped.
#[derive(Debug, Serialize, Deserialize)]
pub struct Daily {
    pub for_day: NaiveDate,
    #[serde(default)]
    pub day_entries: Vec<DayEntry>,
    #[serde(default)]
    pub projects: Vec<TrackableProject>,
}

/// Project listing inside a [`Daily`] view, with the tasks assigned to it.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrackableProject {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub tasks: Vec<TrackableTask>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrackableTask {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub billable: bool,
}

/// Optional narrowing of a report query.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportFilter {
    /// Restrict to entries logged by this user.
    pub user: Option<i64>,
    /// Restrict to entries logged against this project.
    pub project: Option<i64>,
    /// Restrict by billed state (`true`: billed only, `false`: unbilled only).
    pub billed: Option<bool>,
}

impl ReportFilter {
    pub fn for_user(user_id: i64) -> Self {
        ReportFilter {
            user: Some(user_id),
            ..Default::default()
        }
    }

    pub fn for_project(project_id: i64) -> Self {
        ReportFilter {
            project: Some(project_id),
            ..Default::default()
        }
    }
}

fn default_active() -> bool {
    true
}
