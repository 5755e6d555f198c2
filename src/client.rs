use std::fmt;
use std::sync::{Arc, OnceLock};

use reqwest::{header, Body, Method, Request, Response};
use thiserror::Error;
use url::Url;

use crate::api::{
    account::Account, clients::Clients, contacts::Contacts, expense_categories::ExpenseCategories,
    expenses::Expenses, projects::Projects, reports::Reports, task_assignments::TaskAssignments,
    tasks::Tasks, time::Time, user_assignments::UserAssignments, users::Users,
};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid credentials: subdomain, username and password are required")]
    InvalidCredentials,
    #[error("HTTP client error")]
    HttpClient(#[from] reqwest::Error),
    #[error("Invalid URL")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Failed to parse json")]
    Parse(#[from] serde_json::Error),
    #[error("Response is missing the `{0}` root element")]
    MissingRoot(&'static str),
    #[error("Create response carried no usable Location header")]
    MissingLocation,
    #[error("Model has not been saved yet (no id)")]
    MissingId,
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Authentication failed")]
    AuthenticationFailed,
    #[error("Resource not found")]
    NotFound,
    #[error("Rate limit reached, retry after {0} seconds")]
    RateLimited(u64),
    #[error("Error response: [{0}] {1}")]
    ErrorResponse(u16, String),
}

/// Authentication bundle shared by every resource client of a [`Harvest`]
/// session. Immutable once the session is constructed.
#[derive(Clone)]
pub struct Credentials {
    pub subdomain: String,
    pub username: String,
    pub password: String,
    pub use_ssl: bool,
}

impl Credentials {
    pub fn new(subdomain: &str, username: &str, password: &str, use_ssl: bool) -> Self {
        Credentials {
            subdomain: subdomain.to_owned(),
            username: username.to_owned(),
            password: password.to_owned(),
            use_ssl,
        }
    }

    /// The classic API identifies an account by subdomain and authenticates
    /// every request with basic auth, so all three parts must be present.
    pub fn valid(&self) -> bool {
        !self.subdomain.is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }

    /// Account endpoint these credentials authenticate against.
    pub fn host(&self) -> String {
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!("{}://{}.harvestapp.com", scheme, self.subdomain)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("subdomain", &self.subdomain)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("use_ssl", &self.use_ssl)
            .finish()
    }
}

/// Options recognized by [`Harvest::new`].
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Require TLS for every request. Defaults to `true`.
    pub ssl: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions { ssl: true }
    }
}

/// HTTP core shared by all resource clients: holds the credentials, the
/// account base URL and the underlying connection pool.
pub struct ApiClient {
    credentials: Credentials,
    base_url: Url,
    http_client: reqwest::Client,
}

impl ApiClient {
    pub(crate) fn new(credentials: Credentials) -> Result<Self, Error> {
        let base_url = Url::parse(&credentials.host())?;

        Ok(ApiClient {
            credentials,
            base_url,
            http_client: reqwest::Client::new(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;

        Ok(ApiClient {
            credentials,
            base_url,
            http_client: reqwest::Client::new(),
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) async fn request(&self, req: Request) -> Result<Response, Error> {
        log::debug!("{} {}", req.method(), req.url());
        Ok(self.http_client.execute(req).await?)
    }

    pub(crate) fn new_request<S: AsRef<str>>(
        &self,
        method: Method,
        path: S,
        body: Option<Body>,
    ) -> Result<Request, Error> {
        self.new_request_inner(method, path.as_ref(), body)
    }

    fn new_request_inner(
        &self,
        method: Method,
        path: &str,
        body: Option<Body>,
    ) -> Result<Request, Error> {
        let url = self.base_url.join(path)?;

        let mut builder = self
            .http_client
            .request(method, url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            builder = builder.body(body);
        }

        Ok(builder.build()?)
    }
}

/// The session facade. Constructed once per account, it owns the shared
/// [`Credentials`] and hands out one lazily-built resource client per API
/// area. Accessors memoize: repeated calls return the identical instance.
///
/// ```no_run
/// use harvest::{Harvest, SessionOptions};
///
/// # async fn run() -> Result<(), harvest::Error> {
/// let harvest = Harvest::new("acme", "bob@acme.test", "secret", SessionOptions::default())?;
/// let status = harvest.account().rate_limit_status().await?;
/// println!("{} of {} calls used", status.count, status.max_calls);
/// # Ok(())
/// # }
/// ```
pub struct Harvest {
    client: Arc<ApiClient>,
    account: OnceLock<Account>,
    clients: OnceLock<Clients>,
    contacts: OnceLock<Contacts>,
    projects: OnceLock<Projects>,
    tasks: OnceLock<Tasks>,
    users: OnceLock<Users>,
    task_assignments: OnceLock<TaskAssignments>,
    user_assignments: OnceLock<UserAssignments>,
    expense_categories: OnceLock<ExpenseCategories>,
    expenses: OnceLock<Expenses>,
    time: OnceLock<Time>,
    reports: OnceLock<Reports>,
}

impl Harvest {
    /// Opens a session against `{subdomain}.harvestapp.com`.
    ///
    /// Fails with [`Error::InvalidCredentials`] when any of subdomain,
    /// username or password is empty; no request is made yet.
    pub fn new(
        subdomain: &str,
        username: &str,
        password: &str,
        options: SessionOptions,
    ) -> Result<Self, Error> {
        let credentials = Credentials::new(subdomain, username, password, options.ssl);
        if !credentials.valid() {
            return Err(Error::InvalidCredentials);
        }

        Ok(Self::from_client(Arc::new(ApiClient::new(credentials)?)))
    }

    fn from_client(client: Arc<ApiClient>) -> Self {
        Harvest {
            client,
            account: OnceLock::new(),
            clients: OnceLock::new(),
            contacts: OnceLock::new(),
            projects: OnceLock::new(),
            tasks: OnceLock::new(),
            users: OnceLock::new(),
            task_assignments: OnceLock::new(),
            user_assignments: OnceLock::new(),
            expense_categories: OnceLock::new(),
            expenses: OnceLock::new(),
            time: OnceLock::new(),
            reports: OnceLock::new(),
        }
    }

    /// The credentials every resource client of this session shares.
    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }

    /// Account status APIs (rate limit, who-am-i).
    pub fn account(&self) -> &Account {
        self.account
            .get_or_init(|| Account::new(self.client.clone()))
    }

    /// Client (customer) APIs: CRUD plus activation toggling.
    pub fn clients(&self) -> &Clients {
        self.clients
            .get_or_init(|| Clients::new(self.client.clone()))
    }

    /// Client contact APIs.
    pub fn contacts(&self) -> &Contacts {
        self.contacts
            .get_or_init(|| Contacts::new(self.client.clone()))
    }

    /// Project APIs: CRUD, activation toggling and task creation.
    pub fn projects(&self) -> &Projects {
        self.projects
            .get_or_init(|| Projects::new(self.client.clone()))
    }

    /// Task APIs.
    pub fn tasks(&self) -> &Tasks {
        self.tasks.get_or_init(|| Tasks::new(self.client.clone()))
    }

    /// User (person) APIs: CRUD, activation toggling, password reset.
    pub fn users(&self) -> &Users {
        self.users.get_or_init(|| Users::new(self.client.clone()))
    }

    /// Task assignment APIs, scoped to a project.
    pub fn task_assignments(&self) -> &TaskAssignments {
        self.task_assignments
            .get_or_init(|| TaskAssignments::new(self.client.clone()))
    }

    /// User assignment APIs, scoped to a project.
    pub fn user_assignments(&self) -> &UserAssignments {
        self.user_assignments
            .get_or_init(|| UserAssignments::new(self.client.clone()))
    }

    /// Expense category APIs.
    pub fn expense_categories(&self) -> &ExpenseCategories {
        self.expense_categories
            .get_or_init(|| ExpenseCategories::new(self.client.clone()))
    }

    /// Expense APIs.
    pub fn expenses(&self) -> &Expenses {
        self.expenses
            .get_or_init(|| Expenses::new(self.client.clone()))
    }

    /// Timesheet (daily) APIs: day views, entries and the running timer.
    pub fn time(&self) -> &Time {
        self.time.get_or_init(|| Time::new(self.client.clone()))
    }

    /// Reporting APIs: entries and expenses over a date range.
    pub fn reports(&self) -> &Reports {
        self.reports
            .get_or_init(|| Reports::new(self.client.clone()))
    }
}
