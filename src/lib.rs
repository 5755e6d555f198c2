//! Client for the classic Harvest time-tracking REST API.
//!
//! Open a [`Harvest`] session with your account's subdomain and basic-auth
//! credentials, then reach each API area through its accessor. Accessors are
//! memoized: one resource client per area, built on first use, all sharing
//! the session's [`Credentials`].
//!
//! ```no_run
//! use harvest::{Harvest, SessionOptions};
//! use harvest::api::Crud;
//!
//! # async fn run() -> Result<(), harvest::Error> {
//! let harvest = Harvest::new("acme", "bob@acme.test", "secret", SessionOptions::default())?;
//! for client in harvest.clients().list().await? {
//!     println!("{}", client.name);
//! }
//! # Ok(())
//! # }
//! ```
pub mod api;
mod client;
mod model;

pub use client::{ApiClient, Credentials, Error, Harvest, SessionOptions};
pub use model::{
    Client, Company, Contact, Daily, DayEntry, Expense, ExpenseCategory, Project,
    RateLimitStatus, ReportFilter, Resource, Task, TaskAssignment, Toggleable, TrackableProject,
    TrackableTask, User, UserAssignment, WhoAmI,
};
