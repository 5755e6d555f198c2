//! Timesheet (daily) APIs
//!
//! The classic daily endpoints predate the CRUD areas and differ from them:
//! days are addressed by ordinal-within-year, verbs live in the path
//! (`/daily/add`, `/daily/update/{id}`) and payloads come unwrapped.
use std::sync::Arc;

use chrono::NaiveDate;
use reqwest::{Body, Method};

use crate::api::{delete, path, status_unwrap};
use crate::client::{ApiClient, Credentials, Error};
use crate::model::{Daily, DayEntry};

pub struct Time {
    client: Arc<ApiClient>,
}

impl Time {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Time { client }
    }

    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }

    async fn fetch_daily(&self, p: String) -> Result<Daily, Error> {
        let req = self.client.new_request(Method::GET, p, None)?;

        let resp = self.client.request(req).await?;
        let ok_resp = status_unwrap(resp).await?;
        let result = ok_resp.json().await?;

        Ok(result)
    }

    async fn fetch_entry(&self, method: Method, p: String, body: Option<Body>) -> Result<DayEntry, Error> {
        let req = self.client.new_request(method, p, body)?;

        let resp = self.client.request(req).await?;
        let ok_resp = status_unwrap(resp).await?;
        let result = ok_resp.json().await?;

        Ok(result)
    }

    /// Today's timesheet plus the projects and tasks time can be tracked
    /// against. Admins may pass `of_user` to read someone else's day.
    pub async fn today(&self, of_user: Option<i64>) -> Result<Daily, Error> {
        self.fetch_daily(path::daily_path(of_user)).await
    }

    /// The timesheet of an arbitrary day.
    pub async fn day(&self, date: NaiveDate, of_user: Option<i64>) -> Result<Daily, Error> {
        self.fetch_daily(path::daily_day_path(date, of_user)).await
    }

    /// Retrieves a single entry by id.
    pub async fn find(&self, id: i64) -> Result<DayEntry, Error> {
        self.fetch_entry(Method::GET, path::daily_show_path(id), None)
            .await
    }

    /// Logs a new entry and returns the stored version. Leave `hours` at
    /// zero to start a running timer instead.
    pub async fn create(&self, entry: &DayEntry) -> Result<DayEntry, Error> {
        let body = Body::from(serde_json::to_vec(entry)?);

        self.fetch_entry(Method::POST, path::daily_add_path(), Some(body))
            .await
    }

    /// Pushes local changes of a saved entry and returns the stored version.
    pub async fn update(&self, entry: &DayEntry) -> Result<DayEntry, Error> {
        let id = entry.id.ok_or(Error::MissingId)?;
        let body = Body::from(serde_json::to_vec(entry)?);

        self.fetch_entry(Method::POST, path::daily_update_path(id), Some(body))
            .await
    }

    /// Deletes a saved entry, returning its id.
    pub async fn delete(&self, entry: &DayEntry) -> Result<i64, Error> {
        let id = entry.id.ok_or(Error::MissingId)?;
        delete(&self.client, path::daily_delete_path(id)).await?;

        Ok(id)
    }

    /// Starts the timer on a stopped entry, or stops a running one. The
    /// returned entry tells which way it went via
    /// [`timer_running`](DayEntry::timer_running).
    pub async fn toggle_timer(&self, id: i64) -> Result<DayEntry, Error> {
        self.fetch_entry(Method::GET, path::daily_timer_path(id), None)
            .await
    }
}
