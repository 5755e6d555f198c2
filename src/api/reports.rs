//! Reporting APIs
//!
//! Reports read entries and expenses over an inclusive date range, from the
//! project or the user side. All of them require admin access.
use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::{fetch_list, path};
use crate::client::{ApiClient, Credentials, Error};
use crate::model::{DayEntry, Expense, ReportFilter};

pub struct Reports {
    client: Arc<ApiClient>,
}

impl Reports {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Reports { client }
    }

    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }

    /// All entries logged against a project in the range; narrow with
    /// [`ReportFilter::for_user`].
    pub async fn time_by_project(
        &self,
        project_id: i64,
        from: NaiveDate,
        to: NaiveDate,
        filter: ReportFilter,
    ) -> Result<Vec<DayEntry>, Error> {
        fetch_list(
            &self.client,
            path::project_entries_path(project_id, from, to, &filter),
        )
        .await
    }

    /// All entries a user logged in the range; narrow with
    /// [`ReportFilter::for_project`].
    pub async fn time_by_user(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
        filter: ReportFilter,
    ) -> Result<Vec<DayEntry>, Error> {
        fetch_list(
            &self.client,
            path::user_entries_path(user_id, from, to, &filter),
        )
        .await
    }

    /// All expenses charged to a project in the range.
    pub async fn expenses_by_project(
        &self,
        project_id: i64,
        from: NaiveDate,
        to: NaiveDate,
        filter: ReportFilter,
    ) -> Result<Vec<Expense>, Error> {
        fetch_list(
            &self.client,
            path::project_expenses_path(project_id, from, to, &filter),
        )
        .await
    }

    /// All expenses a user filed in the range.
    pub async fn expenses_by_user(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
        filter: ReportFilter,
    ) -> Result<Vec<Expense>, Error> {
        fetch_list(
            &self.client,
            path::user_expenses_path(user_id, from, to, &filter),
        )
        .await
    }
}
