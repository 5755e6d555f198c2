//! Expense APIs
use std::sync::Arc;

use crate::api::{fetch_list, path, Crud};
use crate::client::{ApiClient, Credentials, Error};
use crate::model::Expense;

pub struct Expenses {
    client: Arc<ApiClient>,
}

impl Expenses {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Expenses { client }
    }

    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }

    /// Retrieves another user's expenses. Requires admin access; plain
    /// [`list`](Crud::list) returns the authenticated user's own.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Expense>, Error> {
        fetch_list(&self.client, path::expenses_path(Some(user_id))).await
    }
}

impl Crud for Expenses {
    type Model = Expense;

    fn api(&self) -> &ApiClient {
        &self.client
    }

    fn base_path(&self) -> String {
        path::expenses_path(None)
    }
}
