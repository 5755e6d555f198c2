//! User (person) APIs
use std::sync::Arc;

use crate::api::{path, post_empty, Activatable, Crud};
use crate::client::{ApiClient, Credentials, Error};
use crate::model::User;

pub struct Users {
    client: Arc<ApiClient>,
}

impl Users {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Users { client }
    }

    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }

    /// Emails the user a password reset link.
    pub async fn reset_password(&self, user_id: i64) -> Result<(), Error> {
        post_empty(&self.client, path::user_reset_password_path(user_id)).await
    }
}

impl Crud for Users {
    type Model = User;

    fn api(&self) -> &ApiClient {
        &self.client
    }

    fn base_path(&self) -> String {
        path::users_path()
    }
}

impl Activatable for Users {}
