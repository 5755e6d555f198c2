//! Client contact APIs
use std::sync::Arc;

use crate::api::{fetch_list, path, Crud};
use crate::client::{ApiClient, Credentials, Error};
use crate::model::Contact;

pub struct Contacts {
    client: Arc<ApiClient>,
}

impl Contacts {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Contacts { client }
    }

    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }

    /// Retrieves the contacts of one client only.
    pub async fn list_by_client(&self, client_id: i64) -> Result<Vec<Contact>, Error> {
        fetch_list(&self.client, path::client_contacts_path(client_id)).await
    }
}

impl Crud for Contacts {
    type Model = Contact;

    fn api(&self) -> &ApiClient {
        &self.client
    }

    fn base_path(&self) -> String {
        path::contacts_path()
    }
}
