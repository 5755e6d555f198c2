//! Expense category APIs
use std::sync::Arc;

use crate::api::{path, Crud};
use crate::client::{ApiClient, Credentials};
use crate::model::ExpenseCategory;

pub struct ExpenseCategories {
    client: Arc<ApiClient>,
}

impl ExpenseCategories {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        ExpenseCategories { client }
    }

    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }
}

impl Crud for ExpenseCategories {
    type Model = ExpenseCategory;

    fn api(&self) -> &ApiClient {
        &self.client
    }

    fn base_path(&self) -> String {
        path::expense_categories_path()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start().await;
        let resp = ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"expense_category":{"id":1,"name":"Mileage","unit_name":"mile","unit_price":0.58}},
                {"expense_category":{"id":2,"name":"Lodging"}}
            ]"#,
            "application/json",
        );
        Mock::given(method("GET"))
            .and(path("/expense_categories"))
            .respond_with(resp)
            .expect(1)
            .mount(&server)
            .await;

        let credentials = Credentials::new("acme", "bob@acme.test", "secret", true);
        let api = ExpenseCategories::new(Arc::new(
            ApiClient::with_base_url(credentials, &server.uri()).unwrap(),
        ));
        let all = api.list().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].unit_price, Some(0.58));
        assert_eq!(all[1].name, "Lodging");
    }
}
