//! Task APIs
use std::sync::Arc;

use crate::api::{path, Crud};
use crate::client::{ApiClient, Credentials};
use crate::model::Task;

pub struct Tasks {
    client: Arc<ApiClient>,
}

impl Tasks {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Tasks { client }
    }

    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }
}

impl Crud for Tasks {
    type Model = Task;

    fn api(&self) -> &ApiClient {
        &self.client
    }

    fn base_path(&self) -> String {
        path::tasks_path()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn tasks(uri: &str) -> Tasks {
        let credentials = Credentials::new("acme", "bob@acme.test", "secret", true);
        Tasks::new(Arc::new(ApiClient::with_base_url(credentials, uri).unwrap()))
    }

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start().await;
        let resp = ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"task":{"id":1,"name":"Design","billable_by_default":true}},
                {"task":{"id":2,"name":"Admin","billable_by_default":false,"is_default":true}}
            ]"#,
            "application/json",
        );
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(resp)
            .expect(1)
            .mount(&server)
            .await;

        let all = tasks(&server.uri()).list().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[1].name, "Admin");
        assert_eq!(all[1].is_default, Some(true));
    }

    #[tokio::test]
    async fn test_empty_list() {
        let server = MockServer::start().await;
        let resp = ResponseTemplate::new(200).set_body_raw("[]", "application/json");
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(resp)
            .expect(1)
            .mount(&server)
            .await;

        let all = tasks(&server.uri()).list().await.unwrap();

        assert!(all.is_empty());
    }
}
