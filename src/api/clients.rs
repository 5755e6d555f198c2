//! Client (customer) APIs
use std::sync::Arc;

use crate::api::{path, Activatable, Crud};
use crate::client::{ApiClient, Credentials};
use crate::model;

pub struct Clients {
    client: Arc<ApiClient>,
}

impl Clients {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Clients { client }
    }

    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }
}

impl Crud for Clients {
    type Model = model::Client;

    fn api(&self) -> &ApiClient {
        &self.client
    }

    fn base_path(&self) -> String {
        path::clients_path()
    }
}

impl Activatable for Clients {}

#[cfg(test)]
mod test {
    use super::*;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn clients(uri: &str) -> Clients {
        let credentials = Credentials::new("acme", "bob@acme.test", "secret", true);
        Clients::new(Arc::new(
            ApiClient::with_base_url(credentials, uri).unwrap(),
        ))
    }

    fn client_body(id: i64, name: &str, active: bool) -> String {
        format!(
            r#"{{"client":{{"id":{},"name":"{}","active":{},"currency":"United States Dollar - USD"}}}}"#,
            id, name, active
        )
    }

    #[tokio::test]
    async fn test_list_unwraps_roots() {
        let server = MockServer::start().await;
        let resp = ResponseTemplate::new(200).set_body_raw(
            format!("[{},{}]", client_body(1, "SuprCorp", true), client_body(2, "SuprGlu", false)),
            "application/json",
        );
        Mock::given(method("GET"))
            .and(path("/clients"))
            .respond_with(resp)
            .expect(1)
            .mount(&server)
            .await;

        let all = clients(&server.uri()).list().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "SuprCorp");
        assert_eq!(all[0].id, Some(1));
        assert!(!all[1].active);
    }

    #[tokio::test]
    async fn test_find() {
        let server = MockServer::start().await;
        let resp =
            ResponseTemplate::new(200).set_body_raw(client_body(205, "SuprCorp", true), "application/json");
        Mock::given(method("GET"))
            .and(path("/clients/205"))
            .respond_with(resp)
            .expect(1)
            .mount(&server)
            .await;

        let found = clients(&server.uri()).find(205).await.unwrap();

        assert_eq!(found.id, Some(205));
        assert_eq!(found.name, "SuprCorp");
    }

    #[tokio::test]
    async fn test_create_follows_location() {
        let server = MockServer::start().await;
        let created = ResponseTemplate::new(201).insert_header("Location", "/clients/123");
        Mock::given(method("POST"))
            .and(path("/clients"))
            .and(body_json(serde_json::json!({
                "client": {"name": "SuprCorp", "active": true}
            })))
            .respond_with(created)
            .expect(1)
            .mount(&server)
            .await;

        let fetched =
            ResponseTemplate::new(200).set_body_raw(client_body(123, "SuprCorp", true), "application/json");
        Mock::given(method("GET"))
            .and(path("/clients/123"))
            .respond_with(fetched)
            .expect(1)
            .mount(&server)
            .await;

        let saved = clients(&server.uri())
            .create(&model::Client::new("SuprCorp"))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(123));
        assert_eq!(saved.name, "SuprCorp");
    }

    #[tokio::test]
    async fn test_deactivate_toggles_active_client() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/clients/301/toggle"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let fetched =
            ResponseTemplate::new(200).set_body_raw(client_body(301, "SuprCorp", false), "application/json");
        Mock::given(method("GET"))
            .and(path("/clients/301"))
            .respond_with(fetched)
            .expect(1)
            .mount(&server)
            .await;

        let active = model::Client {
            id: Some(301),
            ..model::Client::new("SuprCorp")
        };
        let deactivated = clients(&server.uri()).deactivate(&active).await.unwrap();

        assert!(!deactivated.active);
    }

    #[tokio::test]
    async fn test_activate_skips_toggle_when_already_active() {
        let server = MockServer::start().await;
        // No toggle request may go out for an already-active client.
        Mock::given(method("POST"))
            .and(path("/clients/301/toggle"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let fetched =
            ResponseTemplate::new(200).set_body_raw(client_body(301, "SuprCorp", true), "application/json");
        Mock::given(method("GET"))
            .and(path("/clients/301"))
            .respond_with(fetched)
            .expect(1)
            .mount(&server)
            .await;

        let active = model::Client {
            id: Some(301),
            ..model::Client::new("SuprCorp")
        };
        let refreshed = clients(&server.uri()).activate(&active).await.unwrap();

        assert!(refreshed.active);
    }

    #[tokio::test]
    async fn test_delete_returns_id() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/clients/205"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let doomed = model::Client {
            id: Some(205),
            ..model::Client::new("SuprCorp")
        };
        let id = clients(&server.uri()).delete(&doomed).await.unwrap();

        assert_eq!(id, 205);
    }

    #[tokio::test]
    async fn test_missing_root_is_an_error() {
        let server = MockServer::start().await;
        let resp = ResponseTemplate::new(200)
            .set_body_raw(r#"{"person":{"id":1}}"#, "application/json");
        Mock::given(method("GET"))
            .and(path("/clients/1"))
            .respond_with(resp)
            .expect(1)
            .mount(&server)
            .await;

        let err = clients(&server.uri()).find(1).await.unwrap_err();

        assert!(matches!(err, crate::Error::MissingRoot("client")));
    }

    #[tokio::test]
    async fn test_not_found_and_throttle_mapping() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/clients/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/clients/503"))
            .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "27"))
            .mount(&server)
            .await;

        let api = clients(&server.uri());

        assert!(matches!(api.find(404).await, Err(crate::Error::NotFound)));
        assert!(matches!(
            api.find(503).await,
            Err(crate::Error::RateLimited(27))
        ));
    }
}
