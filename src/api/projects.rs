//! Project APIs
use std::sync::Arc;

use reqwest::{Body, Method};
use serde::Serialize;

use crate::api::{path, status_unwrap, Activatable, Crud};
use crate::client::{ApiClient, Credentials, Error};
use crate::model::Project;

pub struct Projects {
    client: Arc<ApiClient>,
}

impl Projects {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Projects { client }
    }

    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }

    /// Creates a task and assigns it to the project in one call.
    pub async fn create_task(&self, project_id: i64, task_name: &str) -> Result<(), Error> {
        #[derive(Serialize)]
        struct NewTask<'a> {
            name: &'a str,
        }
        #[derive(Serialize)]
        struct CreateTask<'a> {
            task: NewTask<'a>,
        }

        let body = serde_json::to_vec(&CreateTask {
            task: NewTask { name: task_name },
        })?;
        let req = self.client.new_request(
            Method::POST,
            path::project_create_task_path(project_id),
            Some(Body::from(body)),
        )?;

        let resp = self.client.request(req).await?;
        let _ = status_unwrap(resp).await?;

        Ok(())
    }
}

impl Crud for Projects {
    type Model = Project;

    fn api(&self) -> &ApiClient {
        &self.client
    }

    fn base_path(&self) -> String {
        path::projects_path()
    }
}

impl Activatable for Projects {}

#[cfg(test)]
mod test {
    use super::*;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn projects(uri: &str) -> Projects {
        let credentials = Credentials::new("acme", "bob@acme.test", "secret", true);
        Projects::new(Arc::new(
            ApiClient::with_base_url(credentials, uri).unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_list() {
        let server = MockServer::start().await;
        let resp = ResponseTemplate::new(200).set_body_raw(
            r#"[
                {"project":{"id":100,"name":"SuprGlu","client_id":10,"active":true,"bill_by":"none"}},
                {"project":{"id":101,"name":"SuprSticky","client_id":10,"active":false}}
            ]"#,
            "application/json",
        );
        Mock::given(method("GET"))
            .and(path("/projects"))
            .respond_with(resp)
            .expect(1)
            .mount(&server)
            .await;

        let all = projects(&server.uri()).list().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "SuprGlu");
        assert_eq!(all[0].client_id, 10);
        assert!(!all[1].active);
    }

    #[tokio::test]
    async fn test_update_refetches() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/projects/205"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let fetched = ResponseTemplate::new(200).set_body_raw(
            r#"{"project":{"id":205,"name":"SuprSticky","client_id":10,"active":true}}"#,
            "application/json",
        );
        Mock::given(method("GET"))
            .and(path("/projects/205"))
            .respond_with(fetched)
            .expect(1)
            .mount(&server)
            .await;

        let mut project = Project {
            id: Some(205),
            name: "SuprGlu".to_owned(),
            client_id: 10,
            active: true,
            ..Default::default()
        };
        project.name = "SuprSticky".to_owned();

        let updated = projects(&server.uri()).update(&project).await.unwrap();

        assert_eq!(updated.name, "SuprSticky");
    }

    #[tokio::test]
    async fn test_update_without_id_fails() {
        let server = MockServer::start().await;
        let unsaved = Project {
            name: "SuprGlu".to_owned(),
            client_id: 10,
            ..Default::default()
        };

        let err = projects(&server.uri()).update(&unsaved).await.unwrap_err();

        assert!(matches!(err, Error::MissingId));
    }

    #[tokio::test]
    async fn test_create_task() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects/401/task_assignments/add_with_create_new_task"))
            .and(body_json(serde_json::json!({"task": {"name": "Bottling Glue"}})))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        projects(&server.uri())
            .create_task(401, "Bottling Glue")
            .await
            .unwrap();
    }
}
