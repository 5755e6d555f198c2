//! User assignment APIs
//!
//! Same shape as task assignments: scoped to the owning project.
use std::sync::Arc;

use crate::api::{create_returning_id, delete, fetch_list, fetch_one, path, put_wrapped};
use crate::client::{ApiClient, Credentials, Error};
use crate::model::{Resource, UserAssignment};

pub struct UserAssignments {
    client: Arc<ApiClient>,
}

impl UserAssignments {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        UserAssignments { client }
    }

    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }

    fn member_path(&self, project_id: i64, id: i64) -> String {
        format!("{}/{}", path::user_assignments_path(project_id), id)
    }

    /// Retrieves all user assignments of the project.
    pub async fn list(&self, project_id: i64) -> Result<Vec<UserAssignment>, Error> {
        fetch_list(&self.client, path::user_assignments_path(project_id)).await
    }

    pub async fn find(&self, project_id: i64, id: i64) -> Result<UserAssignment, Error> {
        fetch_one(&self.client, self.member_path(project_id, id)).await
    }

    /// Puts a user on the project and returns the stored assignment.
    pub async fn create(&self, assignment: &UserAssignment) -> Result<UserAssignment, Error> {
        let id = create_returning_id(
            &self.client,
            path::user_assignments_path(assignment.project_id),
            assignment,
        )
        .await?;

        self.find(assignment.project_id, id).await
    }

    pub async fn update(&self, assignment: &UserAssignment) -> Result<UserAssignment, Error> {
        let id = assignment.id().ok_or(Error::MissingId)?;
        put_wrapped(
            &self.client,
            self.member_path(assignment.project_id, id),
            assignment,
        )
        .await?;

        self.find(assignment.project_id, id).await
    }

    /// Takes the user off the project, returning the assignment id.
    pub async fn delete(&self, assignment: &UserAssignment) -> Result<i64, Error> {
        let id = assignment.id().ok_or(Error::MissingId)?;
        delete(&self.client, self.member_path(assignment.project_id, id)).await?;

        Ok(id)
    }
}
