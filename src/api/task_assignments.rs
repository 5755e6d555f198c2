//! Task assignment APIs
//!
//! Assignments only exist inside a project, so every operation takes the
//! owning project id and the flat [`Crud`](crate::api::Crud) behavior does
//! not apply.
use std::sync::Arc;

use crate::api::{create_returning_id, delete, fetch_list, fetch_one, path, put_wrapped};
use crate::client::{ApiClient, Credentials, Error};
use crate::model::{Resource, TaskAssignment};

pub struct TaskAssignments {
    client: Arc<ApiClient>,
}

impl TaskAssignments {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        TaskAssignments { client }
    }

    pub fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }

    fn member_path(&self, project_id: i64, id: i64) -> String {
        format!("{}/{}", path::task_assignments_path(project_id), id)
    }

    /// Retrieves all task assignments of the project.
    pub async fn list(&self, project_id: i64) -> Result<Vec<TaskAssignment>, Error> {
        fetch_list(&self.client, path::task_assignments_path(project_id)).await
    }

    pub async fn find(&self, project_id: i64, id: i64) -> Result<TaskAssignment, Error> {
        fetch_one(&self.client, self.member_path(project_id, id)).await
    }

    /// Assigns a task to the project and returns the stored assignment.
    pub async fn create(&self, assignment: &TaskAssignment) -> Result<TaskAssignment, Error> {
        let id = create_returning_id(
            &self.client,
            path::task_assignments_path(assignment.project_id),
            assignment,
        )
        .await?;

        self.find(assignment.project_id, id).await
    }

    pub async fn update(&self, assignment: &TaskAssignment) -> Result<TaskAssignment, Error> {
        let id = assignment.id().ok_or(Error::MissingId)?;
        put_wrapped(
            &self.client,
            self.member_path(assignment.project_id, id),
            assignment,
        )
        .await?;

        self.find(assignment.project_id, id).await
    }

    /// Removes the assignment from its project, returning the assignment id.
    pub async fn delete(&self, assignment: &TaskAssignment) -> Result<i64, Error> {
        let id = assignment.id().ok_or(Error::MissingId)?;
        delete(&self.client, self.member_path(assignment.project_id, id)).await?;

        Ok(id)
    }
}
