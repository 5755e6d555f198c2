pub mod account;
pub mod clients;
pub mod contacts;
pub mod expense_categories;
pub mod expenses;
pub(crate) mod path;
pub mod projects;
pub mod reports;
pub mod task_assignments;
pub mod tasks;
pub mod time;
pub mod user_assignments;
pub mod users;

use async_trait::async_trait;
use reqwest::{header, Body, Method, Response};
use serde_json::Value;

use crate::client::{ApiClient, Error};
use crate::model::{Resource, Toggleable};

/// Convert an HTTP response with a non-2xx status to an [`Error`], following
/// the classic API's conventions (503 carries a `Retry-After` header while
/// the account is throttled).
pub(crate) async fn status_unwrap(resp: Response) -> Result<Response, Error> {
    match resp.status().as_u16() {
        code if (200..300).contains(&code) => Ok(resp),
        400 => Err(Error::BadRequest(resp.text().await?)),
        401 => Err(Error::AuthenticationFailed),
        404 => Err(Error::NotFound),
        503 => {
            let retry_after = resp
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            Err(Error::RateLimited(retry_after))
        }
        code => Err(Error::ErrorResponse(code, resp.text().await?)),
    }
}

/// Takes the payload out of its JSON root key, e.g. `{"client": {...}}`.
pub(crate) fn from_root<T: Resource>(mut value: Value) -> Result<T, Error> {
    let inner = value
        .get_mut(T::ROOT)
        .map(Value::take)
        .ok_or(Error::MissingRoot(T::ROOT))?;

    Ok(serde_json::from_value(inner)?)
}

/// Wraps a model in its JSON root key for a request body.
pub(crate) fn to_wrapped_body<T: Resource>(model: &T) -> Result<Body, Error> {
    let body = serde_json::to_vec(&serde_json::json!({ T::ROOT: model }))?;

    Ok(Body::from(body))
}

pub(crate) async fn fetch_one<T: Resource>(client: &ApiClient, path: String) -> Result<T, Error> {
    let req = client.new_request(Method::GET, path, None)?;

    let resp = client.request(req).await?;
    let ok_resp = status_unwrap(resp).await?;
    let value = ok_resp.json().await?;

    from_root(value)
}

pub(crate) async fn fetch_list<T: Resource>(
    client: &ApiClient,
    path: String,
) -> Result<Vec<T>, Error> {
    let req = client.new_request(Method::GET, path, None)?;

    let resp = client.request(req).await?;
    let ok_resp = status_unwrap(resp).await?;
    if let Some(0) = ok_resp.content_length() {
        return Ok(Vec::new());
    }
    let values: Vec<Value> = ok_resp.json().await?;

    values.into_iter().map(from_root).collect()
}

/// POST a wrapped model. The classic API answers `201` with a
/// `Location: /clients/123` header and no usable body; returns the new id.
pub(crate) async fn create_returning_id<T: Resource>(
    client: &ApiClient,
    path: String,
    model: &T,
) -> Result<i64, Error> {
    let req = client.new_request(Method::POST, path, Some(to_wrapped_body(model)?))?;

    let resp = client.request(req).await?;
    let ok_resp = status_unwrap(resp).await?;

    id_from_location(&ok_resp)
}

pub(crate) fn id_from_location(resp: &Response) -> Result<i64, Error> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|loc| loc.trim_end_matches('/').rsplit('/').next())
        .and_then(|segment| segment.parse().ok())
        .ok_or(Error::MissingLocation)
}

pub(crate) async fn put_wrapped<T: Resource>(
    client: &ApiClient,
    path: String,
    model: &T,
) -> Result<(), Error> {
    let req = client.new_request(Method::PUT, path, Some(to_wrapped_body(model)?))?;

    let resp = client.request(req).await?;
    let _ = status_unwrap(resp).await?;

    Ok(())
}

pub(crate) async fn delete(client: &ApiClient, path: String) -> Result<(), Error> {
    let req = client.new_request(Method::DELETE, path, None)?;

    let resp = client.request(req).await?;
    let _ = status_unwrap(resp).await?;

    Ok(())
}

pub(crate) async fn post_empty(client: &ApiClient, path: String) -> Result<(), Error> {
    let req = client.new_request(Method::POST, path, None)?;

    let resp = client.request(req).await?;
    let _ = status_unwrap(resp).await?;

    Ok(())
}

/// Uniform CRUD over a flat collection endpoint, shared by most resource
/// clients. Create and update re-fetch the saved model, so callers always
/// get the server's version back.
#[async_trait]
pub trait Crud: Sync {
    type Model: Resource + Send + Sync;

    fn api(&self) -> &ApiClient;

    /// Collection path of the resource, e.g. `/clients`.
    fn base_path(&self) -> String;

    fn member_path(&self, id: i64) -> String {
        format!("{}/{}", self.base_path(), id)
    }

    /// Retrieves every model in the collection.
    async fn list(&self) -> Result<Vec<Self::Model>, Error> {
        fetch_list(self.api(), self.base_path()).await
    }

    /// Retrieves the model with the given id.
    async fn find(&self, id: i64) -> Result<Self::Model, Error> {
        fetch_one(self.api(), self.member_path(id)).await
    }

    /// Saves a new model and returns the stored version.
    async fn create(&self, model: &Self::Model) -> Result<Self::Model, Error> {
        let id = create_returning_id(self.api(), self.base_path(), model).await?;

        self.find(id).await
    }

    /// Pushes local changes of a saved model and returns the stored version.
    async fn update(&self, model: &Self::Model) -> Result<Self::Model, Error> {
        let id = model.id().ok_or(Error::MissingId)?;
        put_wrapped(self.api(), self.member_path(id), model).await?;

        self.find(id).await
    }

    /// Deletes a saved model, returning its id.
    async fn delete(&self, model: &Self::Model) -> Result<i64, Error> {
        let id = model.id().ok_or(Error::MissingId)?;
        delete(self.api(), self.member_path(id)).await?;

        Ok(id)
    }
}

/// Activation toggling for resources carrying an active flag. The API only
/// exposes a flip (`POST {member}/toggle`), so both directions guard on the
/// model's current state before issuing it.
#[async_trait]
pub trait Activatable: Crud
where
    Self::Model: Toggleable,
{
    async fn activate(&self, model: &Self::Model) -> Result<Self::Model, Error> {
        let id = model.id().ok_or(Error::MissingId)?;
        if !model.is_active() {
            post_empty(self.api(), format!("{}/toggle", self.member_path(id))).await?;
        }

        self.find(id).await
    }

    async fn deactivate(&self, model: &Self::Model) -> Result<Self::Model, Error> {
        let id = model.id().ok_or(Error::MissingId)?;
        if model.is_active() {
            post_empty(self.api(), format!("{}/toggle", self.member_path(id))).await?;
        }

        self.find(id).await
    }
}
