//! Tag handlers.
//!
//! ```text
//! GET    /api/v1/tags
//! POST   /api/v1/tags        {"name":"Breakfast"}
//! PATCH  /api/v1/tags/{id}   {"name":"Dessert"}
//! PUT    /api/v1/tags/{id}   {"name":"Dessert"}
//! DELETE /api/v1/tags/{id}
//! ```
//!
//! Every handler resolves the caller from the session before it looks at the
//! path or body, so an anonymous request is `401` whatever it carries. An id
//! that is not a positive integer cannot name a tag and is reported as not
//! found.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Tag, TagChanges, TagId, TagName};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error, tag_name_error};

const NAME: FieldName = FieldName::new("name");

/// Tag representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TagResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Dessert")]
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id().get(),
            name: tag.name().to_string(),
        }
    }
}

/// Request body for creating, replacing or patching a tag.
///
/// `name` is required for `POST` and `PUT` and optional for `PATCH`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct TagRequest {
    #[serde(default)]
    #[schema(example = "Dessert", max_length = 255)]
    pub name: Option<String>,
}

impl TagRequest {
    fn changes(self) -> Result<TagChanges, Error> {
        let name = self
            .name
            .map(TagName::new)
            .transpose()
            .map_err(|err| tag_name_error(NAME, err))?;
        Ok(TagChanges { name })
    }

    fn required_name(self) -> Result<TagName, Error> {
        self.changes()?.name.ok_or_else(|| missing_field_error(NAME))
    }
}

fn decode_request(body: &[u8]) -> Result<TagRequest, Error> {
    serde_json::from_slice(body)
        .map_err(|err| Error::invalid_request(format!("invalid JSON body: {err}")))
}

fn parse_tag_id(raw: &str) -> Result<TagId, Error> {
    raw.parse().map_err(|_| Error::not_found("tag not found"))
}

/// List the caller's tags, ordered by name descending.
#[utoipa::path(
    get,
    path = "/api/v1/tags",
    responses(
        (status = 200, description = "Caller's tags", body = [TagResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["tags"],
    operation_id = "listTags"
)]
#[get("/tags")]
pub async fn list_tags(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<TagResponse>>> {
    let owner = session.require_user_id()?;
    let tags = state.tags_query.list_tags(&owner).await?;
    Ok(web::Json(tags.into_iter().map(TagResponse::from).collect()))
}

/// Create a tag owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/tags",
    request_body = TagRequest,
    responses(
        (status = 201, description = "Tag created", body = TagResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["tags"],
    operation_id = "createTag"
)]
#[post("/tags")]
pub async fn create_tag(
    state: web::Data<HttpState>,
    session: SessionContext,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let owner = session.require_user_id()?;
    let name = decode_request(&body)?.required_name()?;
    let tag = state.tags_command.create_tag(&owner, name).await?;
    Ok(HttpResponse::Created().json(TagResponse::from(tag)))
}

/// Partially update one of the caller's tags.
///
/// Omitted fields keep their stored values.
#[utoipa::path(
    patch,
    path = "/api/v1/tags/{tag_id}",
    params(("tag_id" = i64, Path, description = "Tag identifier")),
    request_body = TagRequest,
    responses(
        (status = 200, description = "Updated tag", body = TagResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "No such tag for the caller", body = ErrorSchema)
    ),
    tags = ["tags"],
    operation_id = "updateTag"
)]
#[patch("/tags/{tag_id}")]
pub async fn update_tag(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<TagResponse>> {
    let owner = session.require_user_id()?;
    let id = parse_tag_id(&path)?;
    let changes = decode_request(&body)?.changes()?;
    let tag = state.tags_command.update_tag(&owner, id, changes).await?;
    Ok(web::Json(tag.into()))
}

/// Replace one of the caller's tags. `name` is required.
#[utoipa::path(
    put,
    path = "/api/v1/tags/{tag_id}",
    params(("tag_id" = i64, Path, description = "Tag identifier")),
    request_body = TagRequest,
    responses(
        (status = 200, description = "Updated tag", body = TagResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "No such tag for the caller", body = ErrorSchema)
    ),
    tags = ["tags"],
    operation_id = "replaceTag"
)]
#[put("/tags/{tag_id}")]
pub async fn replace_tag(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<web::Json<TagResponse>> {
    let owner = session.require_user_id()?;
    let id = parse_tag_id(&path)?;
    let name = decode_request(&body)?.required_name()?;
    let tag = state
        .tags_command
        .update_tag(&owner, id, TagChanges::rename(name))
        .await?;
    Ok(web::Json(tag.into()))
}

/// Permanently delete one of the caller's tags.
#[utoipa::path(
    delete,
    path = "/api/v1/tags/{tag_id}",
    params(("tag_id" = i64, Path, description = "Tag identifier")),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "No such tag for the caller", body = ErrorSchema)
    ),
    tags = ["tags"],
    operation_id = "deleteTag"
)]
#[delete("/tags/{tag_id}")]
pub async fn delete_tag(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let owner = session.require_user_id()?;
    let id = parse_tag_id(&path)?;
    state.tags_command.delete_tag(&owner, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
