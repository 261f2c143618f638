//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! adapters, plus the services implementing the driving ports.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: API error payload and stable identifier.
//! - [`Tag`], [`TagId`], [`TagName`], [`TagChanges`]: the tag aggregate.
//! - [`UserId`]: caller identity scoping every tag operation.
//! - [`LoginCredentials`], [`Account`]: login inputs and configured accounts.
//! - [`TagsService`]: tag use-cases over a [`ports::TagRepository`].

pub mod auth;
pub mod error;
pub mod ports;
pub mod tag;
pub mod tags_service;
pub mod trace_id;
pub mod user;

pub use self::auth::{Account, LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::tag::{
    ParseTagIdError, TAG_NAME_MAX, Tag, TagChanges, TagId, TagName, TagValidationError,
    listing_order,
};
pub use self::tags_service::TagsService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use recipe_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("tag not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
