//! Role permission routes.
//!
//! Thin HTTP adapter over the role permission service: parses and defaults
//! request input, renders service results into the per-endpoint response
//! envelopes. Error classification lives in the service.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Actor;
use crate::services::RolePermissionService;
use domain::models::{ListRolePermissionsQuery, RolePermission, UpsertRolePermissionRequest};
use persistence::repositories::RolePermissionRepository;

/// Default page size for the list endpoint.
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on the caller-supplied page size.
const MAX_PAGE_SIZE: i64 = 100;

/// Create the role permission router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(list_role_permissions))
        .route("/role/:role_id", get(get_role_permissions_by_role))
        .route("/", post(create_role_permission))
        .route(
            "/:id",
            get(get_role_permission)
                .put(update_role_permission)
                .delete(delete_role_permission),
        )
}

fn service(state: &AppState) -> RolePermissionService<RolePermissionRepository> {
    RolePermissionService::new(RolePermissionRepository::new(state.pool.clone()))
}

/// Resolves the wire page parameters: zero-based `page` (negative rejected)
/// becomes the one-based page the pagination expects, `limit` is defaulted
/// and clamped.
fn resolve_page_params(query: &ListRolePermissionsQuery) -> Result<(i64, i64), ApiError> {
    let page = query.page.unwrap_or(0);
    if page < 0 {
        return Err(ApiError::Validation("page must be zero or greater".to_string()));
    }

    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    Ok((page + 1, limit))
}

/// List role permissions, newest first.
#[axum::debug_handler]
pub async fn list_role_permissions(
    State(state): State<AppState>,
    Query(query): Query<ListRolePermissionsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let (page, limit) = resolve_page_params(&query)?;

    let result = service(&state).find_and_count(page, limit).await?;

    if result.items.is_empty() {
        return Err(ApiError::NotFound("No role permissions found".to_string()));
    }

    Ok((StatusCode::OK, Json(result)))
}

/// Get a single role permission by id.
#[axum::debug_handler]
pub async fn get_role_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let record = service(&state).find_by_id(id).await?;
    Ok((StatusCode::OK, Json(record)))
}

/// Get every grant for a role. An empty list is a valid result.
#[axum::debug_handler]
pub async fn get_role_permissions_by_role(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let records = service(&state).find_by_role_id(role_id).await?;
    Ok((StatusCode::OK, Json(records)))
}

/// Create a role permission.
#[axum::debug_handler]
pub async fn create_role_permission(
    State(state): State<AppState>,
    Actor(actor): Actor,
    Json(req): Json<UpsertRolePermissionRequest>,
) -> Response {
    if let Err(errors) = req.validate() {
        return create_failure(ApiError::from(errors));
    }

    match service(&state).save(req.into_model(), Some(&actor)).await {
        Ok(data) => (
            StatusCode::CREATED,
            Json(SavedBody {
                message: "Role permission created successfully".to_string(),
                data,
            }),
        )
            .into_response(),
        Err(err) => create_failure(err),
    }
}

/// Update a role permission, fully replacing its data fields.
#[axum::debug_handler]
pub async fn update_role_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Actor(actor): Actor,
    Json(req): Json<UpsertRolePermissionRequest>,
) -> Response {
    if let Err(errors) = req.validate() {
        return update_failure(ApiError::from(errors));
    }

    match service(&state)
        .update(req.into_model(), Some(&actor), Some(id))
        .await
    {
        Ok(data) => (
            StatusCode::OK,
            Json(SavedBody {
                message: "Role permission updated successfully".to_string(),
                data,
            }),
        )
            .into_response(),
        Err(err) => update_failure(err),
    }
}

/// Delete a role permission by id.
///
/// Anything other than a missing record collapses into a generic 500; the
/// message shapes here are part of the external contract.
#[axum::debug_handler]
pub async fn delete_role_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match service(&state).delete_by_id(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageBody {
                message: "Role permission deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(ApiError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(MessageBody {
                message: "Record not found".to_string(),
            }),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageBody {
                message: "Failed to delete role permission".to_string(),
            }),
        )
            .into_response(),
    }
}

fn create_failure(err: ApiError) -> Response {
    (
        err.status_code(),
        Json(MessageBody {
            message: err.public_message(),
        }),
    )
        .into_response()
}

// The update failure envelope differs from the create one on purpose;
// external clients depend on both shapes as-is.
fn update_failure(err: ApiError) -> Response {
    let status = err.status_code();
    (
        status,
        Json(UpdateFailureBody {
            success: false,
            message: err.public_message(),
            status_code: status.as_u16(),
        }),
    )
        .into_response()
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct SavedBody {
    message: String,
    data: RolePermission,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateFailureBody {
    success: bool,
    message: String,
    status_code: u16,
}
