//! Role permission service.
//!
//! Owns the operational policy of the role permission module: lookups,
//! pagination, audit stamping and the classification of storage faults into
//! the API error taxonomy. Route handlers render service results, they never
//! re-classify errors.

use domain::models::{RolePermission, RolePermissionFilter};
use persistence::entities::{entity_from_model, model_from_entity};
use persistence::repositories::RolePermissionStore;
use shared::pagination::Page;
use tracing::{debug, warn};

use crate::error::ApiError;

/// Service for role permission operations, generic over its storage
/// collaborator.
pub struct RolePermissionService<S: RolePermissionStore> {
    store: S,
}

impl<S: RolePermissionStore> RolePermissionService<S> {
    /// Create a new service instance.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fetch a single role permission by primary key.
    ///
    /// Absence of a primary key is exceptional and reported as NotFound.
    pub async fn find_by_id(&self, id: i64) -> Result<RolePermission, ApiError> {
        debug!(id, "Fetching role permission by id");
        let entity = self.store.find_by_id(id).await?;

        match model_from_entity(entity) {
            Some(model) => {
                debug!(id, "Role permission found");
                Ok(model)
            }
            None => {
                warn!(id, "Role permission not found");
                Err(ApiError::NotFound("Role permission not found".to_string()))
            }
        }
    }

    /// Fetch the first record matching the filter.
    ///
    /// Unlike `find_by_id`, no match here is a normal empty result, not an
    /// error.
    pub async fn find_by_fields(
        &self,
        filter: &RolePermissionFilter,
    ) -> Result<Option<RolePermission>, ApiError> {
        debug!(?filter, "Fetching role permission by fields");
        let entity = self.store.find_one(filter).await?;
        debug!(found = entity.is_some(), "Role permission field lookup finished");
        Ok(model_from_entity(entity))
    }

    /// Fetch one page of records ordered by id descending (newest first),
    /// together with pagination metadata.
    ///
    /// `page` is one-based. Defaulting and clamping of the page parameters
    /// is the caller's responsibility; no clamping happens here.
    pub async fn find_and_count(
        &self,
        page: i64,
        limit: i64,
    ) -> Result<Page<RolePermission>, ApiError> {
        debug!(page, limit, "Fetching role permission page");
        let (entities, total) = self.store.find_page(page, limit).await?;

        let items: Vec<RolePermission> = entities
            .into_iter()
            .filter_map(|entity| model_from_entity(Some(entity)))
            .collect();

        debug!(total, count = items.len(), "Role permission page fetched");
        Ok(Page::new(items, total, limit, page))
    }

    /// Persist a new role permission and return it with its generated id.
    ///
    /// When a creator is supplied, `created_by` is stamped only if not
    /// already set on the incoming model; `updated_by` is always stamped.
    pub async fn save(
        &self,
        model: RolePermission,
        creator: Option<&str>,
    ) -> Result<RolePermission, ApiError> {
        debug!(
            role_id = model.role_id,
            permission_id = %model.permission_id,
            "Saving role permission"
        );

        let mut entity = entity_from_model(Some(&model)).ok_or_else(|| {
            ApiError::Internal("Failed to convert role permission for saving".to_string())
        })?;

        if let Some(actor) = creator {
            if entity.created_by.is_none() {
                entity.created_by = Some(actor.to_string());
            }
            entity.updated_by = Some(actor.to_string());
        }

        let saved = self.store.save(entity).await?;
        debug!(id = ?saved.id, "Role permission saved");

        model_from_entity(Some(saved)).ok_or_else(|| {
            ApiError::Internal("Failed to convert saved role permission".to_string())
        })
    }

    /// Replace an existing role permission.
    ///
    /// The id is required; an unset or zero id is rejected before any
    /// storage call. The existence check only provides fail-fast behavior,
    /// the subsequent save fully replaces the row's data fields with the
    /// model's values (no field-level merge). The check and the write are
    /// not wrapped in a transaction, so a concurrent delete can still race
    /// the save.
    pub async fn update(
        &self,
        model: RolePermission,
        updater: Option<&str>,
        id: Option<i64>,
    ) -> Result<RolePermission, ApiError> {
        let id = match id.filter(|id| *id != 0) {
            Some(id) => id,
            None => {
                warn!("Role permission update requested without an id");
                return Err(ApiError::Validation("ID is required for update".to_string()));
            }
        };

        debug!(id, "Updating role permission");

        if self.store.find_by_id(id).await?.is_none() {
            warn!(id, "Role permission to update not found");
            return Err(ApiError::NotFound("Role permission not found".to_string()));
        }

        let mut entity = entity_from_model(Some(&model)).ok_or_else(|| {
            ApiError::Internal("Failed to convert role permission for update".to_string())
        })?;
        entity.id = Some(id);

        if let Some(actor) = updater {
            entity.updated_by = Some(actor.to_string());
        }

        let saved = self.store.save(entity).await?;
        debug!(id, "Role permission updated");

        model_from_entity(Some(saved)).ok_or_else(|| {
            ApiError::Internal("Failed to convert updated role permission".to_string())
        })
    }

    /// Delete a role permission by primary key.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ApiError> {
        debug!(id, "Deleting role permission");
        let affected = self.store.delete_by_id(id).await?;

        if affected == 0 {
            warn!(id, "Role permission to delete not found");
            return Err(ApiError::NotFound("Role permission not found".to_string()));
        }

        debug!(id, "Role permission deleted");
        Ok(())
    }

    /// Fetch every grant for a role, in storage order.
    ///
    /// A role with no grants yields an empty list, never an error.
    pub async fn find_by_role_id(&self, role_id: i64) -> Result<Vec<RolePermission>, ApiError> {
        debug!(role_id, "Fetching role permissions for role");
        let entities = self.store.find_by_role_id(role_id).await?;

        let models: Vec<RolePermission> = entities
            .into_iter()
            .filter_map(|entity| model_from_entity(Some(entity)))
            .collect();

        debug!(role_id, count = models.len(), "Role permissions fetched for role");
        Ok(models)
    }
}
