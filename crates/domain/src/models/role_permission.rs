//! Role permission domain models.
//!
//! A role permission is a grant row asserting whether a role holds a named
//! permission capability. Both grants (`value_yn = true`) and explicit
//! denials (`value_yn = false`) are stored. The same (`role_id`,
//! `permission_id`) pair may appear more than once; no uniqueness is
//! enforced at this layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The externally exposed role-permission shape.
///
/// `id` is absent until the record has been persisted. Audit fields and
/// timestamps are populated by the service/storage layers and travel with
/// the record on reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub role_id: i64,
    pub permission_id: String,
    pub value_yn: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating or replacing a role permission.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertRolePermissionRequest {
    #[validate(range(min = 1, message = "roleId must be a positive integer"))]
    pub role_id: i64,
    #[validate(length(min = 1, max = 128, message = "permissionId must be 1-128 characters"))]
    pub permission_id: String,
    pub value_yn: bool,
}

impl UpsertRolePermissionRequest {
    /// Converts the request into a transfer object with no identity or
    /// audit information attached.
    pub fn into_model(self) -> RolePermission {
        RolePermission {
            id: None,
            role_id: self.role_id,
            permission_id: self.permission_id,
            value_yn: self.value_yn,
            created_by: None,
            updated_by: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Field-level filter for single-record lookups.
///
/// All fields are optional; unset fields do not constrain the match.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissionFilter {
    pub role_id: Option<i64>,
    pub permission_id: Option<String>,
    pub value_yn: Option<bool>,
}

/// Query parameters for the paginated list endpoint.
///
/// `page` is zero-based on the wire; defaulting and clamping happen at the
/// controller boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRolePermissionsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_role_permission_serializes_camel_case() {
        let model = RolePermission {
            id: Some(7),
            role_id: 5,
            permission_id: "VIEW_REPORTS".to_string(),
            value_yn: true,
            created_by: Some("alice".to_string()),
            updated_by: Some("alice".to_string()),
            created_at: None,
            updated_at: None,
        };

        let json = serde_json::to_string(&model).unwrap();
        assert!(json.contains("\"roleId\":5"));
        assert!(json.contains("\"permissionId\":\"VIEW_REPORTS\""));
        assert!(json.contains("\"valueYn\":true"));
        assert!(json.contains("\"createdBy\":\"alice\""));
    }

    #[test]
    fn test_role_permission_absent_id_is_omitted() {
        let model = RolePermission {
            id: None,
            role_id: 1,
            permission_id: "EDIT".to_string(),
            value_yn: false,
            created_by: None,
            updated_by: None,
            created_at: None,
            updated_at: None,
        };

        let json = serde_json::to_string(&model).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("\"createdBy\""));
    }

    #[test]
    fn test_upsert_request_deserializes_wire_names() {
        let req: UpsertRolePermissionRequest = serde_json::from_str(
            r#"{"roleId": 3, "permissionId": "APPROVE_LEAVE", "valueYn": false}"#,
        )
        .unwrap();

        assert_eq!(req.role_id, 3);
        assert_eq!(req.permission_id, "APPROVE_LEAVE");
        assert!(!req.value_yn);
    }

    #[test]
    fn test_upsert_request_validation() {
        let valid = UpsertRolePermissionRequest {
            role_id: 1,
            permission_id: "VIEW".to_string(),
            value_yn: true,
        };
        assert!(valid.validate().is_ok());

        let bad_role = UpsertRolePermissionRequest {
            role_id: 0,
            permission_id: "VIEW".to_string(),
            value_yn: true,
        };
        assert!(bad_role.validate().is_err());

        let empty_permission = UpsertRolePermissionRequest {
            role_id: 1,
            permission_id: String::new(),
            value_yn: true,
        };
        assert!(empty_permission.validate().is_err());
    }

    #[test]
    fn test_into_model_carries_no_identity() {
        let req = UpsertRolePermissionRequest {
            role_id: 9,
            permission_id: "EXPORT".to_string(),
            value_yn: true,
        };

        let model = req.into_model();
        assert_eq!(model.id, None);
        assert_eq!(model.role_id, 9);
        assert_eq!(model.created_by, None);
        assert_eq!(model.updated_by, None);
    }

    #[test]
    fn test_filter_default_is_unconstrained() {
        let filter = RolePermissionFilter::default();
        assert_eq!(filter.role_id, None);
        assert_eq!(filter.permission_id, None);
        assert_eq!(filter.value_yn, None);
    }
}
