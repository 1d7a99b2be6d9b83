//! Domain services for the Leave Manager backend.
//!
//! Services contain pure logic that operates on domain models.

pub mod leave_notification;

pub use leave_notification::{
    admin_notification, employee_notification, EmailContent, LeaveRequestEvent, LeaveRequestNotice,
};
