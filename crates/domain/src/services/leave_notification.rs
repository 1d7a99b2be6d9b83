//! Leave-request notification templates.
//!
//! Pure template builders for the request lifecycle emails sent to employees
//! and admins. Rendering only; dispatching is owned by an external
//! notification service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle events of a leave request that trigger a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveRequestEvent {
    Submitted,
    Approved,
    Rejected,
    Cancelled,
    ReturnedForCorrection,
}

impl LeaveRequestEvent {
    /// Human-readable status label used in subjects and bodies.
    pub fn status_label(&self) -> &'static str {
        match self {
            LeaveRequestEvent::Submitted => "submitted",
            LeaveRequestEvent::Approved => "approved",
            LeaveRequestEvent::Rejected => "rejected",
            LeaveRequestEvent::Cancelled => "cancelled",
            LeaveRequestEvent::ReturnedForCorrection => "returned for correction",
        }
    }

    /// All lifecycle events, in submission-to-terminal order.
    pub fn all() -> &'static [LeaveRequestEvent] {
        &[
            LeaveRequestEvent::Submitted,
            LeaveRequestEvent::Approved,
            LeaveRequestEvent::Rejected,
            LeaveRequestEvent::Cancelled,
            LeaveRequestEvent::ReturnedForCorrection,
        ]
    }
}

impl std::fmt::Display for LeaveRequestEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status_label())
    }
}

/// The request details a notification is rendered from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestNotice {
    pub employee_name: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A rendered notification: subject plus plain-text and HTML bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailContent {
    pub subject: String,
    pub body_text: String,
    pub body_html: String,
}

/// Renders the employee-facing notification for a lifecycle event.
pub fn employee_notification(event: LeaveRequestEvent, notice: &LeaveRequestNotice) -> EmailContent {
    let subject = format!(
        "Your leave request was {} - Leave Manager",
        event.status_label()
    );

    let intro = match event {
        LeaveRequestEvent::Submitted => format!(
            "We received your {} request and passed it on for review.",
            notice.leave_type
        ),
        LeaveRequestEvent::Approved => {
            format!("Good news! Your {} request has been approved.", notice.leave_type)
        }
        LeaveRequestEvent::Rejected => {
            format!("Unfortunately your {} request has been rejected.", notice.leave_type)
        }
        LeaveRequestEvent::Cancelled => {
            format!("Your {} request has been cancelled.", notice.leave_type)
        }
        LeaveRequestEvent::ReturnedForCorrection => format!(
            "Your {} request was returned for correction. Please review the comments below, update the request and resubmit it.",
            notice.leave_type
        ),
    };

    let body_text = format!(
        r#"Hi {name},

{intro}

{details}
If you have any questions, please contact your administrator.

Best regards,
The Leave Manager Team"#,
        name = notice.employee_name,
        intro = intro,
        details = details_text(notice),
    );

    let body_html = render_html(
        &format!("Request {}", event.status_label()),
        &notice.employee_name,
        &intro,
        notice,
    );

    EmailContent {
        subject,
        body_text,
        body_html,
    }
}

/// Renders the admin-facing alert for a newly submitted request.
pub fn admin_notification(notice: &LeaveRequestNotice) -> EmailContent {
    let subject = format!(
        "New leave request from {} - Leave Manager",
        notice.employee_name
    );

    let intro = format!(
        "{} submitted a {} request that is waiting for review.",
        notice.employee_name, notice.leave_type
    );

    let body_text = format!(
        r#"Hi,

{intro}

{details}
Please review the request in the admin panel.

Best regards,
The Leave Manager Team"#,
        intro = intro,
        details = details_text(notice),
    );

    let body_html = render_html("New leave request", "there", &intro, notice);

    EmailContent {
        subject,
        body_text,
        body_html,
    }
}

/// Plain-text details block shared by all templates.
fn details_text(notice: &LeaveRequestNotice) -> String {
    let mut details = format!(
        "Type: {}\nFrom: {}\nTo: {}\n",
        notice.leave_type,
        notice.start_date.format("%Y-%m-%d"),
        notice.end_date.format("%Y-%m-%d"),
    );

    if let Some(reason) = &notice.reason {
        details.push_str(&format!("Reason: {}\n", reason));
    }
    if let Some(reviewer) = &notice.reviewer_name {
        details.push_str(&format!("Reviewed by: {}\n", reviewer));
    }
    if let Some(comment) = &notice.comment {
        details.push_str(&format!("Comment: {}\n", comment));
    }

    details
}

/// HTML details rows shared by all templates.
fn details_html(notice: &LeaveRequestNotice) -> String {
    let mut rows = format!(
        "<li><strong>Type:</strong> {}</li><li><strong>From:</strong> {}</li><li><strong>To:</strong> {}</li>",
        notice.leave_type,
        notice.start_date.format("%Y-%m-%d"),
        notice.end_date.format("%Y-%m-%d"),
    );

    if let Some(reason) = &notice.reason {
        rows.push_str(&format!("<li><strong>Reason:</strong> {}</li>", reason));
    }
    if let Some(reviewer) = &notice.reviewer_name {
        rows.push_str(&format!("<li><strong>Reviewed by:</strong> {}</li>", reviewer));
    }

    let mut block = format!(
        r#"<ul style="list-style: none; padding: 16px; margin: 20px 0; background: #fff; border: 1px solid #eee; border-radius: 6px;">{}</ul>"#,
        rows
    );

    if let Some(comment) = &notice.comment {
        block.push_str(&format!(
            r#"<blockquote style="margin: 20px 0; padding: 12px 16px; background: #fff; border-left: 4px solid #667eea; color: #555;">{}</blockquote>"#,
            comment
        ));
    }

    block
}

fn render_html(heading: &str, recipient: &str, intro: &str, notice: &LeaveRequestNotice) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{heading}</title>
</head>
<body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); padding: 30px; border-radius: 10px 10px 0 0;">
        <h1 style="color: white; margin: 0; font-size: 24px;">Leave Manager</h1>
    </div>
    <div style="background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
        <h2 style="color: #333; margin-top: 0;">{heading}</h2>
        <p>Hi {recipient},</p>
        <p>{intro}</p>
        {details}
        <p style="color: #666; font-size: 14px;">If you have any questions, please contact your administrator.</p>
        <hr style="border: none; border-top: 1px solid #ddd; margin: 30px 0;">
        <p style="color: #999; font-size: 12px;">This is an automated notification from Leave Manager.</p>
    </div>
</body>
</html>"#,
        heading = heading,
        recipient = recipient,
        intro = intro,
        details = details_html(notice),
    )
}
