//! CLI output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::api::models::{
    AccessRequestStatus, AccessRequestWithDetails, NotificationWithDetails, PermissionWithDetails,
    User, VideoWithCreator, VideoWithPermission,
};
use crate::api::{AdminDashboardStats, StudentDashboardStats};
use crate::router::RouteMeta;
use crate::toast::{Severity, Toast, ToastQueue};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn warn(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

fn print_toast(toast: &Toast) {
    match toast.severity {
        Severity::Success => success(&toast.title),
        Severity::Error => error(&toast.title),
        Severity::Warning => warn(&toast.title),
        Severity::Info => info(&toast.title),
    }
    if let Some(description) = &toast.description {
        println!("  {}", description);
    }
}

/// Drain a toast queue to the terminal. The terminal has no expiry timer,
/// so every toast is rendered immediately and removed.
pub fn render_toasts(queue: &mut ToastQueue) {
    for toast in queue.drain() {
        print_toast(&toast);
    }
}

fn status_color(status: AccessRequestStatus) -> Color {
    match status {
        AccessRequestStatus::Approved => Color::Green,
        AccessRequestStatus::Rejected => Color::Red,
        AccessRequestStatus::Pending => Color::Yellow,
    }
}

fn header(table: &mut Table, columns: Vec<&str>) {
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            columns
                .into_iter()
                .map(|column| Cell::new(column).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
}

fn format_date(date: &chrono::DateTime<chrono::Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

/// Print the admin view of the video catalog
pub fn print_video_table(videos: &[VideoWithCreator]) {
    if videos.is_empty() {
        info("No videos found");
        return;
    }

    let mut table = Table::new();
    header(&mut table, vec!["ID", "Title", "Creator", "Created"]);

    for video in videos {
        table.add_row(vec![
            Cell::new(&video.video.id),
            Cell::new(&video.video.title),
            Cell::new(&video.creator.name),
            Cell::new(format_date(&video.video.created_at)),
        ]);
    }

    println!("{table}");
}

/// Print the student view of the video catalog with access state
pub fn print_student_video_table(videos: &[VideoWithPermission]) {
    if videos.is_empty() {
        info("No videos found");
        return;
    }

    let mut table = Table::new();
    header(&mut table, vec!["ID", "Title", "Creator", "Access"]);

    for video in videos {
        let (access, color) = if video.has_permission {
            ("unlocked".to_string(), Color::Green)
        } else {
            match &video.access_request {
                Some(request) => (request.status.to_string(), status_color(request.status)),
                None => ("locked".to_string(), Color::Red),
            }
        };

        table.add_row(vec![
            Cell::new(&video.video.video.id),
            Cell::new(&video.video.video.title),
            Cell::new(&video.video.creator.name),
            Cell::new(access).fg(color),
        ]);
    }

    println!("{table}");
}

pub fn print_student_table(students: &[User]) {
    if students.is_empty() {
        info("No students found");
        return;
    }

    let mut table = Table::new();
    header(&mut table, vec!["ID", "Name", "Email", "Joined"]);

    for student in students {
        let joined = student
            .created_at
            .map(|date| format_date(&date))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            Cell::new(&student.id),
            Cell::new(&student.name),
            Cell::new(&student.email),
            Cell::new(joined),
        ]);
    }

    println!("{table}");
}

pub fn print_request_table(requests: &[AccessRequestWithDetails]) {
    if requests.is_empty() {
        info("No access requests found");
        return;
    }

    let mut table = Table::new();
    header(
        &mut table,
        vec!["ID", "Student", "Video", "Status", "Requested"],
    );

    for request in requests {
        table.add_row(vec![
            Cell::new(&request.request.id),
            Cell::new(&request.student.name),
            Cell::new(&request.video.title),
            Cell::new(request.request.status.to_string()).fg(status_color(request.request.status)),
            Cell::new(format_date(&request.request.created_at)),
        ]);
    }

    println!("{table}");
}

pub fn print_permission_table(permissions: &[PermissionWithDetails]) {
    if permissions.is_empty() {
        info("No permissions found");
        return;
    }

    let mut table = Table::new();
    header(
        &mut table,
        vec!["ID", "Student", "Video", "Granted by", "Granted"],
    );

    for permission in permissions {
        let video = permission
            .video
            .as_ref()
            .map(|video| video.title.as_str())
            .unwrap_or(permission.permission.video_id.as_str());
        let granted_by = permission
            .granted_by_user
            .as_ref()
            .map(|user| user.name.as_str())
            .unwrap_or(permission.permission.granted_by.as_str());

        table.add_row(vec![
            Cell::new(&permission.permission.id),
            Cell::new(&permission.student.name),
            Cell::new(video),
            Cell::new(granted_by),
            Cell::new(format_date(&permission.permission.granted_at)),
        ]);
    }

    println!("{table}");
}

pub fn print_notification_table(notifications: &[NotificationWithDetails]) {
    if notifications.is_empty() {
        info("No notifications");
        return;
    }

    let mut table = Table::new();
    header(&mut table, vec!["ID", "Message", "Status", "Received"]);

    for notification in notifications {
        let unread =
            notification.notification.read_status == crate::api::models::NotificationReadStatus::Unread;
        let status = if unread {
            Cell::new("unread").fg(Color::Yellow)
        } else {
            Cell::new("read")
        };
        table.add_row(vec![
            Cell::new(&notification.notification.id),
            Cell::new(&notification.notification.message),
            status,
            Cell::new(format_date(&notification.notification.created_at)),
        ]);
    }

    println!("{table}");
}

pub fn print_route_table(routes: &[RouteMeta]) {
    let mut table = Table::new();
    header(&mut table, vec!["Path", "Name", "Auth", "Admin only", "Title"]);

    for route in routes {
        table.add_row(vec![
            Cell::new(route.path),
            Cell::new(route.name),
            Cell::new(if route.requires_auth { "yes" } else { "no" }),
            Cell::new(if route.admin_only { "yes" } else { "no" }),
            Cell::new(route.title.unwrap_or("-")),
        ]);
    }

    println!("{table}");
}

pub fn print_user_detail(user: &User) {
    println!("{}", "Current User".bold().underline());
    println!();
    println!("  {} {}", "ID:".bold(), user.id);
    println!("  {} {}", "Name:".bold(), user.name);
    println!("  {} {}", "Email:".bold(), user.email);
    println!("  {} {}", "Role:".bold(), user.role);
    if let Some(avatar) = &user.avatar {
        println!("  {} {}", "Avatar:".bold(), avatar);
    }
}

fn optional_count(count: Option<usize>) -> String {
    count
        .map(|value| value.to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn print_admin_stats(stats: &AdminDashboardStats) {
    println!("{}", "Admin Dashboard".bold().underline());
    println!();
    println!("  {} {}", "Videos:".bold(), stats.total_videos);
    println!("  {} {}", "Students:".bold(), stats.total_students);
    println!("  {} {}", "Pending requests:".bold(), stats.pending_requests);
    println!(
        "  {} {}",
        "Active permissions:".bold(),
        optional_count(stats.active_permissions)
    );
}

pub fn print_student_stats(stats: &StudentDashboardStats) {
    println!("{}", "Student Dashboard".bold().underline());
    println!();
    println!("  {} {}", "Available videos:".bold(), stats.available_videos);
    println!("  {} {}", "Pending requests:".bold(), stats.pending_requests);
    println!("  {} {}", "Granted access:".bold(), stats.granted_access);
    println!(
        "  {} {}",
        "Recently watched:".bold(),
        optional_count(stats.recently_watched)
    );
}

/// Confirm an action with the user
pub fn confirm(message: &str) -> bool {
    use std::io::{self, Write};

    print!("{} [y/N] ", message);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
