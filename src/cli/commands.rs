//! CLI command implementations

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::api::models::{
    GrantPermissionRequest, RegisterRequest, RevokePermissionRequest, Role, VideoUploadRequest,
};
use crate::cli::{
    confirm, error, info, print_admin_stats, print_notification_table, print_permission_table,
    print_request_table, print_route_table, print_student_stats, print_student_table,
    print_student_video_table, print_user_detail, print_video_table, render_toasts, success, warn,
    OutputFormat, RoleArg,
};
use crate::client::ApiClient;
use crate::config::{self, Config};
use crate::error::Error;
use crate::router::{self, GuardDecision};
use crate::session::{AuthOutcome, SessionStore, TokenFile};
use crate::toast::ToastQueue;

/// Everything a command needs: config plus a restored session
struct Context {
    session: SessionStore,
}

impl Context {
    fn api(&self) -> &ApiClient {
        self.session.api()
    }
}

async fn context() -> Result<Context> {
    let config: Config = config::load_config()?;
    let api = ApiClient::new(config.api.base_url.clone());
    let session = SessionStore::new(api, TokenFile::new(config.session.token_file.clone()));
    session.restore().await;
    Ok(Context { session })
}

async fn require_auth(context: &Context) -> Result<()> {
    if !context.session.is_authenticated().await {
        return Err(Error::NotAuthenticated.into());
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Initialize a new course2ceo.toml configuration file
pub async fn init() -> Result<()> {
    let config_path = std::path::Path::new("course2ceo.toml");

    if config_path.exists() {
        warn("course2ceo.toml already exists");
        return Ok(());
    }

    let content = config::loader::default_config_content();
    fs::write(config_path, content)?;

    success("Created course2ceo.toml");
    info("Edit the configuration file and run 'course2ceo login' to sign in");

    Ok(())
}

/// Sign in and persist the session token
pub async fn login(email: Option<String>) -> Result<()> {
    let context = context().await?;

    let email = match email {
        Some(email) => email,
        None => dialoguer::Input::new().with_prompt("Email").interact_text()?,
    };
    let password = dialoguer::Password::new().with_prompt("Password").interact()?;

    let mut toasts = ToastQueue::new();
    match context.session.login(&email, &password).await {
        AuthOutcome::Success { redirect } => {
            toasts.success(
                format!("Logged in as {}", email),
                Some(format!("Landing page: {}", redirect)),
            );
        }
        AuthOutcome::Failure { message } => {
            toasts.error("Login failed", Some(message));
        }
    }
    render_toasts(&mut toasts);

    Ok(())
}

/// Create an account and sign in
pub async fn register(name: String, email: String, role: Option<RoleArg>) -> Result<()> {
    let context = context().await?;

    let password = dialoguer::Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let request = RegisterRequest {
        name,
        email: email.clone(),
        password,
        role: role.map(Role::from),
    };

    let mut toasts = ToastQueue::new();
    match context.session.register(request).await {
        AuthOutcome::Success { redirect } => {
            toasts.success(
                format!("Registered {}", email),
                Some(format!("Landing page: {}", redirect)),
            );
        }
        AuthOutcome::Failure { message } => {
            toasts.error("Registration failed", Some(message));
        }
    }
    render_toasts(&mut toasts);

    Ok(())
}

/// Sign out and clear the persisted token
pub async fn logout() -> Result<()> {
    let context = context().await?;
    context.session.logout().await;
    success("Logged out");
    Ok(())
}

/// Show the currently signed-in user
pub async fn whoami(format: OutputFormat) -> Result<()> {
    let context = context().await?;

    match context.session.current_user().await {
        Some(user) => match format {
            OutputFormat::Table => print_user_detail(&user),
            OutputFormat::Json => print_json(&user)?,
        },
        None => info("Not logged in"),
    }

    Ok(())
}

/// Print the route table and, when signed in, where each navigation would land
pub async fn routes() -> Result<()> {
    let context = context().await?;

    print_route_table(router::ROUTES);

    let snapshot = context.session.snapshot().await;
    if snapshot.authenticated {
        println!();
        for route in router::ROUTES {
            if let GuardDecision::Redirect(target) = router::guard(route, &snapshot) {
                info(&format!("{} redirects to {}", route.path, target));
            }
        }
    }

    Ok(())
}

/// Check backend connectivity
pub async fn doctor() -> Result<()> {
    let context = context().await?;

    match context.api().health().await {
        Ok(health) => {
            success(&format!("Backend is {}", health.status));
            info(&format!("Server time: {}", health.timestamp));
            Ok(())
        }
        Err(e) => {
            error(&format!("Backend unreachable: {}", e));
            Err(e.into())
        }
    }
}

/// List videos, using the admin or student endpoint based on role
pub async fn videos_list(format: OutputFormat) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    if context.session.is_admin().await {
        let response = context.api().list_videos().await?;
        match format {
            OutputFormat::Table => print_video_table(&response.videos),
            OutputFormat::Json => print_json(&response)?,
        }
    } else {
        let response = context.api().student_videos().await?;
        match format {
            OutputFormat::Table => print_student_video_table(&response.videos),
            OutputFormat::Json => print_json(&response)?,
        }
    }

    Ok(())
}

/// Show details for a single video
pub async fn videos_show(id: &str, format: OutputFormat) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = if context.session.is_admin().await {
        context.api().video_details(id).await?
    } else {
        context.api().student_video_details(id).await?
    };

    match format {
        OutputFormat::Json => print_json(&response)?,
        OutputFormat::Table => {
            let details = &response.video;
            success(&format!("{} ({})", details.video.video.title, details.video.video.id));
            if let Some(description) = &details.video.video.description {
                info(description);
            }
            info(&format!("Uploaded by {}", details.video.creator.name));
            if let Some(permissions) = &details.permissions {
                println!();
                print_permission_table(permissions);
            }
        }
    }

    Ok(())
}

/// Upload a new video (admin)
pub async fn videos_upload(
    title: String,
    file: PathBuf,
    description: Option<String>,
    thumbnail_url: Option<String>,
) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let request = VideoUploadRequest {
        title,
        description,
        thumbnail_url,
        video_file: file,
    };

    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_message("Uploading video...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = context.api().upload_video(&request).await;
    spinner.finish_and_clear();

    let mut toasts = ToastQueue::new();
    match result {
        Ok(response) => {
            toasts.success(
                response.message,
                Some(format!("Video ID: {}", response.video.id)),
            );
        }
        Err(e) => {
            toasts.error("Upload failed", Some(e.to_string()));
        }
    }
    render_toasts(&mut toasts);

    Ok(())
}

/// Delete a video (admin)
pub async fn videos_delete(id: &str, force: bool) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    if !force && !confirm(&format!("Delete video '{}'?", id)) {
        info("Aborted");
        return Ok(());
    }

    match context.api().delete_video(id).await {
        Ok(response) => {
            success(&response.message);
            Ok(())
        }
        Err(e) => {
            error(&format!("Failed to delete video: {}", e));
            Err(e.into())
        }
    }
}

/// List registered students (admin)
pub async fn students(format: OutputFormat) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().list_students().await?;
    match format {
        OutputFormat::Table => print_student_table(&response.students),
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}

/// Grant a student access to a video (admin)
pub async fn permissions_grant(student_id: String, video_id: String) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let request = GrantPermissionRequest { student_id, video_id };
    let response = context.api().grant_permission(&request).await?;
    success(&response.message);

    Ok(())
}

/// Revoke a student's access to a video (admin)
pub async fn permissions_revoke(student_id: String, video_id: String) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let request = RevokePermissionRequest { student_id, video_id };
    let response = context.api().revoke_permission(&request).await?;
    success(&response.message);

    Ok(())
}

/// List access requests (admin)
pub async fn permissions_requests(format: OutputFormat) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().list_access_requests().await?;
    match format {
        OutputFormat::Table => print_request_table(&response.requests),
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}

/// Approve an access request (admin)
pub async fn permissions_approve(id: &str) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().approve_access_request(id).await?;
    success(&response.message);

    Ok(())
}

/// Reject an access request (admin)
pub async fn permissions_reject(id: &str) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().reject_access_request(id).await?;
    success(&response.message);

    Ok(())
}

/// List the permissions granted on a video (admin)
pub async fn permissions_video(id: &str) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().video_permissions(id).await?;
    print_permission_table(&response.permissions);

    Ok(())
}

/// Request access to a video (student)
pub async fn access_request(video_id: &str) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().request_access(video_id).await?;
    success(&response.message);
    info(&format!("Request status: {}", response.request.status));

    Ok(())
}

/// List your granted permissions (student)
pub async fn access_mine(format: OutputFormat) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().my_permissions().await?;
    match format {
        OutputFormat::Table => print_permission_table(&response.permissions),
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}

/// List your access requests (student)
pub async fn access_requests(format: OutputFormat) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().my_requests().await?;
    match format {
        OutputFormat::Table => print_request_table(&response.requests),
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}

/// List all notifications
pub async fn notifications_list(format: OutputFormat) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().notifications().await?;
    match format {
        OutputFormat::Table => print_notification_table(&response.notifications),
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}

/// List unread notifications
pub async fn notifications_unread() -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().unread_notifications().await?;
    info(&format!("{} unread", response.count));
    print_notification_table(&response.notifications);

    Ok(())
}

/// Mark one notification as read
pub async fn notifications_mark_read(id: &str) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().mark_notification_read(id).await?;
    success(&response.message);

    Ok(())
}

/// Mark every notification as read
pub async fn notifications_mark_all_read() -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().mark_all_notifications_read().await?;
    success(&response.message);

    Ok(())
}

/// Delete a notification
pub async fn notifications_delete(id: &str) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().delete_notification(id).await?;
    success(&response.message);

    Ok(())
}

/// Check whether the current user may stream a video
pub async fn stream_check(id: &str) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let response = context.api().check_stream_permission(id).await?;
    if response.has_permission {
        success(&format!("Streaming allowed for video {}", response.video_id));
    } else {
        warn(&format!("Video {} is locked", response.video_id));
    }

    Ok(())
}

/// Print the direct streaming URL for a video
pub async fn stream_url(id: &str) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    let url = context.api().stream_url(id).await?;
    println!("{}", url);

    Ok(())
}

/// Show dashboard statistics for the current role
pub async fn stats(format: OutputFormat) -> Result<()> {
    let context = context().await?;
    require_auth(&context).await?;

    if context.session.is_admin().await {
        let stats = context.api().admin_stats().await?;
        match format {
            OutputFormat::Table => print_admin_stats(&stats),
            OutputFormat::Json => print_json(&stats)?,
        }
    } else {
        let stats = context.api().student_stats().await?;
        match format {
            OutputFormat::Table => print_student_stats(&stats),
            OutputFormat::Json => print_json(&stats)?,
        }
    }

    Ok(())
}
