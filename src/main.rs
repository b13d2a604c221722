use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod cli;
mod client;
mod config;
mod error;
mod router;
mod session;
mod toast;

use cli::{
    AccessAction, Cli, Commands, NotificationsAction, PermissionsAction, StreamAction,
    VideosAction,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course2ceo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => cli::commands::init().await,
        Commands::Login { email } => cli::commands::login(email).await,
        Commands::Register { name, email, role } => cli::commands::register(name, email, role).await,
        Commands::Logout => cli::commands::logout().await,
        Commands::Whoami { format } => cli::commands::whoami(format).await,
        Commands::Routes => cli::commands::routes().await,
        Commands::Doctor => cli::commands::doctor().await,
        Commands::Videos { action } => match action {
            VideosAction::List { format } => cli::commands::videos_list(format).await,
            VideosAction::Show { id, format } => cli::commands::videos_show(&id, format).await,
            VideosAction::Upload {
                title,
                file,
                description,
                thumbnail_url,
            } => cli::commands::videos_upload(title, file, description, thumbnail_url).await,
            VideosAction::Delete { id, force } => cli::commands::videos_delete(&id, force).await,
        },
        Commands::Students { format } => cli::commands::students(format).await,
        Commands::Permissions { action } => match action {
            PermissionsAction::Grant {
                student_id,
                video_id,
            } => cli::commands::permissions_grant(student_id, video_id).await,
            PermissionsAction::Revoke {
                student_id,
                video_id,
            } => cli::commands::permissions_revoke(student_id, video_id).await,
            PermissionsAction::Requests { format } => {
                cli::commands::permissions_requests(format).await
            }
            PermissionsAction::Approve { id } => cli::commands::permissions_approve(&id).await,
            PermissionsAction::Reject { id } => cli::commands::permissions_reject(&id).await,
            PermissionsAction::Video { id } => cli::commands::permissions_video(&id).await,
        },
        Commands::Access { action } => match action {
            AccessAction::Request { video_id } => cli::commands::access_request(&video_id).await,
            AccessAction::Mine { format } => cli::commands::access_mine(format).await,
            AccessAction::Requests { format } => cli::commands::access_requests(format).await,
        },
        Commands::Notifications { action } => match action {
            NotificationsAction::List { format } => cli::commands::notifications_list(format).await,
            NotificationsAction::Unread => cli::commands::notifications_unread().await,
            NotificationsAction::MarkRead { id } => {
                cli::commands::notifications_mark_read(&id).await
            }
            NotificationsAction::MarkAllRead => cli::commands::notifications_mark_all_read().await,
            NotificationsAction::Delete { id } => cli::commands::notifications_delete(&id).await,
        },
        Commands::Stream { action } => match action {
            StreamAction::Check { id } => cli::commands::stream_check(&id).await,
            StreamAction::Url { id } => cli::commands::stream_url(&id).await,
        },
        Commands::Stats { format } => cli::commands::stats(format).await,
    }
}
