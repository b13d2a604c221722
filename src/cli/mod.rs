//! CLI interface for the Course2CEO client

pub mod commands;
mod output;

pub use output::*;

use crate::api::models::Role;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "course2ceo")]
#[command(version = "0.1.0")]
#[command(about = "Command-line client for the Course2CEO video access platform", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new course2ceo.toml configuration file
    Init,

    /// Sign in and store the session token
    Login {
        /// Email address (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Account role (defaults to student)
        #[arg(short, long)]
        role: Option<RoleArg>,
    },

    /// Sign out and clear the stored token
    Logout,

    /// Show the currently signed-in user
    Whoami {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the navigable routes and their access rules
    Routes,

    /// Check backend connectivity
    Doctor,

    /// Browse and manage videos
    Videos {
        #[command(subcommand)]
        action: VideosAction,
    },

    /// List registered students (admin)
    Students {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Manage viewing permissions and access requests (admin)
    Permissions {
        #[command(subcommand)]
        action: PermissionsAction,
    },

    /// Request and inspect your own video access (student)
    Access {
        #[command(subcommand)]
        action: AccessAction,
    },

    /// Manage notifications
    Notifications {
        #[command(subcommand)]
        action: NotificationsAction,
    },

    /// Streaming permission checks and URLs
    Stream {
        #[command(subcommand)]
        action: StreamAction,
    },

    /// Show dashboard statistics for the current role
    Stats {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum VideosAction {
    /// List videos (admin catalog or student view, based on your role)
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show details for a single video
    Show {
        /// Video ID
        id: String,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Upload a new video (admin)
    Upload {
        /// Video title
        #[arg(short, long)]
        title: String,

        /// Path to the video file
        #[arg(short, long)]
        file: PathBuf,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,

        /// Optional thumbnail URL
        #[arg(long)]
        thumbnail_url: Option<String>,
    },

    /// Delete a video (admin)
    Delete {
        /// Video ID
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PermissionsAction {
    /// Grant a student access to a video
    Grant {
        /// Student ID
        student_id: String,

        /// Video ID
        video_id: String,
    },

    /// Revoke a student's access to a video
    Revoke {
        /// Student ID
        student_id: String,

        /// Video ID
        video_id: String,
    },

    /// List access requests
    Requests {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Approve an access request
    Approve {
        /// Request ID
        id: String,
    },

    /// Reject an access request
    Reject {
        /// Request ID
        id: String,
    },

    /// List the permissions granted on a video
    Video {
        /// Video ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum AccessAction {
    /// Request access to a video
    Request {
        /// Video ID
        video_id: String,
    },

    /// List your granted permissions
    Mine {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List your access requests
    Requests {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
pub enum NotificationsAction {
    /// List all notifications
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List unread notifications
    Unread,

    /// Mark one notification as read
    MarkRead {
        /// Notification ID
        id: String,
    },

    /// Mark every notification as read
    MarkAllRead,

    /// Delete a notification
    Delete {
        /// Notification ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum StreamAction {
    /// Check whether you may stream a video
    Check {
        /// Video ID
        id: String,
    },

    /// Print the direct streaming URL for a video
    Url {
        /// Video ID
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Admin,
    Student,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Role::Admin,
            RoleArg::Student => Role::Student,
        }
    }
}
