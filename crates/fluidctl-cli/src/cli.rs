//! Command-line definitions for fluidctl.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use url::Url;
use uuid::Uuid;

use crate::config::CliConfig;
use crate::output::Format;

/// Atlas server URL used when neither flag, environment, nor config file
/// provide one.
pub const DEFAULT_URL: &str = "https://atlas.fluidstack.io";

#[derive(Parser)]
#[command(name = "fluidctl")]
#[command(version, about = "fluidctl manages Fluidstack infrastructure from the command line")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every command.
#[derive(Args)]
pub struct GlobalArgs {
    /// Atlas server URL
    #[arg(short = 'U', long, global = true, env = "FLUIDCTL_URL")]
    pub url: Option<Url>,

    /// Output format (json, yaml)
    #[arg(short = 'F', long, global = true, value_enum)]
    pub format: Option<Format>,

    /// Auth token; bypasses the login flow entirely
    #[arg(short = 'T', long, global = true, env = "FLUIDCTL_TOKEN")]
    pub token: Option<String>,

    /// OAuth client ID (reserved; the login flow uses the built-in client)
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// OAuth client secret (reserved; the login flow uses the built-in client)
    #[arg(long, global = true)]
    pub client_secret: Option<String>,
}

impl GlobalArgs {
    /// Resolve effective settings: flag > environment > config file >
    /// built-in default.
    pub fn resolve(&self, config: &CliConfig) -> anyhow::Result<Globals> {
        let url = match &self.url {
            Some(url) => url.clone(),
            None => {
                let raw = config.default.url.as_deref().unwrap_or(DEFAULT_URL);
                raw.parse()
                    .with_context(|| format!("invalid server URL in config: {raw}"))?
            }
        };
        let format = self.format.or(config.default.format).unwrap_or_default();

        Ok(Globals {
            url,
            format,
            token: self.token.clone(),
        })
    }
}

/// Effective global settings after config resolution.
pub struct Globals {
    pub url: Url,
    pub format: Format,
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Manage instances
    Instances {
        #[command(subcommand)]
        command: InstanceCommands,
    },

    /// Manage projects
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Manage filesystems
    Filesystems {
        #[command(subcommand)]
        command: FilesystemCommands,
    },

    /// Manage slurm
    Slurm {
        #[command(subcommand)]
        command: SlurmCommands,
    },
}

#[derive(Subcommand)]
pub enum InstanceCommands {
    /// Create an instance
    Create(InstanceCreateArgs),

    /// Delete an instance
    Delete {
        /// Project ID
        #[arg(short = 'P', long)]
        project: Uuid,

        /// Instance ID
        #[arg(long)]
        id: Uuid,
    },

    /// List instances
    List {
        /// Project ID
        #[arg(short = 'P', long)]
        project: Uuid,
    },

    /// Describe an instance
    Describe {
        /// Project ID
        #[arg(short = 'P', long)]
        project: Uuid,

        /// Instance ID
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct InstanceCreateArgs {
    /// Project ID
    #[arg(short = 'P', long)]
    pub project: Uuid,

    /// Name of the instance
    #[arg(long)]
    pub name: String,

    /// Instance type
    #[arg(long = "type", default_value = "cpu.2x")]
    pub instance_type: String,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Path to cloud-init user-data
    #[arg(long, value_name = "PATH", conflicts_with = "ssh_authorized_key")]
    pub user_data: Option<PathBuf>,

    /// Path to an SSH public key (repeatable)
    #[arg(long = "ssh-authorized-key", value_name = "PATH")]
    pub ssh_authorized_key: Vec<PathBuf>,

    /// Filesystem to attach, in the format 'id=<UUID>' (repeatable)
    #[arg(long = "filesystem", value_name = "ATTRS")]
    pub filesystem: Vec<String>,

    /// Create a preemptible instance
    #[arg(long)]
    pub preemptible: bool,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Create a new project
    Create {
        /// Name of the project
        #[arg(long)]
        name: String,
    },

    /// Delete a project
    Delete {
        /// Project ID
        #[arg(long)]
        id: Uuid,
    },

    /// List all projects
    List,

    /// Get details of a project
    Describe {
        /// Project ID
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Subcommand)]
pub enum FilesystemCommands {
    /// Create a new filesystem
    Create {
        /// Project ID
        #[arg(short = 'P', long)]
        project: Uuid,

        /// Name of the filesystem
        #[arg(long)]
        name: String,

        /// Size of the filesystem in GiB
        #[arg(long, default_value = "1024Gi")]
        size: String,
    },

    /// Delete a filesystem
    Delete {
        /// Project ID
        #[arg(short = 'P', long)]
        project: Uuid,

        /// Filesystem ID
        #[arg(long)]
        id: Uuid,
    },

    /// List all filesystems
    List {
        /// Project ID
        #[arg(short = 'P', long)]
        project: Uuid,
    },

    /// Get details of a filesystem
    Describe {
        /// Project ID
        #[arg(short = 'P', long)]
        project: Uuid,

        /// Filesystem ID
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Subcommand)]
pub enum SlurmCommands {
    /// Manage slurm clusters
    Clusters {
        #[command(subcommand)]
        command: ClusterCommands,
    },
}

#[derive(Subcommand)]
pub enum ClusterCommands {
    /// List slurm clusters
    List {
        /// Project ID
        #[arg(short = 'P', long)]
        project: Uuid,
    },
}
