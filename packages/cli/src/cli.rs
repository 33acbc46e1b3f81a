//! Command-line surface of `agora`.

use std::path::PathBuf;

use agora_client::{EntityType, ListFilter};
use clap::{ArgGroup, Args, Parser, Subcommand};

/// agora — Agora methods repository CLI
///
/// Push, pull, and list methods and configurations.
#[derive(Debug, Parser)]
#[command(name = "agora", version, about, long_about = None)]
#[command(group(
    ArgGroup::new("endpoint")
        .required(true)
        .args(["configurations", "methods"])
))]
pub struct Cli {
    /// Session cookie (`key=value`) sent with every request.
    #[arg(short = 'a', long, env = "AGORA_AUTH", hide_env_values = true, value_name = "TOKEN")]
    pub auth: String,

    /// Operate on task configurations, via the /configurations endpoint.
    #[arg(short = 'c', long)]
    pub configurations: bool,

    /// Operate on tasks and workflows, via the /methods endpoint.
    #[arg(short = 'm', long)]
    pub methods: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Push a method or configuration to the repository.
    ///
    /// Opens $EDITOR to collect a one-line synopsis unless --synopsis is
    /// given. Prints the created entity, including its new snapshot id.
    Push {
        /// Namespace to push into. Defaults to your login name.
        #[arg(short = 's', long)]
        namespace: Option<String>,

        /// Entity name. Defaults to PAYLOAD_FILE's name without extension.
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// File with user documentation (plain text, HTML, or Markdown).
        #[arg(short = 'd', long, value_name = "FILE")]
        documentation: Option<PathBuf>,

        /// One-line synopsis, at most 80 characters. Skips the editor.
        #[arg(short = 'y', long, value_name = "TEXT")]
        synopsis: Option<String>,

        /// Entity type: Task | Workflow | Configuration
        #[arg(short = 't', long = "entityType", value_name = "TYPE", default_value_t = EntityType::Workflow)]
        entity_type: EntityType,

        /// File with the payload: WDL for tasks and workflows, JSON for configurations.
        #[arg(value_name = "PAYLOAD_FILE")]
        payload_file: PathBuf,
    },

    /// Get one snapshot of a method or configuration.
    Pull {
        /// Namespace of the entity.
        #[arg(short = 's', long)]
        namespace: String,

        /// Name of the entity.
        #[arg(short = 'n', long)]
        name: String,

        /// Snapshot id of the entity.
        #[arg(short = 'i', long = "snapshotId", value_name = "ID")]
        snapshot_id: u64,
    },

    /// List entities matching metadata filters.
    ///
    /// Every filter is an exact match; filters combine with AND.
    List(ListArgs),
}

/// Filters for `list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Metadata fields to include in each returned entity.
    #[arg(short = 'f', long = "includedFields", value_name = "FIELD", num_args = 0..)]
    pub included_fields: Vec<String>,

    /// Metadata fields to exclude from each returned entity.
    #[arg(short = 'e', long = "excludedFields", value_name = "FIELD", num_args = 0..)]
    pub excluded_fields: Vec<String>,

    /// Namespace to match.
    #[arg(short = 's', long)]
    pub namespace: Option<String>,

    /// Entity name to match.
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Snapshot id to match.
    #[arg(short = 'i', long = "snapshotId", value_name = "ID")]
    pub snapshot_id: Option<u64>,

    /// Exact synopsis to match.
    #[arg(short = 'y', long, value_name = "TEXT")]
    pub synopsis: Option<String>,

    /// Exact documentation to match.
    #[arg(short = 'd', long, value_name = "TEXT")]
    pub documentation: Option<String>,

    /// Owner (login of the pushing user) to match.
    #[arg(short = 'o', long)]
    pub owner: Option<String>,

    /// Exact payload to match.
    #[arg(short = 'p', long, value_name = "TEXT")]
    pub payload: Option<String>,

    /// Entity type: Task | Workflow | Configuration
    #[arg(short = 't', long = "entityType", value_name = "TYPE")]
    pub entity_type: Option<EntityType>,
}

impl From<ListArgs> for ListFilter {
    fn from(args: ListArgs) -> Self {
        Self {
            included_fields: args.included_fields,
            excluded_fields: args.excluded_fields,
            namespace: args.namespace,
            name: args.name,
            snapshot_id: args.snapshot_id,
            synopsis: args.synopsis,
            documentation: args.documentation,
            owner: args.owner,
            payload: args.payload,
            entity_type: args.entity_type,
        }
    }
}
