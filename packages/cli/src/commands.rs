//! Subcommand dispatch: gather inputs, then run one repository operation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use agora_client::{
    AgoraClient, ClientError, Endpoint, ListFilter, NewEntity, Transport, ValidationError,
};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::cli::Command;
use crate::config::CliConfig;
use crate::editor::{capture_synopsis, EditorError};

/// Errors from running a subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Run `command` against `endpoint` and return the repository's response.
pub fn run<T: Transport>(
    client: &AgoraClient<T>,
    config: &CliConfig,
    endpoint: Endpoint,
    command: Command,
) -> Result<Value, CommandError> {
    match command {
        Command::Push {
            namespace,
            name,
            documentation,
            synopsis,
            entity_type,
            payload_file,
        } => {
            let namespace = push_namespace(namespace, config)?;
            let name = push_name(name, &payload_file);
            let documentation = match documentation {
                Some(path) => read_trimmed(&path)?,
                None => String::new(),
            };
            let payload = read_trimmed(&payload_file)?;
            let synopsis = match synopsis {
                Some(s) => s,
                None => capture_synopsis(&config.editor)?,
            };

            let entity = NewEntity {
                namespace,
                name,
                synopsis,
                documentation,
                entity_type,
                payload,
            };
            let created = client.create(endpoint, &entity)?;
            info!(
                namespace = %entity.namespace,
                name = %entity.name,
                "pushed to Agora"
            );
            Ok(created)
        }

        Command::Pull {
            namespace,
            name,
            snapshot_id,
        } => Ok(client.fetch(endpoint, &namespace, &name, snapshot_id)?),

        Command::List(args) => Ok(client.list(endpoint, &ListFilter::from(args))?),
    }
}

/// Namespace for a push: the flag if given, else the invoking user.
pub fn push_namespace(
    namespace: Option<String>,
    config: &CliConfig,
) -> Result<String, ValidationError> {
    namespace
        .or_else(|| config.user.clone())
        .ok_or(ValidationError::NoNamespace)
}

/// Name for a push: the flag if given, else the payload file's base name
/// with its final extension stripped.
pub fn push_name(name: Option<String>, payload_file: &Path) -> String {
    name.unwrap_or_else(|| {
        payload_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| payload_file.display().to_string())
    })
}

/// Read a whole file, dropping leading and trailing whitespace.
fn read_trimmed(path: &Path) -> Result<String, CommandError> {
    fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .map_err(|source| CommandError::Read {
            path: path.to_path_buf(),
            source,
        })
}
