//! Core data types for the Agora methods repository.
//!
//! This module defines the wire-format structures exchanged with the
//! repository: [`EntityType`], [`Endpoint`], [`NewEntity`] (the create
//! request body), and [`ListFilter`] (the list query parameters).

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// The kind of entity stored in the repository. Determines how its payload
/// is interpreted: WDL for tasks and workflows, JSON for configurations.
///
/// Serialises as its PascalCase name (e.g. `"Workflow"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EntityType {
    /// A single WDL task.
    Task,
    /// A WDL workflow composed of tasks. Default for pushes.
    #[default]
    Workflow,
    /// A JSON task configuration.
    Configuration,
}

/// Formats the type as its wire-format string (e.g. `"Workflow"`).
impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Task => write!(f, "Task"),
            EntityType::Workflow => write!(f, "Workflow"),
            EntityType::Configuration => write!(f, "Configuration"),
        }
    }
}

/// Parses an [`EntityType`] from its wire-format string.
///
/// Returns `Err` with a descriptive message if the string is not recognised.
impl std::str::FromStr for EntityType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Task" => Ok(EntityType::Task),
            "Workflow" => Ok(EntityType::Workflow),
            "Configuration" => Ok(EntityType::Configuration),
            _ => Err(format!(
                "unknown entity type {:?}; expected one of: Task, Workflow, Configuration",
                s
            )),
        }
    }
}

/// The endpoint family a request is addressed to.
///
/// Orthogonal to [`EntityType`]: tasks and workflows live under `/methods`,
/// configurations under `/configurations`, but nothing stops a caller from
/// listing configurations filtered by any entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Configurations,
    Methods,
}

impl Endpoint {
    /// Select the endpoint from the two mutually exclusive CLI flags.
    ///
    /// `configurations` wins if both are set; the argument parser already
    /// rejects that combination.
    pub fn from_flags(configurations: bool, methods: bool) -> Result<Self, ValidationError> {
        if configurations {
            Ok(Endpoint::Configurations)
        } else if methods {
            Ok(Endpoint::Methods)
        } else {
            Err(ValidationError::NoEndpoint)
        }
    }

    /// URL path prefix for this endpoint family.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Configurations => "/configurations",
            Endpoint::Methods => "/methods",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// The request body for `POST /methods` and `POST /configurations`.
///
/// Carries exactly the six fields the repository accepts on create. The
/// `snapshotId` is assigned by the server and appears only in the response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEntity {
    pub namespace: String,
    pub name: String,
    /// One-line summary, at most [`SYNOPSIS_MAX_LEN`](crate::validation::SYNOPSIS_MAX_LEN) characters.
    pub synopsis: String,
    /// Free-form documentation. Empty when none was supplied.
    pub documentation: String,
    pub entity_type: EntityType,
    /// Raw payload file contents: WDL for methods, JSON for configurations.
    pub payload: String,
}

/// Query parameters for `GET /methods` and `GET /configurations`.
///
/// All fields are optional. `included_fields` and `excluded_fields` select
/// which metadata fields the repository returns per entity; every other
/// field is an exact-match filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    /// Emitted once per element as `includedField=<value>`.
    pub included_fields: Vec<String>,
    /// Emitted once per element as `excludedField=<value>`.
    pub excluded_fields: Vec<String>,
    pub namespace: Option<String>,
    pub name: Option<String>,
    pub snapshot_id: Option<u64>,
    pub synopsis: Option<String>,
    pub documentation: Option<String>,
    pub owner: Option<String>,
    pub payload: Option<String>,
    pub entity_type: Option<EntityType>,
}

impl ListFilter {
    /// All populated `(key, value)` pairs in wire order.
    ///
    /// Repeatable fields come first, then the scalar filters in declaration
    /// order. Unset fields produce no pair.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        for field in &self.included_fields {
            out.push(("includedField", field.clone()));
        }
        for field in &self.excluded_fields {
            out.push(("excludedField", field.clone()));
        }

        let scalars: [(&'static str, Option<String>); 8] = [
            ("namespace", self.namespace.clone()),
            ("name", self.name.clone()),
            ("snapshotId", self.snapshot_id.map(|id| id.to_string())),
            ("synopsis", self.synopsis.clone()),
            ("documentation", self.documentation.clone()),
            ("owner", self.owner.clone()),
            ("payload", self.payload.clone()),
            ("entityType", self.entity_type.map(|t| t.to_string())),
        ];
        out.extend(
            scalars
                .into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v))),
        );
        out
    }

    /// `true` when no filter or field selection is set.
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }
}
