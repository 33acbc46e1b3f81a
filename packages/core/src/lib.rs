//! Client library for the Agora methods repository.
//!
//! This crate provides the entity types, local validation, request
//! construction, and HTTP transport behind the `agora` command-line tool.
//! Each repository operation is a single synchronous JSON-over-HTTPS
//! exchange.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`types`] | Wire types: [`EntityType`], [`Endpoint`], [`NewEntity`], [`ListFilter`] |
//! | [`validation`] | Local checks via [`validate_synopsis`] |
//! | [`request`] | Pure request construction for create, fetch and list |
//! | [`client`] | [`Transport`] seam, [`HttpTransport`], and [`AgoraClient`] |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use agora_client::{AgoraClient, Endpoint, HttpTransport, DEFAULT_BASE_URL};
//!
//! let transport = HttpTransport::new(DEFAULT_BASE_URL)?;
//! let client = AgoraClient::new(transport, "iPlanetDirectoryPro=...");
//!
//! // GET /methods/broad/hello/3
//! let method = client.fetch(Endpoint::Methods, "broad", "hello", 3)?;
//! println!("{}", serde_json::to_string_pretty(&method)?);
//! ```
//!
//! # Endpoints covered
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST | `/{methods,configurations}` | [`AgoraClient::create`] → `201` |
//! | GET | `/{methods,configurations}/{namespace}/{name}/{snapshotId}` | [`AgoraClient::fetch`] → `200` |
//! | GET | `/{methods,configurations}?{query}` | [`AgoraClient::list`] → `200` |

pub mod client;
pub mod request;
pub mod types;
pub mod validation;

pub use client::{AgoraClient, ClientError, HttpTransport, RawResponse, Transport, DEFAULT_BASE_URL};
pub use request::{Method, Request};
pub use types::{Endpoint, EntityType, ListFilter, NewEntity};
pub use validation::{validate_synopsis, ValidationError, SYNOPSIS_MAX_LEN};
