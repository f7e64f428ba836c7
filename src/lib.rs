//! # Genflow
//!
//! Genflow turns a natural-language description into a workflow definition
//! for a no-code automation platform such as n8n, Make or Zapier.
//!
//! The description is sent to a generative model, the reply is decoded and
//! structurally validated, and any failure along the way is answered with a
//! deterministic three-node fallback workflow.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use genflow::{GeneratorBuilder, Platform, WorkflowRequest, resolve_api_key};
//!
//! let api_key = resolve_api_key("GOOGLE_API_KEY", |k| std::env::var(k).ok())?;
//! let generator = GeneratorBuilder::new().api_key(api_key).build()?;
//!
//! let request = WorkflowRequest::new("Send a Slack message on new email", Platform::N8n, "simple");
//! let outcome = generator.generate(&request).await;
//! let path = genflow::output::save(".", &request, &outcome.to_value()?)?;
//! ```

mod builder;
mod config;
mod error;
mod generator;
mod model;
mod platform;

pub mod fallback;
pub mod llm;
pub mod output;
pub mod parser;
pub mod prompt;
pub mod validator;

pub use builder::{GeneratorBuilder, resolve_api_key};
pub use config::{Config, ModelConfig};
pub use error::GenflowError;
pub use generator::WorkflowGenerator;
pub use model::*;
pub use platform::{NodeTypes, Platform, PlatformProfile};

/// Result type alias for Genflow operations.
pub type Result<T> = std::result::Result<T, GenflowError>;
