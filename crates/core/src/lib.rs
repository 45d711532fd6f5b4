//! karate-runner - Run and debug Karate feature files from an editor or the shell
//!
//! This crate provides functionality to:
//! - Split `.feature` files into runnable sections with their tags
//! - Find the build system (standalone jar, Node, Maven, Gradle) that owns a target
//! - Synthesize the shell command that runs a file, folder or single scenario
//! - Allocate debug server ports
//! - Coordinate a run from launch to report collection
pub mod build_system;
pub mod command;
pub mod config;
pub mod debug_port;
pub mod error;
pub mod interfaces;
pub mod lifecycle;
pub mod parser;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use build_system::{BuildSystemKind, ProjectResolver};
pub use command::{CommandSynthesizer, Platform, RunCommand};
pub use config::Config;
pub use debug_port::PortAllocator;
pub use lifecycle::{Coordinator, CoordinatorListener, RunOutcome};
