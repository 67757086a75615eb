pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod manifest;

pub use crate::config::LinkerSettings;
pub use crate::core::{LinkMaterializer, LinkStrategy};
pub use crate::error::{LinkError, Result};
pub use crate::manifest::{LinkDescriptor, LinkKind, Manifest};
