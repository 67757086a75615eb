use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ErrorContext, LinkError, Result};

/// File name of the manifest, expected in the deployment root
pub const MANIFEST_FILE_NAME: &str = "deploy-metadata.json";

/// Kind of link a descriptor asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LinkKind {
    #[serde(rename = "folderLink")]
    FolderLink,
    #[serde(rename = "fileLink")]
    FileLink,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::FolderLink => write!(f, "folderLink"),
            LinkKind::FileLink => write!(f, "fileLink"),
        }
    }
}

/// One link to materialize. Both paths are relative to the deployment root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDescriptor {
    pub kind: LinkKind,
    pub link_path: PathBuf,
    pub target_path: PathBuf,
}

impl LinkDescriptor {
    pub fn link_in(&self, root: &Path) -> PathBuf {
        root.join(&self.link_path)
    }

    pub fn target_in(&self, root: &Path) -> PathBuf {
        root.join(&self.target_path)
    }
}

/// Contents of `deploy-metadata.json`
///
/// Only the fields needed to lay out links are read; any other metadata the
/// deploy step writes next to them is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub scenario_name: String,
    pub links: Vec<LinkDescriptor>,
}

impl Manifest {
    /// Load the manifest at `path`, failing before anything else is touched
    /// when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LinkError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)
            .with_io_context(|| format!("reading {}", path.display()))?;

        Self::parse(&content).map_err(|source| LinkError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
