use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{ErrorContext, LinkError, Result};
use crate::manifest::MANIFEST_FILE_NAME;

/// Everything one invocation needs, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkerSettings {
    /// Deployment root; every manifest path is relative to it
    pub root: PathBuf,
    /// Location of `deploy-metadata.json`
    pub manifest_path: PathBuf,
    /// Whether to style terminal output
    pub colored: bool,
    /// Whether to log each link operation
    pub verbose: bool,
}

impl LinkerSettings {
    /// Settings for the deployment folder at `root`.
    pub fn for_root<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let manifest_path = root.join(MANIFEST_FILE_NAME);

        Self {
            root,
            manifest_path,
            colored: false,
            verbose: false,
        }
    }

    /// Resolve settings from parsed arguments.
    ///
    /// Without `--root` the deployment root is the folder holding the running
    /// executable, since the deploy step places this tool next to the manifest.
    /// A relative `--root` is made absolute so link targets never depend on the
    /// folder the link lands in.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let root = match &cli.root {
            Some(root) => std::path::absolute(root)
                .with_io_context(|| format!("resolving root {}", root.display()))?,
            None => executable_dir()?,
        };

        let mut settings = Self::for_root(root);
        settings.colored = !cli.no_color && std::io::stdout().is_terminal();
        settings.verbose = cli.verbose;
        Ok(settings)
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .with_io_context(|| "locating the running executable".to_string())?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| LinkError::Generic {
            message: format!("Executable {} has no parent folder", exe.display()),
            source: None,
        })
}
