pub mod links;

pub use links::*;

use crate::cli::{Commands, Ui};
use crate::config::LinkerSettings;
use crate::core::{platform_strategy, LinkMaterializer};
use crate::error::Result;
use crate::manifest::Manifest;

/// Load the manifest and run one operation against the deployment root.
pub fn dispatch(command: Commands, settings: &LinkerSettings, ui: &Ui) -> Result<()> {
    let manifest = Manifest::load(&settings.manifest_path)?;
    let materializer = LinkMaterializer::new(&settings.root, platform_strategy());

    match command {
        Commands::Create => handle_create(&materializer, &manifest, ui),
        Commands::Remove => handle_remove(&materializer, &manifest, ui),
    }
}
