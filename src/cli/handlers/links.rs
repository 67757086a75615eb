use tracing::info;

use crate::cli::ui::Ui;
use crate::core::LinkMaterializer;
use crate::error::Result;
use crate::manifest::Manifest;

/// Handle `create`: clear stale entries, then build every link
pub fn handle_create(materializer: &LinkMaterializer, manifest: &Manifest, ui: &Ui) -> Result<()> {
    ui.info(&format!(
        "\nCreating links for deployment scenario \"{}\"",
        manifest.scenario_name
    ));

    let created = materializer.create(manifest)?;
    info!(created, root = %materializer.root().display(), "links created");

    ui.success("The operation completed successfully.");
    Ok(())
}

/// Handle `remove`: delete every link listed in the manifest
pub fn handle_remove(materializer: &LinkMaterializer, manifest: &Manifest, ui: &Ui) -> Result<()> {
    ui.info(&format!(
        "\nRemoving links for deployment scenario \"{}\"",
        manifest.scenario_name
    ));

    let removed = materializer.remove(manifest)?;
    info!(removed, root = %materializer.root().display(), "links removed");

    ui.success("The operation completed successfully.");
    Ok(())
}
