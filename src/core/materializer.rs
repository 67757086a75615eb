use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::symlink::LinkStrategy;
use crate::error::{ErrorContext, LinkError, Result};
use crate::manifest::{LinkKind, Manifest};

/// Creates and removes the links of one deployment folder.
pub struct LinkMaterializer {
    root: PathBuf,
    strategy: Box<dyn LinkStrategy>,
}

impl LinkMaterializer {
    pub fn new<P: AsRef<Path>>(root: P, strategy: Box<dyn LinkStrategy>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            strategy,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Delete every entry sitting at a manifest link path, in listed order.
    ///
    /// Absent entries are skipped, so running this twice is a no-op the second
    /// time. Returns how many entries were deleted.
    pub fn remove(&self, manifest: &Manifest) -> Result<usize> {
        let mut removed = 0;

        for descriptor in &manifest.links {
            let link = descriptor.link_in(&self.root);

            // symlink_metadata so a link whose target vanished still counts
            let metadata = match fs::symlink_metadata(&link) {
                Ok(metadata) => metadata,
                Err(e) if is_absent(&e) => continue,
                Err(e) => {
                    return Err(LinkError::Io {
                        source: e,
                        context: format!("inspecting {}", link.display()),
                    })
                }
            };

            debug!(link = %link.display(), strategy = self.strategy.name(), "removing link");
            self.strategy
                .unlink(&link, &metadata)
                .with_io_context(|| format!("removing {}", link.display()))?;
            removed += 1;
        }

        Ok(removed)
    }

    /// Remove stale entries, then build every link in listed order.
    ///
    /// Stops at the first failure; links created before it stay in place.
    pub fn create(&self, manifest: &Manifest) -> Result<usize> {
        self.remove(manifest)?;

        for descriptor in &manifest.links {
            let link = descriptor.link_in(&self.root);
            let target = descriptor.target_in(&self.root);

            if let Some(parent) = link.parent() {
                ensure_folder(parent)?;
            }

            debug!(
                kind = %descriptor.kind,
                link = %link.display(),
                target = %target.display(),
                strategy = self.strategy.name(),
                "creating link"
            );

            let created = match descriptor.kind {
                LinkKind::FolderLink => self.strategy.link_folder(&target, &link),
                LinkKind::FileLink => self.strategy.link_file(&target, &link),
            };

            created.map_err(|source| LinkError::Link {
                kind: descriptor.kind,
                link,
                target,
                source,
            })?;
        }

        Ok(manifest.links.len())
    }
}

/// A lookup error meaning nothing sits at the path, including a file where a
/// parent folder should be.
fn is_absent(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Create `path` and any missing ancestors, like `mkdir -p`.
///
/// Walks up until it meets an existing directory, the empty path, or the
/// filesystem root, then creates the missing part top-down.
pub fn ensure_folder(path: &Path) -> Result<()> {
    let mut missing = Vec::new();
    let mut current = path;

    loop {
        if current.as_os_str().is_empty() || current.exists() {
            break;
        }
        missing.push(current);
        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => break,
        }
    }

    for folder in missing.into_iter().rev() {
        match fs::create_dir(folder) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && folder.is_dir() => {}
            Err(e) => {
                return Err(LinkError::Io {
                    source: e,
                    context: format!("creating folder {}", folder.display()),
                })
            }
        }
    }

    Ok(())
}
