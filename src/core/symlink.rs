use std::fs;
use std::io;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs as unix_fs;

/// Platform-specific way of building and tearing down links.
///
/// Picked once at startup with [`platform_strategy`] so the materializer never
/// branches on the platform itself.
pub trait LinkStrategy {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Make `link` point at the directory `target`.
    fn link_folder(&self, target: &Path, link: &Path) -> io::Result<()>;

    /// Make `link` point at the file `target`.
    fn link_file(&self, target: &Path, link: &Path) -> io::Result<()>;

    /// Delete the entry at `link` without recursing into directories.
    fn unlink(&self, link: &Path, metadata: &fs::Metadata) -> io::Result<()> {
        let _ = metadata;
        fs::remove_file(link)
    }
}

/// Symbolic links for both kinds.
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SymlinkStrategy;

#[cfg(unix)]
impl LinkStrategy for SymlinkStrategy {
    fn name(&self) -> &'static str {
        "symlink"
    }

    fn link_folder(&self, target: &Path, link: &Path) -> io::Result<()> {
        unix_fs::symlink(target, link)
    }

    fn link_file(&self, target: &Path, link: &Path) -> io::Result<()> {
        unix_fs::symlink(target, link)
    }
}

/// Junctions for folders and hard links for files.
///
/// Neither needs the symbolic-link privilege. Hard links require the target to
/// exist on the same volume.
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct JunctionStrategy;

#[cfg(windows)]
impl LinkStrategy for JunctionStrategy {
    fn name(&self) -> &'static str {
        "junction"
    }

    fn link_folder(&self, target: &Path, link: &Path) -> io::Result<()> {
        junction::create(target, link)
    }

    fn link_file(&self, target: &Path, link: &Path) -> io::Result<()> {
        fs::hard_link(target, link)
    }

    fn unlink(&self, link: &Path, metadata: &fs::Metadata) -> io::Result<()> {
        use std::os::windows::fs::FileTypeExt;

        // Junctions are directory links and need remove_dir. Real directories
        // go to remove_file, which refuses them.
        if metadata.file_type().is_symlink_dir() {
            fs::remove_dir(link)
        } else {
            fs::remove_file(link)
        }
    }
}

/// Strategy for the platform this binary was built for.
#[cfg(unix)]
pub fn platform_strategy() -> Box<dyn LinkStrategy> {
    Box::new(SymlinkStrategy)
}

/// Strategy for the platform this binary was built for.
#[cfg(windows)]
pub fn platform_strategy() -> Box<dyn LinkStrategy> {
    Box::new(JunctionStrategy)
}

#[cfg(all(test, windows))]
mod windows_tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn junction_is_removed_and_target_kept() {
        let tmp = tempdir().unwrap();
        let target = tmp.path().join("pkg");
        fs::create_dir(&target).unwrap();
        let link = tmp.path().join("linked");
        JunctionStrategy.link_folder(&target, &link).unwrap();

        let meta = fs::symlink_metadata(&link).unwrap();
        JunctionStrategy.unlink(&link, &meta).unwrap();

        assert!(fs::symlink_metadata(&link).is_err());
        assert!(target.is_dir());
    }

    #[test]
    fn unlink_refuses_empty_real_directory() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("real");
        fs::create_dir(&dir).unwrap();

        let meta = fs::symlink_metadata(&dir).unwrap();
        assert!(JunctionStrategy.unlink(&dir, &meta).is_err());
        assert!(dir.is_dir());
    }
}
