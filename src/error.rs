use std::fmt;
use std::path::PathBuf;

use crate::manifest::LinkKind;

/// Main error type for link operations
#[derive(Debug)]
pub enum LinkError {
    Io {
        source: std::io::Error,
        context: String,
    },
    ManifestNotFound {
        path: PathBuf,
    },
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    Link {
        kind: LinkKind,
        link: PathBuf,
        target: PathBuf,
        source: std::io::Error,
    },
    Generic {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl LinkError {
    /// Process exit status reported for this error.
    ///
    /// Every failure is terminal and reported the same way.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::Io { source, context } => {
                write!(f, "IO error while {}: {}", context, source)
            }
            LinkError::ManifestNotFound { path } => {
                write!(f, "Input file not found: {}", path.display())
            }
            LinkError::ManifestParse { path, source } => {
                write!(f, "Failed to parse {}: {}", path.display(), source)
            }
            LinkError::Link { kind, link, target, source } => {
                write!(
                    f,
                    "Failed to create {} {} -> {}: {}",
                    kind,
                    link.display(),
                    target.display(),
                    source
                )
            }
            LinkError::Generic { message, .. } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkError::Io { source, .. } => Some(source),
            LinkError::ManifestParse { source, .. } => Some(source),
            LinkError::Link { source, .. } => Some(source),
            LinkError::Generic { source: Some(source), .. } => Some(&**source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;

pub trait ErrorContext<T> {
    fn with_io_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::result::Result<T, std::io::Error> {
    fn with_io_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LinkError::Io {
            source: e,
            context: f(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn io_context_is_kept_in_message_and_source() {
        let res: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "nope"));
        let err = res.with_io_context(|| "removing a/b".to_string()).unwrap_err();

        assert!(err.to_string().contains("removing a/b"));
        assert!(err.source().is_some());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn missing_manifest_names_the_path() {
        let err = LinkError::ManifestNotFound {
            path: PathBuf::from("/deploy/deploy-metadata.json"),
        };
        assert_eq!(
            err.to_string(),
            "Input file not found: /deploy/deploy-metadata.json"
        );
    }

    #[test]
    fn link_error_mentions_kind_and_paths() {
        let err = LinkError::Link {
            kind: LinkKind::FileLink,
            link: PathBuf::from("out/a.txt"),
            target: PathBuf::from("src/a.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("fileLink"));
        assert!(msg.contains("out/a.txt"));
        assert!(msg.contains("src/a.txt"));
    }
}
