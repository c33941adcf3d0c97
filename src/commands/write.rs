use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use crate::runtime::Runtime;

/// Writes the document to `path`, creating missing parent directories.
///
/// An existing file is overwritten in place.
#[tracing::instrument(skip(runtime, contents))]
pub fn write_output<R: Runtime + ?Sized>(runtime: &R, path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !runtime.exists(parent) {
            debug!("Creating output directory {:?}", parent);
            runtime
                .create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    runtime
        .write(path, contents.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MockRuntime, RealRuntime};
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_nested_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("docs/feeds/appcast.xml");

        write_output(&RealRuntime, &path, "<rss/>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<rss/>");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appcast.xml");
        std::fs::write(&path, "old content that is longer").unwrap();

        write_output(&RealRuntime, &path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_skips_existing_parent() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_exists()
            .withf(|path| path == Path::new("/out"))
            .returning(|_| true);
        runtime.expect_create_dir_all().never();
        runtime
            .expect_write()
            .withf(|path, contents| path == Path::new("/out/appcast.xml") && contents == b"xml")
            .times(1)
            .returning(|_, _| Ok(()));

        write_output(&runtime, Path::new("/out/appcast.xml"), "xml").unwrap();
    }

    #[test]
    fn test_write_bare_file_name() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().never();
        runtime.expect_create_dir_all().never();
        runtime.expect_write().times(1).returning(|_, _| Ok(()));

        write_output(&runtime, Path::new("appcast.xml"), "xml").unwrap();
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| true);
        runtime
            .expect_write()
            .returning(|_, _| Err(anyhow::anyhow!("permission denied")));

        let err = write_output(&runtime, Path::new("/out/appcast.xml"), "xml").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("/out/appcast.xml"));
        assert!(message.contains("permission denied"));
    }
}
