//! FileSystem trait for abstracting file I/O.
//!
//! Defined in charsmith-core so the wizard can write character files without
//! depending on any specific filesystem implementation. The `LocalFileSystem`
//! adapter lives in charsmith-infra.

use std::path::Path;

/// Abstraction over filesystem operations.
///
/// This trait allows the wizard to read/write files without coupling to the
/// real filesystem, enabling easy testing with in-memory implementations.
pub trait FileSystem: Send + Sync {
    /// Write string content to a file, creating or truncating it.
    ///
    /// Parent directories are NOT created; a missing parent is an error.
    fn write_file(
        &self,
        path: &Path,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Read a file's content as a string.
    fn read_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String, std::io::Error>> + Send;

    /// Create a directory and all parent directories.
    fn create_dir_all(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;

    /// Check whether a path exists.
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;
}
