//! File-system query collaborator.
//!
//! The chooser never touches `std::fs` directly. Every existence check,
//! listing and permission query goes through the [`FileSystem`] trait so that
//! the navigation engine can be driven by the real disk ([`StdFileSystem`])
//! or by an in-memory tree ([`MemoryFs`]) in tests and embedders.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// One raw child of a directory, before any chooser filtering.
///
/// `hidden` is `None` when the child has no resolvable OS handle (virtual or
/// synthetic paths). Such children are never removed by hidden-filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Full path of the child.
    pub path: PathBuf,
    /// Base name (NFC-normalised).
    pub name: String,
    /// Whether the child is a directory.
    pub is_dir: bool,
    /// Hidden flag from the OS, or `None` when no OS handle backs the child.
    pub hidden: Option<bool>,
    /// Whether the current process may read the child.
    pub readable: bool,
    /// Whether the current process may write the child.
    pub writable: bool,
    /// Size in bytes for files; `None` for directories or when unavailable.
    pub size: Option<u64>,
}

/// File-system abstraction consumed by the lister and the navigation
/// controller. All calls are synchronous.
pub trait FileSystem {
    /// Returns `true` if `path` exists.
    fn exists(&self, path: &Path) -> bool;
    /// Returns `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
    /// Lists the immediate children of `dir`. Unreadable children are skipped.
    fn list_children(&self, dir: &Path) -> std::io::Result<Vec<RawEntry>>;
    /// Returns `true` if the process may read `path`.
    fn can_read(&self, path: &Path) -> bool;
    /// Returns `true` if the process may write `path`.
    fn can_write(&self, path: &Path) -> bool;
    /// Size of `path` in bytes.
    fn size(&self, path: &Path) -> std::io::Result<u64>;
    /// Resolves `path` to its canonical absolute form.
    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf>;

    /// Parent directory of `path`, if any.
    fn parent(&self, path: &Path) -> Option<PathBuf> {
        path.parent().map(Path::to_path_buf)
    }
}

/// Default implementation backed by `std::fs`.
///
/// Permission checks are mode-bit approximations: a path is readable when any
/// read bit is set (always readable on non-unix targets) and writable when it
/// is not marked read-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    fn raw_entry(path: PathBuf, metadata: &std::fs::Metadata) -> RawEntry {
        let name = path
            .file_name()
            .map(|n| crate::nfc_string(&n.to_string_lossy()))
            .unwrap_or_default();
        let is_dir = metadata.is_dir();
        RawEntry {
            hidden: Some(is_hidden(&name, metadata)),
            readable: readable(metadata),
            writable: !metadata.permissions().readonly(),
            size: if is_dir { None } else { Some(metadata.len()) },
            path,
            name,
            is_dir,
        }
    }
}

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_children(&self, dir: &Path) -> std::io::Result<Vec<RawEntry>> {
        let mut out = Vec::new();
        for dir_entry in std::fs::read_dir(dir)? {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry in {}: {e}", dir.display());
                    continue;
                }
            };
            let path = dir_entry.path();
            // Follow symlinks so a link to a directory lists as a directory.
            let metadata = match std::fs::metadata(&path).or_else(|_| dir_entry.metadata()) {
                Ok(m) => m,
                Err(e) => {
                    tracing::warn!("skipping {}: {e}", path.display());
                    continue;
                }
            };
            out.push(Self::raw_entry(path, &metadata));
        }
        Ok(out)
    }

    fn can_read(&self, path: &Path) -> bool {
        std::fs::metadata(path).map(|m| readable(&m)).unwrap_or(false)
    }

    fn can_write(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false)
    }

    fn size(&self, path: &Path) -> std::io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}

#[cfg(unix)]
fn readable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o444 != 0
}

#[cfg(not(unix))]
fn readable(_metadata: &std::fs::Metadata) -> bool {
    true
}

#[cfg(windows)]
fn is_hidden(name: &str, metadata: &std::fs::Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    name.starts_with('.') || metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0
}

#[cfg(not(windows))]
fn is_hidden(name: &str, _metadata: &std::fs::Metadata) -> bool {
    name.starts_with('.')
}

/// A node of the in-memory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemNode {
    pub is_dir: bool,
    pub size: u64,
    /// `None` marks a virtual node with no OS handle.
    pub hidden: Option<bool>,
    pub readable: bool,
    pub writable: bool,
}

impl MemNode {
    /// A readable, writable, visible directory.
    pub fn dir() -> Self {
        Self {
            is_dir: true,
            size: 0,
            hidden: Some(false),
            readable: true,
            writable: true,
        }
    }

    /// A readable, writable, visible file of `size` bytes.
    pub fn file(size: u64) -> Self {
        Self {
            is_dir: false,
            size,
            hidden: Some(false),
            readable: true,
            writable: true,
        }
    }

    #[must_use]
    pub fn hidden(self, hidden: Option<bool>) -> Self {
        Self { hidden, ..self }
    }

    #[must_use]
    pub fn readable(self, readable: bool) -> Self {
        Self { readable, ..self }
    }

    #[must_use]
    pub fn writable(self, writable: bool) -> Self {
        Self { writable, ..self }
    }
}

/// In-memory file system for tests and embedders with synthetic trees.
///
/// Paths are stored lexically normalised (`.` and `..` resolved); the root
/// `/` always exists. Intermediate directories are created on insert.
#[derive(Debug, Clone)]
pub struct MemoryFs {
    nodes: BTreeMap<PathBuf, MemNode>,
}

impl Default for MemoryFs {
    fn default() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), MemNode::dir());
        Self { nodes }
    }
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new tree with a directory at `path`.
    #[must_use]
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.with_node(path, MemNode::dir())
    }

    /// Returns a new tree with a file of `size` bytes at `path`.
    #[must_use]
    pub fn with_file(self, path: impl AsRef<Path>, size: u64) -> Self {
        self.with_node(path, MemNode::file(size))
    }

    /// Returns a new tree with `node` at `path`.
    #[must_use]
    pub fn with_node(mut self, path: impl AsRef<Path>, node: MemNode) -> Self {
        self.insert(path, node);
        self
    }

    /// Inserts (or replaces) `node` at `path`, creating missing parents.
    pub fn insert(&mut self, path: impl AsRef<Path>, node: MemNode) {
        let path = normalize(path.as_ref());
        let mut ancestor = path.parent();
        while let Some(dir) = ancestor {
            self.nodes
                .entry(dir.to_path_buf())
                .or_insert_with(MemNode::dir);
            ancestor = dir.parent();
        }
        self.nodes.insert(path, node);
    }

    /// Removes `path` and everything below it.
    pub fn remove(&mut self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        self.nodes.retain(|p, _| !p.starts_with(&path));
    }

    fn node(&self, path: &Path) -> Option<&MemNode> {
        self.nodes.get(&normalize(path))
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.node(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.node(path).is_some_and(|n| n.is_dir)
    }

    fn list_children(&self, dir: &Path) -> std::io::Result<Vec<RawEntry>> {
        let dir = normalize(dir);
        match self.nodes.get(&dir) {
            Some(node) if node.is_dir => {}
            Some(_) => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("not a directory: {}", dir.display()),
                ))
            }
            None => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no such directory: {}", dir.display()),
                ))
            }
        }

        Ok(self
            .nodes
            .iter()
            .filter(|(path, _)| path.parent() == Some(dir.as_path()))
            .map(|(path, node)| RawEntry {
                path: path.clone(),
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                is_dir: node.is_dir,
                hidden: node.hidden,
                readable: node.readable,
                writable: node.writable,
                size: if node.is_dir { None } else { Some(node.size) },
            })
            .collect())
    }

    fn can_read(&self, path: &Path) -> bool {
        self.node(path).is_some_and(|n| n.readable)
    }

    fn can_write(&self, path: &Path) -> bool {
        self.node(path).is_some_and(|n| n.writable)
    }

    fn size(&self, path: &Path) -> std::io::Result<u64> {
        self.node(path).map(|n| n.size).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        let normalized = normalize(path);
        if self.nodes.contains_key(&normalized) {
            Ok(normalized)
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such path: {}", path.display()),
            ))
        }
    }
}

/// Lexical normalisation: makes the path absolute under `/` and resolves
/// `.` and `..` without touching any real file system.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::from("/");
    for component in path.components() {
        match component {
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn std_lists_files_and_dirs() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "hello").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let mut children = StdFileSystem.list_children(tmp.path()).unwrap();
        children.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name, "a.txt");
        assert_eq!(children[0].size, Some(5));
        assert!(!children[0].is_dir);
        assert_eq!(children[1].name, "sub");
        assert!(children[1].is_dir);
        assert_eq!(children[1].size, None);
    }

    #[test]
    fn std_marks_dot_files_hidden() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".secret"), "").unwrap();

        let children = StdFileSystem.list_children(tmp.path()).unwrap();
        assert_eq!(children[0].hidden, Some(true));
    }

    #[test]
    fn std_list_missing_dir_errors() {
        let tmp = TempDir::new().unwrap();
        assert!(StdFileSystem
            .list_children(&tmp.path().join("missing"))
            .is_err());
    }

    #[test]
    fn std_exists_and_is_dir() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, "").unwrap();

        assert!(StdFileSystem.exists(&file));
        assert!(!StdFileSystem.is_dir(&file));
        assert!(StdFileSystem.is_dir(tmp.path()));
        assert!(!StdFileSystem.exists(&tmp.path().join("nope")));
    }

    #[test]
    fn std_fresh_file_is_readable_and_writable() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        fs::write(&file, "abc").unwrap();

        assert!(StdFileSystem.can_read(&file));
        assert!(StdFileSystem.can_write(&file));
        assert_eq!(StdFileSystem.size(&file).unwrap(), 3);
    }

    #[test]
    fn std_readonly_file_is_not_writable() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("ro.txt");
        fs::write(&file, "").unwrap();
        let mut perms = fs::metadata(&file).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&file, perms).unwrap();

        assert!(!StdFileSystem.can_write(&file));
    }

    #[test]
    fn memory_creates_parents() {
        let mem = MemoryFs::new().with_file("/a/b/c.txt", 10);
        assert!(mem.is_dir(Path::new("/a")));
        assert!(mem.is_dir(Path::new("/a/b")));
        assert!(!mem.is_dir(Path::new("/a/b/c.txt")));
        assert_eq!(mem.size(Path::new("/a/b/c.txt")).unwrap(), 10);
    }

    #[test]
    fn memory_lists_only_direct_children() {
        let mem = MemoryFs::new()
            .with_file("/a/one.txt", 1)
            .with_file("/a/deep/two.txt", 2);

        let names: Vec<String> = mem
            .list_children(Path::new("/a"))
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["deep", "one.txt"]);
    }

    #[test]
    fn memory_list_on_file_errors() {
        let mem = MemoryFs::new().with_file("/f.txt", 1);
        assert!(mem.list_children(Path::new("/f.txt")).is_err());
        assert!(mem.list_children(Path::new("/missing")).is_err());
    }

    #[test]
    fn memory_canonicalize_resolves_dots() {
        let mem = MemoryFs::new().with_dir("/a/b");
        assert_eq!(
            mem.canonicalize(Path::new("/a/./b/../b")).unwrap(),
            PathBuf::from("/a/b")
        );
        assert!(mem.canonicalize(Path::new("/zzz")).is_err());
    }

    #[test]
    fn memory_remove_drops_subtree() {
        let mut mem = MemoryFs::new().with_file("/a/b/c.txt", 1);
        mem.remove("/a/b");
        assert!(mem.exists(Path::new("/a")));
        assert!(!mem.exists(Path::new("/a/b")));
        assert!(!mem.exists(Path::new("/a/b/c.txt")));
    }

    #[test]
    fn parent_of_root_is_none() {
        let mem = MemoryFs::new();
        assert_eq!(mem.parent(Path::new("/")), None);
        assert_eq!(mem.parent(Path::new("/a")), Some(PathBuf::from("/")));
    }
}
