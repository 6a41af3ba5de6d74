//! The context: every loaded unit and the forest of their roots.

use std::path::{Path, PathBuf};

use super::Error;
use super::file_loader;
use crate::base::UnitId;
use crate::query::{self, QueryError};
use crate::syntax::{NodeId, NodeRef, SourceUnit};

/// Owns loaded source units and chains their roots into one forest.
///
/// Each successful load appends one unit, and with it one root at the end of
/// the forest. Units are never removed individually; dropping the context (or
/// calling [`Context::delete`]) releases all of them at once, and with them
/// every node they produced.
#[derive(Debug, Default)]
pub struct Context {
    units: Vec<SourceUnit>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Release every unit.
    pub fn delete(self) {
        tracing::debug!("Releasing {} unit(s)", self.units.len());
    }

    /// Read, lex and parse the file at `path`, and append its root to the forest.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `path` does not name a readable regular file
    /// - the text is not valid UTF-8
    /// - the text is not a valid unit
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<NodeId, Error> {
        let path = path.as_ref();
        let text = file_loader::load_file(path).inspect_err(|error| {
            tracing::debug!("Failed to load {}: {}", path.display(), error);
        })?;
        self.push(path.to_path_buf(), text)
    }

    /// Like [`Context::load`], for text already in memory. `name` stands in
    /// for the path in diagnostics.
    pub fn load_source(
        &mut self,
        name: impl Into<PathBuf>,
        text: impl Into<String>,
    ) -> Result<NodeId, Error> {
        self.push(name.into(), text.into())
    }

    /// Load every `.y` file below `dir` in path order. Stops at the first
    /// failing file; units loaded before it stay loaded.
    ///
    /// # Errors
    ///
    /// [`Error::NotADirectory`] if `dir` is not a directory, otherwise the
    /// error of the first file that fails to load.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<Vec<NodeId>, Error> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
        file_loader::collect_file_paths(dir)?
            .into_iter()
            .map(|path| self.load(path))
            .collect()
    }

    fn push(&mut self, path: PathBuf, text: String) -> Result<NodeId, Error> {
        let bytes = text.len();
        let unit = match SourceUnit::parse(path.clone(), text) {
            Ok(unit) => unit,
            Err(error) => {
                tracing::debug!("Failed to load {}: {}", path.display(), error);
                return Err(Error::Syntax { path, error });
            }
        };

        let id = NodeId::root_of(UnitId::new(self.units.len()));
        tracing::debug!(
            "Loaded {} ({} bytes, {} nodes) as {}",
            path.display(),
            bytes,
            unit.tree().len(),
            id.unit()
        );
        self.units.push(unit);
        Ok(id)
    }

    /// Resolve a path such as `"settings graphics vsync"` or
    /// `"settings.graphics.vsync"` against the forest.
    ///
    /// A segment that matches nothing gives `Ok(None)`; only a malformed
    /// path is an error.
    pub fn find(&self, path: &str) -> Result<Option<NodeRef<'_>>, QueryError> {
        query::find(self.first_root(), path)
    }

    /// Step a caller-held cursor through the sibling list starting at `begin`.
    ///
    /// An empty cursor is set to `begin` without yielding it. Each call then
    /// moves the cursor to the next sibling and returns it, or returns `None`
    /// (leaving the cursor in place) once the list is exhausted.
    pub fn iterate(&self, begin: NodeId, cursor: &mut Option<NodeId>) -> Option<NodeRef<'_>> {
        let current = *cursor.get_or_insert(begin);
        let next = self.node(current)?.next()?;
        *cursor = Some(next.id());
        Some(next)
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        NodeRef::new(&self.units, id)
    }

    /// Root of the first loaded unit: the head of the forest.
    pub fn first_root(&self) -> Option<NodeRef<'_>> {
        self.node(NodeId::root_of(UnitId::new(0)))
    }

    /// Forest roots in load order.
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> {
        (0..self.units.len()).filter_map(|i| self.node(NodeId::root_of(UnitId::new(i))))
    }

    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&SourceUnit> {
        self.units.get(id.index())
    }

    /// Number of loaded units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
