//! Client-side state of the upload workflow.
//!
//! Everything here is plain Rust so it can be tested off the browser:
//!
//! - [`StagedFiles`] - ordered set of files waiting for upload
//! - [`Columns`] - column descriptors built from an upload

use crate::types::ColumnDescriptor;

// =============================================================================
// Staged files
// =============================================================================

/// Anything that can be shown in the file list by name.
pub trait NamedFile {
    fn file_name(&self) -> String;
}

impl NamedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Files selected by the user, in selection order.
///
/// Duplicate names are allowed. Operations return a new set and leave
/// `self` untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedFiles<F> {
    files: Vec<F>,
}

impl<F> Default for StagedFiles<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F: Clone> StagedFiles<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set reported after a chooser interaction: exactly its selection.
    pub fn from_selection(selection: impl IntoIterator<Item = F>) -> Self {
        Self {
            files: selection.into_iter().collect(),
        }
    }

    /// A copy of the set without the file at `index`.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn without(&self, index: usize) -> Option<Self> {
        if index >= self.files.len() {
            return None;
        }
        let files = self
            .files
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, file)| file.clone())
            .collect();
        Some(Self { files })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn as_slice(&self) -> &[F] {
        &self.files
    }
}

impl<F: NamedFile> StagedFiles<F> {
    /// File names in staging order.
    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(NamedFile::file_name).collect()
    }
}

// =============================================================================
// Columns
// =============================================================================

/// Column descriptors of the last upload, in header order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Columns(Vec<ColumnDescriptor>);

impl Columns {
    /// One unselected descriptor per header. Previous selections are not
    /// carried over.
    pub fn from_headers(headers: impl IntoIterator<Item = String>) -> Self {
        Self(headers.into_iter().map(ColumnDescriptor::new).collect())
    }

    /// Set the flag of a single column. Returns `false` if `index` is out
    /// of range, in which case nothing changes.
    pub fn set_selected(&mut self, index: usize, selected: bool) -> bool {
        match self.0.get_mut(index) {
            Some(column) => {
                column.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&ColumnDescriptor> {
        self.0.get(index)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.get(index).map(|c| c.selected).unwrap_or(false)
    }

    /// Names of the ticked columns, in header order.
    pub fn selected_names(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.0.iter()
    }
}

impl IntoIterator for Columns {
    type Item = ColumnDescriptor;
    type IntoIter = std::vec::IntoIter<ColumnDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
