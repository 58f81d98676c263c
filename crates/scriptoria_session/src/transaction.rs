//! Copy-on-write edit transactions over a committed document.

use scriptoria_core::{Document, FieldPath};
use scriptoria_error::EditError;
use tracing::debug;

/// An open edit over a private deep copy of a document.
///
/// The committed document is never touched: [`commit`](Self::commit) hands
/// the draft back for the caller to install, and [`discard`](Self::discard)
/// drops it.
///
/// # Examples
///
/// ```
/// use scriptoria_core::{Document, FieldPath};
/// use scriptoria_session::EditTransaction;
///
/// let mut committed = Document::default();
/// committed.screenplay.title = "Fog".to_string();
///
/// let mut tx = EditTransaction::begin(&committed);
/// tx.set_field(&FieldPath::Title, "Fog Line").unwrap();
/// assert_eq!(committed.title(), "Fog");
///
/// let edited = tx.commit();
/// assert_eq!(edited.title(), "Fog Line");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EditTransaction {
    draft: Document,
    changes: Vec<FieldPath>,
}

impl EditTransaction {
    /// Open a transaction over a deep copy of `committed`.
    pub fn begin(committed: &Document) -> Self {
        debug!(title = %committed.title(), "Opening edit transaction");
        Self {
            draft: committed.clone(),
            changes: Vec::new(),
        }
    }

    /// Replace the value at `path` in the draft, returning the previous value.
    ///
    /// # Errors
    ///
    /// [`scriptoria_error::EditErrorKind::PathNotFound`] if `path` does not
    /// address an existing slot; the draft is unchanged.
    pub fn set_field(
        &mut self,
        path: &FieldPath,
        value: impl Into<String>,
    ) -> Result<String, EditError> {
        let previous = self.draft.set_field(path, value)?;
        debug!(%path, "Draft field updated");
        if !self.changes.contains(path) {
            self.changes.push(path.clone());
        }
        Ok(previous)
    }

    /// The draft as it stands.
    pub fn draft(&self) -> &Document {
        &self.draft
    }

    /// Paths touched so far, in first-touch order.
    pub fn changes(&self) -> &[FieldPath] {
        &self.changes
    }

    /// Whether any field was set.
    pub fn is_dirty(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Close the transaction, yielding the draft as the new committed document.
    pub fn commit(self) -> Document {
        debug!(changes = self.changes.len(), "Committing edit transaction");
        self.draft
    }

    /// Close the transaction and drop the draft.
    pub fn discard(self) {
        debug!(changes = self.changes.len(), "Discarding edit transaction");
    }
}
