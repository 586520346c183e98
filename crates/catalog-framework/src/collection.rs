//! # Generic Collection
//!
//! This module defines the `Collection`, the component that owns the records of one
//! kind. It keeps them in insertion order, rejects duplicate identifiers on the way
//! in and removes by identifier on the way out.

use crate::error::CollectionError;
use crate::record::Record;
use std::borrow::Borrow;
use std::fmt::Display;
use tracing::{debug, info, warn};

/// The generic in-memory manager for a sequence of records of one kind.
///
/// # Architecture Note
/// This struct is the only place that knows how records are stored. Domain crates
/// scope it to one kind with a type alias (`type BookManager = Collection<Book>`)
/// and never add behaviour on top.
///
/// **Failure Model**:
/// Every failure is a value, never a panic. The boolean operations ([`add`](Self::add),
/// [`remove`](Self::remove)) log a `warn!` diagnostic and return `false`, so a caller
/// feeding many records in a row can keep going after one is rejected. The `try_*`
/// forms return the underlying [`CollectionError`] instead.
///
/// ```rust
/// use catalog_framework::{Collection, Record};
///
/// #[derive(Debug)]
/// struct Note { id: String }
///
/// impl Record for Note {
///     type Id = String;
///     const KIND: &'static str = "note";
///     fn id(&self) -> &String { &self.id }
/// }
///
/// let mut notes = Collection::new();
/// assert!(notes.add(Note { id: "n1".into() }));
/// assert!(!notes.add(Note { id: "n1".into() }));
/// assert_eq!(notes.len(), 1);
///
/// assert!(notes.remove("n1"));
/// assert!(!notes.remove("n1"));
/// assert!(notes.is_empty());
/// ```
///
/// # Implementation Details
///
/// * **Add**: scans the stored records for one with the same id. If found, the add
///   is rejected and the sequence is untouched; otherwise the record is appended.
/// * **Remove**: scans in insertion order and removes the *first* record whose id
///   matches. Nothing changes when no record matches.
/// * **Lookup**: accepts anything the id type borrows as, so `Collection<Book>`
///   can be queried with a plain `&str`.
#[derive(Debug)]
pub struct Collection<T: Record> {
    items: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` unless a record with the same id is already stored.
    pub fn try_add(&mut self, item: T) -> Result<(), CollectionError> {
        debug!(kind = T::KIND, ?item, "Add");
        if self.position(item.id()).is_some() {
            return Err(CollectionError::DuplicateId {
                kind: T::KIND,
                id: item.id().to_string(),
            });
        }
        info!(kind = T::KIND, id = %item.id(), size = self.items.len() + 1, "Added");
        self.items.push(item);
        Ok(())
    }

    /// Appends `item`, returning `false` (and logging why) if it was rejected.
    pub fn add(&mut self, item: T) -> bool {
        match self.try_add(item) {
            Ok(()) => true,
            Err(e) => {
                warn!(kind = T::KIND, error = %e, "Add failed");
                false
            }
        }
    }

    /// Removes and returns the first record whose id equals `id`.
    pub fn try_remove<Q>(&mut self, id: &Q) -> Result<T, CollectionError>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + Display + ?Sized,
    {
        match self.position(id) {
            Some(idx) => {
                let item = self.items.remove(idx);
                info!(kind = T::KIND, %id, size = self.items.len(), "Removed");
                Ok(item)
            }
            None => Err(CollectionError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            }),
        }
    }

    /// Removes the first record whose id equals `id`, returning `false` (and logging)
    /// if none matched.
    pub fn remove<Q>(&mut self, id: &Q) -> bool
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + Display + ?Sized,
    {
        match self.try_remove(id) {
            Ok(_) => true,
            Err(e) => {
                warn!(kind = T::KIND, error = %e, "Remove failed");
                false
            }
        }
    }

    /// All stored records, in insertion order.
    pub fn get_all(&self) -> &[T] {
        &self.items
    }

    /// Looks up the record whose id equals `id`.
    pub fn get<Q>(&self, id: &Q) -> Option<&T>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items.iter().find(|item| <T::Id as Borrow<Q>>::borrow(item.id()) == id)
    }

    /// Mutable lookup, used to apply guarded updates to a stored record.
    pub fn get_mut<Q>(&mut self, id: &Q) -> Option<&mut T>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items.iter_mut().find(|item| <T::Id as Borrow<Q>>::borrow(item.id()) == id)
    }

    /// Whether a record with this id is stored.
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(id).is_some()
    }

    /// Iterates the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position<Q>(&self, id: &Q) -> Option<usize>
    where
        T::Id: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items.iter().position(|item| <T::Id as Borrow<Q>>::borrow(item.id()) == id)
    }
}

impl<'a, T: Record> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
