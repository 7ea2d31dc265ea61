//! In-memory record collections with write-through persistence.

use std::{fmt, path::PathBuf};

use crate::storage::writer::{WriteError, write_records};

/// A record that can be held by a [`Repository`].
pub trait Record: fmt::Display {
    /// The record's identifier, unique within its repository.
    fn id(&self) -> u32;
}

/// An insertion-ordered, in-memory collection of records backed by a flat
/// file.
///
/// Every mutation rewrites the backing file in full from the current
/// in-memory state. The file is never read back, so a freshly constructed
/// repository is always empty regardless of what the file contains.
#[derive(Debug)]
pub struct Repository<R> {
    records: Vec<R>,
    path: PathBuf,
}

impl<R: Record> Repository<R> {
    /// Creates an empty repository backed by the file at `path`.
    ///
    /// The file is not created until the first mutation.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self {
            records: Vec::new(),
            path,
        }
    }

    /// Appends a record and rewrites the backing file.
    ///
    /// Identifier uniqueness is the caller's responsibility: check with
    /// [`exists`](Self::exists) before inserting. This layer does not reject
    /// duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be written. The record
    /// remains in memory either way.
    pub fn add(&mut self, record: R) -> Result<(), WriteError> {
        self.records.push(record);
        self.flush()
    }

    /// Whether a record with the given identifier is currently held.
    ///
    /// Linear scan; collections are small enough that this never matters.
    #[must_use]
    pub fn exists(&self, id: u32) -> bool {
        self.records.iter().any(|record| record.id() == id)
    }

    /// Removes the record with the given identifier, if present.
    ///
    /// Returns `true` if a record was removed. The backing file is rewritten
    /// only when a removal actually occurred, so removing an absent
    /// identifier touches neither memory nor disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing file cannot be written.
    pub fn remove(&mut self, id: u32) -> Result<bool, WriteError> {
        let held = self.records.len();
        self.records.retain(|record| record.id() != id);
        if self.records.len() == held {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    /// The held records, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[R] {
        &self.records
    }

    fn flush(&self) -> Result<(), WriteError> {
        write_records(&self.path, &self.records)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::Repository;
    use crate::domain::{Animal, Species};

    fn animal(id: u32, name: &str) -> Animal {
        Animal {
            id,
            name: name.to_string(),
            species: Species::Lion,
            age: 4,
            weight: 190.5,
        }
    }

    fn setup_repository() -> (TempDir, Repository<Animal>) {
        let tmp = TempDir::new().expect("failed to create temp dir");
        let path = tmp.path().join("animals.txt");
        (tmp, Repository::new(path))
    }

    #[test]
    fn list_preserves_insertion_order() {
        let (_tmp, mut repo) = setup_repository();
        repo.add(animal(3, "Leo")).unwrap();
        repo.add(animal(1, "Rajah")).unwrap();
        repo.add(animal(2, "Dumbo")).unwrap();

        let ids: Vec<_> = repo.list().iter().map(|a| a.id).collect();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn exists_tracks_add_and_remove() {
        let (_tmp, mut repo) = setup_repository();
        assert!(!repo.exists(7));

        repo.add(animal(7, "Leo")).unwrap();
        assert!(repo.exists(7));

        assert!(repo.remove(7).unwrap());
        assert!(!repo.exists(7));
    }

    #[test]
    fn every_add_rewrites_the_backing_file() {
        let (tmp, mut repo) = setup_repository();
        let path = tmp.path().join("animals.txt");

        repo.add(animal(1, "Leo")).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Animal(id=1, name=Leo, species=Lion, age=4, weight=190.5)"
        );

        repo.add(animal(2, "Rajah")).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Animal(id=1, name=Leo, species=Lion, age=4, weight=190.5)\n\
             Animal(id=2, name=Rajah, species=Lion, age=4, weight=190.5)"
        );
    }

    #[test]
    fn remove_rewrites_the_backing_file() {
        let (tmp, mut repo) = setup_repository();
        let path = tmp.path().join("animals.txt");

        repo.add(animal(1, "Leo")).unwrap();
        repo.add(animal(2, "Rajah")).unwrap();
        assert!(repo.remove(1).unwrap());

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Animal(id=2, name=Rajah, species=Lion, age=4, weight=190.5)"
        );
        assert!(repo.exists(2));
        assert_eq!(repo.list().len(), 1);
    }

    #[test]
    fn remove_of_absent_id_is_a_no_op() {
        let (tmp, mut repo) = setup_repository();
        let path = tmp.path().join("animals.txt");

        assert!(!repo.remove(99).unwrap());
        assert!(repo.list().is_empty());
        // no mutation has occurred, so no file write either
        assert!(!path.exists());
    }

    #[test]
    fn remove_of_absent_id_leaves_the_file_unchanged() {
        let (tmp, mut repo) = setup_repository();
        let path = tmp.path().join("animals.txt");

        repo.add(animal(1, "Leo")).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        assert!(!repo.remove(99).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
        assert_eq!(repo.list().len(), 1);
    }
}
