//! In-memory directory of tagged records.
//!
//! Keeps records in insertion order and guarantees that no two records
//! share a tag.  The directory never sees plaintext secrets; callers seal
//! values before adding them.

use crate::errors::{Result, VaultError};

use super::record::{SecretRecord, Tag};

/// Ordered, tag-unique collection of secret records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDirectory {
    records: Vec<SecretRecord>,
}

impl RecordDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from a decoded record list, rejecting duplicate tags.
    pub fn try_from_records(records: Vec<SecretRecord>) -> Result<Self> {
        let mut directory = Self::new();
        for record in records {
            directory.add(record.tag, record.ciphertext, false)?;
        }
        Ok(directory)
    }

    /// Position of the record with `tag`, if any.
    pub fn find_by_tag(&self, tag: &Tag) -> Option<usize> {
        self.records.iter().position(|r| &r.tag == tag)
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.find_by_tag(tag).is_some()
    }

    /// The record stored under `tag`.
    pub fn get(&self, tag: &Tag) -> Result<&SecretRecord> {
        self.find_by_tag(tag)
            .map(|i| &self.records[i])
            .ok_or_else(|| VaultError::TagNotFound(tag.to_string()))
    }

    /// Append a record.
    ///
    /// An existing tag is an error unless `overwrite` is set, in which case
    /// the old record is removed first and the new one goes to the end.
    pub fn add(&mut self, tag: Tag, ciphertext: String, overwrite: bool) -> Result<()> {
        if let Some(index) = self.find_by_tag(&tag) {
            if !overwrite {
                return Err(VaultError::DuplicateTag(tag.to_string()));
            }
            self.records.remove(index);
        }
        self.records.push(SecretRecord { tag, ciphertext });
        Ok(())
    }

    /// Remove the record with `tag`, keeping the rest in order.
    pub fn remove(&mut self, tag: &Tag) -> Result<SecretRecord> {
        let index = self
            .find_by_tag(tag)
            .ok_or_else(|| VaultError::TagNotFound(tag.to_string()))?;
        Ok(self.records.remove(index))
    }

    pub fn records(&self) -> &[SecretRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &SecretRecord> {
        self.records.iter()
    }

    /// Tags in insertion order.
    pub fn tags(&self) -> Vec<&Tag> {
        self.records.iter().map(|r| &r.tag).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> Tag {
        Tag::parse(s).unwrap()
    }

    fn assert_unique(dir: &RecordDirectory) {
        let tags = dir.tags();
        for (i, a) in tags.iter().enumerate() {
            assert!(!tags[i + 1..].contains(a), "duplicate tag {a}");
        }
    }

    #[test]
    fn add_and_find() {
        let mut dir = RecordDirectory::new();
        dir.add(tag("email"), "ct1".into(), false).unwrap();
        dir.add(tag("bank"), "ct2".into(), false).unwrap();

        assert_eq!(dir.find_by_tag(&tag("email")), Some(0));
        assert_eq!(dir.find_by_tag(&tag("bank")), Some(1));
        assert_eq!(dir.find_by_tag(&tag("other")), None);
        assert_eq!(dir.get(&tag("bank")).unwrap().ciphertext, "ct2");
    }

    #[test]
    fn duplicate_without_overwrite_leaves_directory_unchanged() {
        let mut dir = RecordDirectory::new();
        dir.add(tag("site"), "original".into(), false).unwrap();
        let before = dir.clone();

        let result = dir.add(tag("site"), "replacement".into(), false);
        assert!(matches!(result, Err(VaultError::DuplicateTag(t)) if t == "site"));
        assert_eq!(dir, before);
    }

    #[test]
    fn overwrite_replaces_and_moves_to_end() {
        let mut dir = RecordDirectory::new();
        dir.add(tag("a"), "1".into(), false).unwrap();
        dir.add(tag("b"), "2".into(), false).unwrap();
        dir.add(tag("a"), "3".into(), true).unwrap();

        assert_eq!(dir.len(), 2);
        let tags: Vec<&str> = dir.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, ["b", "a"]);
        assert_eq!(dir.get(&tag("a")).unwrap().ciphertext, "3");
    }

    #[test]
    fn remove_preserves_order() {
        let mut dir = RecordDirectory::new();
        for t in ["one", "two", "three", "four"] {
            dir.add(tag(t), t.to_uppercase(), false).unwrap();
        }
        let removed = dir.remove(&tag("two")).unwrap();
        assert_eq!(removed.ciphertext, "TWO");

        let tags: Vec<&str> = dir.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, ["one", "three", "four"]);
    }

    #[test]
    fn delete_then_delete_reports_not_found() {
        let mut dir = RecordDirectory::new();
        dir.add(tag("email"), "ct".into(), false).unwrap();
        dir.add(tag("keep"), "ct".into(), false).unwrap();

        dir.remove(&tag("email")).unwrap();
        let after_first = dir.clone();

        let second = dir.remove(&tag("email"));
        assert!(matches!(second, Err(VaultError::TagNotFound(t)) if t == "email"));
        assert_eq!(dir, after_first);
    }

    #[test]
    fn tags_stay_unique_across_mixed_operations() {
        let mut dir = RecordDirectory::new();
        let ops: [(&str, bool); 10] = [
            ("a", false),
            ("b", false),
            ("a", false),
            ("a", true),
            ("c", false),
            ("b", true),
            ("c", true),
            ("d", false),
            ("d", false),
            ("a", true),
        ];
        for (i, (t, overwrite)) in ops.iter().enumerate() {
            let _ = dir.add(tag(t), format!("ct{i}"), *overwrite);
            if i % 3 == 2 {
                let _ = dir.remove(&tag("c"));
            }
            assert_unique(&dir);
        }
    }

    #[test]
    fn try_from_records_rejects_duplicates() {
        let records = vec![
            SecretRecord {
                tag: tag("x"),
                ciphertext: "1".into(),
            },
            SecretRecord {
                tag: tag("x"),
                ciphertext: "2".into(),
            },
        ];
        assert!(RecordDirectory::try_from_records(records).is_err());
    }
}
