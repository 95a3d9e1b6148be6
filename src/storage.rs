use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// An uploaded file held in memory between upload and parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    /// Unique identifier, assigned at store time
    pub id: String,
    /// Original filename
    pub filename: String,
    /// File content, already decoded to UTF-8 text
    pub content: String,
    pub mime_type: String,
    /// Content size in bytes
    pub size: usize,
    pub uploaded_at: DateTime<Utc>,
}

/// Per-file metadata reported by [`MemoryStorage::status`]; content omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFileInfo {
    pub id: String,
    pub filename: String,
    pub size: usize,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStatus {
    pub total_files: usize,
    pub files: Vec<StoredFileInfo>,
}

/// In-memory, id-keyed file store.
///
/// Nothing here is durable; dropping the store drops every file. Callers
/// that need concurrent access wrap it in their own synchronization, the
/// store itself holds no shared mutable state.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: HashMap<String, StoredFile>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a file and return the stored record with its assigned id.
    pub fn add_file(&mut self, filename: &str, mime_type: &str, content: String) -> StoredFile {
        let id = Uuid::new_v4().to_string();
        let file = StoredFile {
            id: id.clone(),
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            size: content.len(),
            content,
            uploaded_at: Utc::now(),
        };

        self.files.insert(id.clone(), file.clone());
        debug!(
            "Stored file '{}' with ID {} ({} files total)",
            filename,
            id,
            self.files.len()
        );
        file
    }

    pub fn get_file_by_id(&self, id: &str) -> Option<&StoredFile> {
        self.files.get(id)
    }

    pub fn get_all_files(&self) -> Vec<&StoredFile> {
        self.files.values().collect()
    }

    /// Remove a file; returns whether it existed.
    pub fn delete_file(&mut self, id: &str) -> bool {
        self.files.remove(id).is_some()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Snapshot of what the store holds, without file contents.
    pub fn status(&self) -> StorageStatus {
        StorageStatus {
            total_files: self.files.len(),
            files: self
                .files
                .values()
                .map(|f| StoredFileInfo {
                    id: f.id.clone(),
                    filename: f.filename.clone(),
                    size: f.size,
                    uploaded_at: f.uploaded_at,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_file() {
        let mut storage = MemoryStorage::new();
        let stored = storage.add_file("bookmarks.html", "text/html", "<DL></DL>".to_string());

        assert_eq!(stored.filename, "bookmarks.html");
        assert_eq!(stored.size, 9);

        let fetched = storage.get_file_by_id(&stored.id).unwrap();
        assert_eq!(fetched, &stored);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut storage = MemoryStorage::new();
        let a = storage.add_file("a.html", "text/html", String::new());
        let b = storage.add_file("a.html", "text/html", String::new());
        assert_ne!(a.id, b.id);
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn test_delete_file() {
        let mut storage = MemoryStorage::new();
        let stored = storage.add_file("a.html", "text/html", String::new());

        assert!(storage.delete_file(&stored.id));
        assert!(!storage.delete_file(&stored.id));
        assert!(storage.get_file_by_id(&stored.id).is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_unknown_id_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.get_file_by_id("no-such-id").is_none());
    }

    #[test]
    fn test_clear() {
        let mut storage = MemoryStorage::new();
        storage.add_file("a.html", "text/html", String::new());
        storage.add_file("b.html", "text/html", String::new());
        storage.clear();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_status_omits_content() {
        let mut storage = MemoryStorage::new();
        let stored = storage.add_file("a.html", "text/html", "secret-content".to_string());

        let status = storage.status();
        assert_eq!(status.total_files, 1);
        assert_eq!(status.files[0].id, stored.id);
        assert_eq!(status.files[0].size, stored.size);

        let json = serde_json::to_string(&status).unwrap();
        assert!(!json.contains("secret-content"));
        assert!(json.contains("\"totalFiles\":1"));
    }
}
