pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod service;
pub mod storage;
pub mod summary;

// Re-export the main types and operations for convenience
pub use config::Config;
pub use error::{BookstashError, Result};
pub use models::{BookmarkNode, BookmarkSummary, FolderSummary};
pub use parser::{parse_bookmarks, validate_format};
pub use storage::{MemoryStorage, StoredFile};
pub use summary::summarize_bookmarks;
