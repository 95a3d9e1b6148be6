use serde::{Deserialize, Serialize};

/// A single node in a parsed bookmark tree.
///
/// Browser exports carry two kinds of entries, folders and links, and the
/// two variants make "which fields are valid" a compile-time guarantee.
/// The discriminator is the variant itself; consumers must not infer the
/// kind from the presence of `url`.
///
/// Timestamp attributes (`add_date`, `last_modified`) are kept as the
/// opaque tokens the export carries; their format is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum BookmarkNode {
    /// A folder entry; `children` preserves document order and may be empty
    Folder {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        add_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        last_modified: Option<String>,
        #[serde(default)]
        children: Vec<BookmarkNode>,
    },
    /// A link entry; `icon` is an opaque reference (data URI or href)
    Bookmark {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        add_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
}

impl BookmarkNode {
    pub fn is_folder(&self) -> bool {
        matches!(self, BookmarkNode::Folder { .. })
    }

    /// Title of the node; never empty, the parser substitutes defaults
    pub fn title(&self) -> &str {
        match self {
            BookmarkNode::Folder { title, .. } => title,
            BookmarkNode::Bookmark { title, .. } => title,
        }
    }
}

/// Aggregate statistics derived from a bookmark tree.
///
/// Computed fresh on every call, never cached or mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkSummary {
    /// Count of all link nodes at any depth
    pub total_bookmarks: usize,
    /// Count of all folder nodes at any depth
    pub total_folders: usize,
    /// Count of nodes at depth 0 only
    pub top_level_items: usize,
    /// One entry per top-level folder, in document order
    pub folders: Vec<FolderSummary>,
}

/// Per-folder breakdown for a top-level folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    pub name: String,
    /// Total recursive bookmark count under this folder
    pub bookmark_count: usize,
    /// Count of the folder's immediate child folders only
    pub subfolders: usize,
}
