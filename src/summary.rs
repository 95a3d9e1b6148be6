use crate::models::{BookmarkNode, BookmarkSummary, FolderSummary};

/// Derive aggregate statistics from a parsed bookmark tree.
///
/// Pure and total: there are no failure modes, and an empty slice yields
/// all-zero counts. Every call walks the tree fresh; nothing is cached.
pub fn summarize_bookmarks(nodes: &[BookmarkNode]) -> BookmarkSummary {
    let folders = nodes
        .iter()
        .filter_map(|node| match node {
            BookmarkNode::Folder {
                title, children, ..
            } => Some(FolderSummary {
                name: title.clone(),
                bookmark_count: count_bookmarks(children),
                subfolders: children.iter().filter(|c| c.is_folder()).count(),
            }),
            BookmarkNode::Bookmark { .. } => None,
        })
        .collect();

    BookmarkSummary {
        total_bookmarks: count_bookmarks(nodes),
        total_folders: count_folders(nodes),
        top_level_items: nodes.len(),
        folders,
    }
}

/// Recursive count of link nodes at any depth.
fn count_bookmarks(nodes: &[BookmarkNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            BookmarkNode::Bookmark { .. } => 1,
            BookmarkNode::Folder { children, .. } => count_bookmarks(children),
        })
        .sum()
}

/// Recursive count of folder nodes at any depth.
fn count_folders(nodes: &[BookmarkNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            BookmarkNode::Bookmark { .. } => 0,
            BookmarkNode::Folder { children, .. } => 1 + count_folders(children),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(title: &str) -> BookmarkNode {
        BookmarkNode::Bookmark {
            title: title.to_string(),
            url: Some(format!("https://{}.example.com", title)),
            add_date: None,
            icon: None,
        }
    }

    fn folder(title: &str, children: Vec<BookmarkNode>) -> BookmarkNode {
        BookmarkNode::Folder {
            title: title.to_string(),
            add_date: None,
            last_modified: None,
            children,
        }
    }

    /// Work
    ///   a, b
    ///   Projects
    ///     c
    ///     Archive
    ///       d, e
    /// f
    fn three_level_tree() -> Vec<BookmarkNode> {
        vec![
            folder(
                "Work",
                vec![
                    link("a"),
                    link("b"),
                    folder(
                        "Projects",
                        vec![link("c"), folder("Archive", vec![link("d"), link("e")])],
                    ),
                ],
            ),
            link("f"),
        ]
    }

    #[test]
    fn test_empty_input_yields_zero_counts() {
        let summary = summarize_bookmarks(&[]);
        assert_eq!(summary.total_bookmarks, 0);
        assert_eq!(summary.total_folders, 0);
        assert_eq!(summary.top_level_items, 0);
        assert!(summary.folders.is_empty());
    }

    #[test]
    fn test_counts_recurse_to_any_depth() {
        let summary = summarize_bookmarks(&three_level_tree());
        assert_eq!(summary.total_bookmarks, 6);
        assert_eq!(summary.total_folders, 3);
        assert_eq!(summary.top_level_items, 2);
    }

    #[test]
    fn test_sum_invariant() {
        fn count_all(nodes: &[BookmarkNode]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    BookmarkNode::Bookmark { .. } => 1,
                    BookmarkNode::Folder { children, .. } => 1 + count_all(children),
                })
                .sum()
        }

        let tree = three_level_tree();
        let summary = summarize_bookmarks(&tree);
        assert_eq!(
            summary.total_bookmarks + summary.total_folders,
            count_all(&tree)
        );
    }

    #[test]
    fn test_folder_entries_cover_top_level_folders_only() {
        let summary = summarize_bookmarks(&three_level_tree());

        // "Projects" and "Archive" are nested, "f" is not a folder
        assert_eq!(summary.folders.len(), 1);
        let entry = &summary.folders[0];
        assert_eq!(entry.name, "Work");
        // Recursive bookmark count, immediate subfolders only
        assert_eq!(entry.bookmark_count, 5);
        assert_eq!(entry.subfolders, 1);
    }

    #[test]
    fn test_folder_entry_matches_independent_recount() {
        let tree = three_level_tree();
        let summary = summarize_bookmarks(&tree);

        for entry in &summary.folders {
            let top = tree
                .iter()
                .find(|n| n.is_folder() && n.title() == entry.name)
                .unwrap();
            let children = match top {
                BookmarkNode::Folder { children, .. } => children,
                _ => unreachable!(),
            };
            assert_eq!(entry.bookmark_count, count_bookmarks(children));
        }
    }

    #[test]
    fn test_empty_folder_entry() {
        let summary = summarize_bookmarks(&[folder("Empty", vec![])]);
        assert_eq!(summary.total_folders, 1);
        assert_eq!(summary.total_bookmarks, 0);
        assert_eq!(
            summary.folders,
            vec![FolderSummary {
                name: "Empty".to_string(),
                bookmark_count: 0,
                subfolders: 0,
            }]
        );
    }

    #[test]
    fn test_top_level_bookmark_never_appears_in_folders() {
        let summary = summarize_bookmarks(&[link("solo")]);
        assert_eq!(summary.top_level_items, 1);
        assert_eq!(summary.total_bookmarks, 1);
        assert!(summary.folders.is_empty());
    }
}
