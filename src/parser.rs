use crate::error::{BookstashError, Result};
use crate::models::BookmarkNode;
use log::{debug, trace};
use scraper::{ElementRef, Html, Selector};

/// Marker substring of the Netscape bookmark export doctype, lowercased.
/// Every browser export starts with `<!DOCTYPE NETSCAPE-Bookmark-file-1>`.
pub const FORMAT_MARKER: &str = "netscape-bookmark-file";

/// Check that raw content looks like a Netscape bookmark export.
///
/// This is a cheap containment check that runs before any markup parsing.
/// Content without the marker fails with [`BookstashError::InvalidFormat`].
pub fn validate_format(content: &str) -> Result<()> {
    if content.to_ascii_lowercase().contains(FORMAT_MARKER) {
        Ok(())
    } else {
        Err(BookstashError::InvalidFormat(
            "expected a Netscape bookmark export (NETSCAPE-Bookmark-file doctype)".to_string(),
        ))
    }
}

/// Parse bookmark-export markup into a tree of [`BookmarkNode`]s.
///
/// Exports are not well-formed XML (`<DT>` and `<p>` tags are typically
/// left unclosed), so the content goes through a lenient HTML parse first.
/// The root container is the first `<dl>` that is a direct child of the
/// document body; if none exists the call fails with
/// [`BookstashError::NoBookmarkStructure`]. That is the only hard failure:
/// individual entries that cannot be classified are dropped, never escalated.
pub fn parse_bookmarks(html: &str) -> Result<Vec<BookmarkNode>> {
    debug!("Parsing bookmark markup ({} bytes)", html.len());
    let document = Html::parse_document(html);

    // Browsers export bookmarks with a root DL inside the body
    let root_selector = Selector::parse("body > dl").unwrap();
    let root = document.select(&root_selector).next().ok_or_else(|| {
        BookstashError::NoBookmarkStructure("no bookmark structure found".to_string())
    })?;

    let nodes = parse_level(root);
    debug!("Parsed {} top-level bookmark nodes", nodes.len());
    Ok(nodes)
}

/// Parse one `<dl>` container into the nodes of its `<dt>` items.
///
/// Only direct-child `<dt>` elements are considered. Descendants nested
/// inside child containers belong to deeper levels and must not be picked
/// up here, otherwise a bookmark three folders deep would be counted at
/// every ancestor level.
fn parse_level(container: ElementRef<'_>) -> Vec<BookmarkNode> {
    container
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "dt")
        .filter_map(try_parse_item)
        .collect()
}

/// Classify a single `<dt>` item as a folder or a link.
///
/// Folders carry a direct-child `<h3>` heading and optionally a nested
/// `<dl>` with their entries; links carry a direct-child `<a>`. Items with
/// neither (descriptions, separators, stray markup) yield `None` and are
/// filtered out by the caller.
fn try_parse_item(dt: ElementRef<'_>) -> Option<BookmarkNode> {
    if let Some(h3) = direct_child(dt, "h3") {
        let children = direct_child(dt, "dl").map(parse_level).unwrap_or_default();
        return Some(BookmarkNode::Folder {
            title: text_or(h3, "Untitled Folder"),
            add_date: attr(h3, "add_date"),
            last_modified: attr(h3, "last_modified"),
            children,
        });
    }

    if let Some(a) = direct_child(dt, "a") {
        return Some(BookmarkNode::Bookmark {
            title: text_or(a, "Untitled Bookmark"),
            url: attr(a, "href"),
            add_date: attr(a, "add_date"),
            icon: attr(a, "icon"),
        });
    }

    trace!("Skipping <dt> item with neither heading nor anchor");
    None
}

/// First direct child element with the given (lowercase) tag name.
fn direct_child<'a>(parent: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == name)
}

/// Trimmed text content of an element, or the fallback when empty.
///
/// Whitespace-only text trims to empty and falls back too; the rule is
/// "trim, then fall back on empty", not "fall back on missing".
fn text_or(el: ElementRef<'_>, fallback: &str) -> String {
    let text = el.text().collect::<String>();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(|v| v.to_string())
}
