//! Bookmark Manager for Stark Browser.
//!
//! Append-only, in-memory bookmark list. Duplicates are detected by exact
//! string equality, so `https://x.com` and `https://x.com/` are distinct.

use crate::types::bookmark::Bookmark;

/// Trait defining bookmark store operations.
pub trait BookmarkManagerTrait {
    /// Appends `url` unless it is already stored. Returns true if it was added.
    fn add_bookmark(&mut self, url: &str) -> bool;
    fn contains(&self, url: &str) -> bool;
    fn list_bookmarks(&self) -> &[Bookmark];
    /// Renders the bookmark listing page.
    fn render(&self) -> String;
}

/// In-memory bookmark store.
#[derive(Debug, Default)]
pub struct BookmarkManager {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    fn add_bookmark(&mut self, url: &str) -> bool {
        if self.contains(url) {
            return false;
        }
        self.bookmarks.push(Bookmark::new(url));
        log::debug!("Bookmarked {}", url);
        true
    }

    fn contains(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b.url == url)
    }

    fn list_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn render(&self) -> String {
        if self.bookmarks.is_empty() {
            return "<h1>No bookmarks added</h1>".to_string();
        }
        let mut html = String::from("<h1>Bookmarks</h1><ul>");
        for bookmark in &self.bookmarks {
            let url = escape_html(&bookmark.url);
            html.push_str(&format!("<li><a href=\"{}\">{}</a></li>", url, url));
        }
        html.push_str("</ul>");
        html
    }
}

/// Escapes text for use inside HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
