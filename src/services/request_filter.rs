//! Request Filter for Stark Browser.
//!
//! Blocks outgoing requests whose URL contains any entry of a static domain
//! blocklist. Matching is plain, case-sensitive substring containment over
//! the whole URL, path and query included.

/// Trait defining the request filter interface.
pub trait RequestFilterTrait {
    fn should_block(&self, request_url: &str) -> bool;
    fn blocklist(&self) -> &DomainBlocklist;
}

/// Ordered list of blocked substrings, fixed at construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomainBlocklist {
    entries: Vec<String>,
}

impl DomainBlocklist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry contained in `url`, if any.
    pub fn first_match(&self, url: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| url.contains(entry.as_str()))
            .map(String::as_str)
    }
}

/// Process-wide request filter. Read-only once built; share it behind `Arc`.
#[derive(Debug, Clone)]
pub struct RequestFilter {
    blocklist: DomainBlocklist,
}

impl RequestFilter {
    pub fn new(blocklist: DomainBlocklist) -> Self {
        Self { blocklist }
    }
}

impl RequestFilterTrait for RequestFilter {
    fn should_block(&self, request_url: &str) -> bool {
        match self.blocklist.first_match(request_url) {
            Some(entry) => {
                log::info!(target: "request_filter", "Blocked: {} (matched {})", request_url, entry);
                true
            }
            None => false,
        }
    }

    fn blocklist(&self) -> &DomainBlocklist {
        &self.blocklist
    }
}
