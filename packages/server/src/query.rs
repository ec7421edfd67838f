//! Scope filtering, substring search and pagination over a loaded collection.
//!
//! Records keep their stored order through every stage; nothing is sorted.

use common::{Article, Channel, Video, Workspace};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_SIZE: usize = 10;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    /// Returns `None` if `page` or `size` is below 1.
    pub fn new(page: usize, size: usize) -> Option<Self> {
        (page >= 1 && size >= 1).then_some(Self { page, size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Half-open `[start, end)` range of this page.
    pub fn bounds(&self) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.size);
        (start, start.saturating_add(self.size))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
        }
    }
}

/// One page of results plus the number of records that matched before paging.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Records that belong to a parent collection.
pub trait Scoped {
    fn parent_id(&self) -> Option<&str>;
}

/// Records with a fixed set of text fields that search runs against.
pub trait Searchable {
    fn search_fields(&self) -> impl Iterator<Item = &str>;

    /// Case-insensitive substring match against any search field.
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.search_fields()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Parameters of a list request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListQuery<'a> {
    /// Parent id to scope by; `None` lists the whole collection.
    pub scope: Option<&'a str>,
    /// Search term; `None` or empty skips searching.
    pub search: Option<&'a str>,
    pub page: PageRequest,
}

/// Keep records whose parent id equals `parent_id`.
pub fn scope<T: Scoped>(records: Vec<T>, parent_id: &str) -> Vec<T> {
    records
        .into_iter()
        .filter(|r| r.parent_id() == Some(parent_id))
        .collect()
}

/// Keep records matching `term`. An empty term keeps everything.
pub fn search<T: Searchable>(records: Vec<T>, term: &str) -> Vec<T> {
    if term.is_empty() {
        return records;
    }
    records.into_iter().filter(|r| r.matches(term)).collect()
}

/// Slice out one page; pages past the end are empty.
pub fn paginate<T>(records: Vec<T>, page: PageRequest) -> Page<T> {
    let total = records.len();
    let (start, end) = page.bounds();
    let items = records
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect();
    Page { items, total }
}

/// Scope, then search, then paginate.
pub fn run<T: Scoped + Searchable>(records: Vec<T>, query: &ListQuery<'_>) -> Page<T> {
    let mut records = records;
    if let Some(parent_id) = query.scope {
        records = scope(records, parent_id);
    }
    if let Some(term) = query.search {
        records = search(records, term);
    }
    paginate(records, query.page)
}

impl Scoped for Workspace {
    fn parent_id(&self) -> Option<&str> {
        None
    }
}

impl Scoped for Channel {
    fn parent_id(&self) -> Option<&str> {
        Some(&self.workspace_id)
    }
}

impl Scoped for Article {
    fn parent_id(&self) -> Option<&str> {
        Some(&self.channel_id)
    }
}

impl Scoped for Video {
    fn parent_id(&self) -> Option<&str> {
        Some(&self.channel_id)
    }
}

impl Searchable for Workspace {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
    }
}

impl Searchable for Channel {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.category.as_str())
    }
}

impl Searchable for Article {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        [self.original_url.as_str(), self.content.as_str()].into_iter()
    }
}

impl Searchable for Video {
    fn search_fields(&self) -> impl Iterator<Item = &str> {
        self.result_video_url
            .as_deref()
            .into_iter()
            .chain(self.audio_file.as_deref())
            .chain(self.video_segments.iter().map(String::as_str))
    }
}
