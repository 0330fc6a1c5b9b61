//! Pagination engine
//!
//! Splits an already-ordered slice into fixed-size pages. Requests for pages
//! that do not exist are errors, never clamped to the nearest valid page.
//!
//! ```
//! use std::num::NonZeroUsize;
//! use major_event_log::pagination::{paginate, InvalidPage};
//!
//! let items: Vec<u32> = (1..=31).collect();
//! let per_page = NonZeroUsize::new(10).unwrap();
//!
//! let page = paginate(&items, per_page, Some("4")).unwrap();
//! assert_eq!(page.items(), &[31]);
//! assert!(!page.has_next());
//!
//! assert!(matches!(
//!     paginate(&items, per_page, Some("5")),
//!     Err(InvalidPage::OutOfRange { .. })
//! ));
//! ```

use std::num::NonZeroUsize;

/// A requested page could not be served
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPage {
    /// Anything other than plain decimal digits with an optional minus sign
    /// and no leading zeros
    #[error("page {0:?} is not an integer")]
    NotAnInteger(String),

    #[error("page number {0} is less than 1")]
    LessThanOne(i64),

    #[error("page {requested} is out of range (1..={num_pages})")]
    OutOfRange { requested: usize, num_pages: usize },
}

/// Which page the caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// 1-based page number
    Number(usize),
    /// Whatever the final page turns out to be
    Last,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::Number(1)
    }
}

impl PageRequest {
    /// Parse a raw query value; an absent value means page 1.
    ///
    /// Only the canonical decimal spelling names a page, so `" 2"`, `"+2"`
    /// and `"02"` are rejected rather than aliased to page 2.
    pub fn parse(raw: Option<&str>) -> Result<Self, InvalidPage> {
        let Some(raw) = raw else {
            return Ok(PageRequest::default());
        };

        let digits = raw.strip_prefix('-').unwrap_or(raw);
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));
        if !canonical {
            return Err(InvalidPage::NotAnInteger(raw.to_string()));
        }

        let number: i64 = raw
            .parse()
            .map_err(|_| InvalidPage::NotAnInteger(raw.to_string()))?;
        if number < 1 {
            return Err(InvalidPage::LessThanOne(number));
        }
        usize::try_from(number)
            .map(PageRequest::Number)
            .map_err(|_| InvalidPage::NotAnInteger(raw.to_string()))
    }
}

/// Splits an ordered slice into pages of `per_page` items
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    per_page: NonZeroUsize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], per_page: NonZeroUsize) -> Self {
        Self { items, per_page }
    }

    /// Total number of items across all pages
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of pages; an empty collection still has one (empty) page
    pub fn num_pages(&self) -> usize {
        self.items.len().div_ceil(self.per_page.get()).max(1)
    }

    /// Resolve a request to a concrete page
    pub fn page(&self, request: PageRequest) -> Result<Page<'a, T>, InvalidPage> {
        let num_pages = self.num_pages();
        let number = match request {
            PageRequest::Last => num_pages,
            PageRequest::Number(0) => return Err(InvalidPage::LessThanOne(0)),
            PageRequest::Number(n) if n > num_pages => {
                return Err(InvalidPage::OutOfRange {
                    requested: n,
                    num_pages,
                })
            }
            PageRequest::Number(n) => n,
        };

        let per_page = self.per_page.get();
        let start = (number - 1) * per_page;
        let end = (start + per_page).min(self.items.len());

        Ok(Page {
            items: &self.items[start..end],
            number,
            num_pages,
            count: self.items.len(),
            per_page,
        })
    }
}

/// One page of a paginated collection
#[derive(Debug, Clone, Copy)]
pub struct Page<'a, T> {
    items: &'a [T],
    number: usize,
    num_pages: usize,
    count: usize,
    per_page: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// 1-based page number
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    /// Total item count of the whole collection
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    pub fn next_page_number(&self) -> Option<usize> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn previous_page_number(&self) -> Option<usize> {
        self.has_previous().then(|| self.number - 1)
    }

    /// 1-based position of the first item on this page, 0 when empty
    pub fn start_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.number - 1) * self.per_page + 1
        }
    }

    /// 1-based position of the last item on this page, 0 when empty
    pub fn end_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.start_index() + self.items.len() - 1
        }
    }
}

/// Paginate `items` and resolve a raw page parameter in one step
pub fn paginate<'a, T>(
    items: &'a [T],
    per_page: NonZeroUsize,
    requested_page: Option<&str>,
) -> Result<Page<'a, T>, InvalidPage> {
    let request = PageRequest::parse(requested_page)?;
    Paginator::new(items, per_page).page(request)
}
