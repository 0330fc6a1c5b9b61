//! Paginated Atom feed
//!
//! [`build_feed`] turns a snapshot of events into one page of an Atom feed,
//! newest first, with `first`/`last` links always present and
//! `previous`/`next` links only where a neighbouring page exists.

mod atom;

pub use atom::ATOM_NS;

use chrono::{DateTime, Utc};

use crate::config::FeedConfig;
use crate::pagination::{paginate, InvalidPage};
use crate::types::Event;

/// Declared content type of the feed document
pub const FEED_CONTENT_TYPE: &str = "application/xml";

/// One assembled feed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    pub title: String,
    pub subtitle: String,
    /// Stable feed identifier (the feed base URL)
    pub id: String,
    pub updated: DateTime<Utc>,
    pub author: FeedAuthor,
    pub self_link: String,
    pub alternate_link: String,
    pub links: PageLinks,
    pub page: usize,
    pub num_pages: usize,
    pub entries: Vec<FeedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedAuthor {
    pub name: String,
    pub uri: String,
}

/// Navigation between feed pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    pub first: String,
    pub last: String,
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// One event as a feed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub id: String,
    pub summary: String,
    pub link: String,
    pub updated: DateTime<Utc>,
}

impl FeedEntry {
    fn from_event(event: &Event, config: &FeedConfig) -> Self {
        Self {
            title: event.title.clone(),
            id: event.urn(),
            summary: event.detail.clone(),
            link: config.absolute_url(&event.absolute_path()),
            updated: event.entry_modified,
        }
    }
}

/// Assemble the requested page of the feed.
///
/// `events` may arrive in any order; entries are emitted newest `date`
/// first. A missing page parameter means page 1; anything that does not
/// name an existing page is an [`InvalidPage`].
pub fn build_feed(
    events: &[Event],
    requested_page: Option<&str>,
    config: &FeedConfig,
) -> Result<FeedDocument, InvalidPage> {
    let mut ordered: Vec<&Event> = events.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    let page = paginate(&ordered, config.page_size, requested_page)?;

    let links = PageLinks {
        first: config.page_url(1),
        last: config.page_url(page.num_pages()),
        previous: page.previous_page_number().map(|n| config.page_url(n)),
        next: page.next_page_number().map(|n| config.page_url(n)),
    };

    let updated = events
        .iter()
        .map(|event| event.entry_modified)
        .max()
        .unwrap_or_default();

    Ok(FeedDocument {
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
        id: config.feed_url(),
        updated,
        author: FeedAuthor {
            name: config.author_name.clone(),
            uri: config.author_uri.clone(),
        },
        self_link: config.feed_url(),
        alternate_link: config.absolute_url(&config.html_path),
        links,
        page: page.number(),
        num_pages: page.num_pages(),
        entries: page
            .items()
            .iter()
            .map(|event| FeedEntry::from_event(event, config))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn events(count: i64) -> Vec<Event> {
        let base = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        (0..count)
            .map(|i| Event {
                id: Uuid::new_v4(),
                title: format!("event {i}"),
                detail: format!("detail {i}"),
                outcome: Outcome::Success,
                outcome_detail: "none".to_string(),
                date: base + Duration::days(i),
                entry_created: base,
                entry_modified: base + Duration::hours(i),
                contact_name: "John Doe".to_string(),
                contact_email: "admin@email.com".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_middle_page_links() {
        let config = FeedConfig::default();
        let feed = build_feed(&events(31), Some("2"), &config).unwrap();

        assert_eq!(feed.links.first, config.page_url(1));
        assert_eq!(feed.links.previous, Some(config.page_url(1)));
        assert_eq!(feed.links.next, Some(config.page_url(3)));
        assert_eq!(feed.links.last, config.page_url(4));
        assert_eq!(feed.entries.len(), 10);
        assert_eq!(feed.page, 2);
        assert_eq!(feed.num_pages, 4);
    }

    #[test]
    fn test_first_and_last_pages() {
        let config = FeedConfig::default();
        let snapshot = events(31);

        let first = build_feed(&snapshot, Some("1"), &config).unwrap();
        assert_eq!(first.links.previous, None);
        assert_eq!(first.links.next, Some(config.page_url(2)));

        let last = build_feed(&snapshot, Some("4"), &config).unwrap();
        assert_eq!(last.links.next, None);
        assert_eq!(last.links.previous, Some(config.page_url(3)));
        assert_eq!(last.entries.len(), 1);
        assert_eq!(last.entries[0].title, "event 0");
    }

    #[test]
    fn test_entries_newest_first_regardless_of_input_order() {
        let mut snapshot = events(12);
        snapshot.reverse();
        snapshot.swap(3, 7);

        let feed = build_feed(&snapshot, None, &FeedConfig::default()).unwrap();
        let titles: Vec<&str> = feed.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "event 11", "event 10", "event 9", "event 8", "event 7", "event 6", "event 5",
                "event 4", "event 3", "event 2"
            ]
        );
    }

    #[test]
    fn test_entry_fields() {
        let config = FeedConfig::default();
        let snapshot = events(1);
        let feed = build_feed(&snapshot, None, &config).unwrap();
        let entry = &feed.entries[0];
        let event = &snapshot[0];

        assert_eq!(entry.id, format!("urn:uuid:{}", event.id));
        assert_eq!(entry.summary, event.detail);
        assert_eq!(entry.link, format!("http://localhost:8000/event/{}/", event.id));
        assert_eq!(entry.updated, event.entry_modified);
    }

    #[test]
    fn test_invalid_pages() {
        let config = FeedConfig::default();
        let snapshot = events(31);
        for raw in ["0", "-1", "5", "five", "last"] {
            assert!(build_feed(&snapshot, Some(raw), &config).is_err(), "page {raw}");
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let config = FeedConfig::default();
        let feed = build_feed(&[], None, &config).unwrap();

        assert!(feed.entries.is_empty());
        assert_eq!(feed.links.first, feed.links.last);
        assert_eq!(feed.links.previous, None);
        assert_eq!(feed.links.next, None);
        assert_eq!(feed.updated, DateTime::<Utc>::default());

        assert!(build_feed(&[], Some("2"), &config).is_err());
    }

    #[test]
    fn test_updated_is_latest_modification() {
        let snapshot = events(31);
        let feed = build_feed(&snapshot, Some("4"), &FeedConfig::default()).unwrap();
        assert_eq!(feed.updated, snapshot[30].entry_modified);
    }
}
