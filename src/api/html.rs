//! HTML pages
//!
//! Pages are assembled as strings around one shared layout. Every value that
//! comes from an event passes through `escape_text` / `escape_attr`.

use crate::config::INDEX_PAGE_PARAM;
use crate::pagination::Page;
use crate::types::Event;
use crate::utils::{escape_attr, escape_text, format_display};

const SITE_TITLE: &str = "Major Event Log";

const STYLE: &str = "body{font-family:sans-serif;max-width:60em;margin:0 auto;padding:1em}\
nav a{margin-right:1em}\
table{border-collapse:collapse;width:100%}\
th,td{text-align:left;padding:.4em;border-bottom:1px solid #ddd}\
.success{color:#2e7d32}.failure{color:#c62828}\
dt{font-weight:bold;margin-top:.6em}";

fn layout(title: &str, body: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "  <title>{} | {SITE_TITLE}</title>\n",
        escape_text(title)
    ));
    html.push_str("  <link rel=\"alternate\" type=\"application/atom+xml\" href=\"/feed/\" title=\"Major event feed\">\n");
    html.push_str(&format!("  <style>{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str("<nav><a href=\"/\">Events</a><a href=\"/feed/\">Atom feed</a><a href=\"/about/\">About</a></nav>\n");
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

fn outcome_span(event: &Event) -> String {
    let class = if event.is_success() { "success" } else { "failure" };
    format!(
        "<span class=\"{class}\" title=\"{}\">{}</span>",
        escape_attr(event.outcome.uri()),
        event.outcome.label()
    )
}

/// Paginated list of events, newest first
pub fn index_page(page: &Page<'_, Event>) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{SITE_TITLE}</h1>\n"));

    if page.items().is_empty() {
        body.push_str("<p>No events have been recorded.</p>\n");
        return layout(SITE_TITLE, &body);
    }

    body.push_str("<table>\n<thead><tr><th>Date</th><th>Event</th><th>Outcome</th></tr></thead>\n<tbody>\n");
    for event in page.items() {
        body.push_str(&format!(
            "<tr><td>{}</td><td><a href=\"{}\">{}</a></td><td>{}</td></tr>\n",
            format_display(&event.date),
            escape_attr(&event.absolute_path()),
            escape_text(&event.title),
            outcome_span(event)
        ));
    }
    body.push_str("</tbody>\n</table>\n");

    body.push_str(&format!(
        "<p>Showing {}&ndash;{} of {} events.</p>\n",
        page.start_index(),
        page.end_index(),
        page.count()
    ));

    if page.has_other_pages() {
        body.push_str("<nav class=\"pagination\">");
        if let Some(previous) = page.previous_page_number() {
            body.push_str(&format!(
                "<a href=\"/?{INDEX_PAGE_PARAM}={previous}\" rel=\"prev\">&laquo; Newer</a> "
            ));
        }
        body.push_str(&format!(
            "<span>Page {} of {}</span>",
            page.number(),
            page.num_pages()
        ));
        if let Some(next) = page.next_page_number() {
            body.push_str(&format!(
                " <a href=\"/?{INDEX_PAGE_PARAM}={next}\" rel=\"next\">Older &raquo;</a>"
            ));
        }
        body.push_str("</nav>\n");
    }

    layout(SITE_TITLE, &body)
}

/// Every field of one event, with links to its XML exports
pub fn event_details_page(event: &Event) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n<dl>\n", escape_text(&event.title)));

    let rows = [
        ("Identifier", escape_text(&event.id.to_string())),
        ("Date", format_display(&event.date)),
        ("Detail", escape_text(&event.detail)),
        ("Outcome", outcome_span(event)),
        ("Outcome detail", escape_text(&event.outcome_detail)),
        ("Reporting agent", escape_text(&event.contact_name)),
        (
            "Contact email",
            format!(
                "<a href=\"mailto:{}\">{}</a>",
                escape_attr(&event.contact_email),
                escape_text(&event.contact_email)
            ),
        ),
        ("Entry created", format_display(&event.entry_created)),
        ("Entry modified", format_display(&event.entry_modified)),
    ];
    for (label, value) in rows {
        body.push_str(&format!("  <dt>{label}</dt><dd>{value}</dd>\n"));
    }
    body.push_str("</dl>\n");

    body.push_str(&format!(
        "<p><a href=\"{}\">Atom XML</a> | <a href=\"{}\">PREMIS XML</a></p>\n",
        escape_attr(&event.atom_path()),
        escape_attr(&event.premis_path())
    ));

    layout(&event.title, &body)
}

pub fn about_page() -> String {
    let body = "<h1>About</h1>\n\
<p>The Major Event Log records significant preservation events that affect \
the digital archive as a whole: storage migrations, fixity audits, system \
outages and similar occurrences.</p>\n\
<p>Each event is published as an HTML page, as an Atom entry and as a PREMIS \
event record. The <a href=\"/feed/\">Atom feed</a> lists events newest first, \
ten to a page.</p>\n";
    layout("About", body)
}

pub fn not_found_page() -> String {
    layout(
        "Not found",
        "<h1>Not found</h1>\n<p>The requested page does not exist.</p>\n",
    )
}

pub fn server_error_page() -> String {
    layout(
        "Server error",
        "<h1>Server error</h1>\n<p>The request could not be completed.</p>\n",
    )
}
