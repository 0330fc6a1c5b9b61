//! Single-event Atom entry document

use crate::feed::ATOM_NS;
use crate::types::Event;
use crate::utils::{escape_attr, escape_text, format_rfc3339};

/// Render one event as a standalone Atom `entry`.
///
/// `self_url` is the absolute URL of the event's detail page.
pub fn render_atom_item(event: &Event, self_url: &str) -> String {
    let mut xml = String::new();

    xml.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<entry xmlns="{ATOM_NS}" xml:lang="en-us">"#));
    xml.push('\n');

    xml.push_str(&format!("  <title>{}</title>\n", escape_text(&event.title)));
    xml.push_str(&format!("  <link href=\"{}\"/>\n", escape_attr(self_url)));
    xml.push_str(&format!("  <id>{}</id>\n", event.urn()));
    xml.push_str(&format!(
        "  <updated>{}</updated>\n",
        format_rfc3339(&event.entry_modified)
    ));
    xml.push_str(&format!(
        "  <published>{}</published>\n",
        format_rfc3339(&event.entry_created)
    ));
    xml.push_str("  <author>\n");
    xml.push_str(&format!(
        "    <name>{}</name>\n",
        escape_text(&event.contact_name)
    ));
    xml.push_str("  </author>\n");
    xml.push_str(&format!(
        "  <category term=\"{}\" label=\"{}\"/>\n",
        escape_attr(event.outcome.uri()),
        event.outcome.label()
    ));
    xml.push_str(&format!(
        "  <content type=\"text\">{}</content>\n",
        escape_text(&event.detail)
    ));

    xml.push_str("</entry>\n");
    xml
}
