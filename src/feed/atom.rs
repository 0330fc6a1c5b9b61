//! Atom 1.0 serialization of a feed page

use super::FeedDocument;
use crate::utils::{escape_attr, escape_text, format_rfc3339};

/// Atom namespace
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

impl FeedDocument {
    /// Serialize as an Atom 1.0 document
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<feed xmlns="{ATOM_NS}" xml:lang="en-us">"#));
        xml.push('\n');

        push_element(&mut xml, 1, "title", &self.title);
        push_element(&mut xml, 1, "subtitle", &self.subtitle);
        push_element(&mut xml, 1, "id", &self.id);
        push_element(&mut xml, 1, "updated", &format_rfc3339(&self.updated));

        xml.push_str("  <author>\n");
        push_element(&mut xml, 2, "name", &self.author.name);
        push_element(&mut xml, 2, "uri", &self.author.uri);
        xml.push_str("  </author>\n");

        push_link(&mut xml, "self", &self.self_link);
        push_link(&mut xml, "alternate", &self.alternate_link);
        push_link(&mut xml, "first", &self.links.first);
        if let Some(previous) = &self.links.previous {
            push_link(&mut xml, "previous", previous);
        }
        if let Some(next) = &self.links.next {
            push_link(&mut xml, "next", next);
        }
        push_link(&mut xml, "last", &self.links.last);

        for entry in &self.entries {
            xml.push_str("  <entry>\n");
            push_element(&mut xml, 2, "title", &entry.title);
            xml.push_str(&format!(
                "    <link href=\"{}\" rel=\"alternate\"/>\n",
                escape_attr(&entry.link)
            ));
            push_element(&mut xml, 2, "id", &entry.id);
            push_element(&mut xml, 2, "updated", &format_rfc3339(&entry.updated));
            xml.push_str(&format!(
                "    <summary type=\"text\">{}</summary>\n",
                escape_text(&entry.summary)
            ));
            xml.push_str("  </entry>\n");
        }

        xml.push_str("</feed>\n");
        xml
    }
}

fn push_element(xml: &mut String, depth: usize, name: &str, text: &str) {
    xml.push_str(&"  ".repeat(depth));
    xml.push_str(&format!("<{name}>{}</{name}>\n", escape_text(text)));
}

fn push_link(xml: &mut String, rel: &str, href: &str) {
    xml.push_str(&format!(
        "  <link href=\"{}\" rel=\"{rel}\"/>\n",
        escape_attr(href)
    ));
}
