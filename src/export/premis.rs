//! PREMIS 2 event record

use crate::types::Event;
use crate::utils::{escape_text, format_rfc3339};

/// PREMIS version 2 namespace
pub const PREMIS_NS: &str = "info:lc/xmlns/premis-v2";

/// `eventType` term for every record in this log
pub const PREMIS_EVENT_TYPE: &str = "majorEvent";

const EVENT_IDENTIFIER_TYPE: &str = "UUID";
const AGENT_IDENTIFIER_TYPE: &str = "name";
const AGENT_ROLE: &str = "reportingAgent";

/// Render one event as a PREMIS `event` document.
///
/// The contact name is published as the reporting agent.
pub fn render_premis_item(event: &Event) -> String {
    let mut xml = String::new();

    xml.push_str(r#"<?xml version="1.0" encoding="utf-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<premis:event xmlns:premis="{PREMIS_NS}" version="2.0">"#
    ));
    xml.push('\n');

    xml.push_str("  <premis:eventIdentifier>\n");
    xml.push_str(&format!(
        "    <premis:eventIdentifierType>{EVENT_IDENTIFIER_TYPE}</premis:eventIdentifierType>\n"
    ));
    xml.push_str(&format!(
        "    <premis:eventIdentifierValue>{}</premis:eventIdentifierValue>\n",
        event.id
    ));
    xml.push_str("  </premis:eventIdentifier>\n");

    xml.push_str(&format!(
        "  <premis:eventType>{PREMIS_EVENT_TYPE}</premis:eventType>\n"
    ));
    xml.push_str(&format!(
        "  <premis:eventDateTime>{}</premis:eventDateTime>\n",
        format_rfc3339(&event.date)
    ));
    xml.push_str(&format!(
        "  <premis:eventDetail>{}</premis:eventDetail>\n",
        escape_text(&event.detail)
    ));

    xml.push_str("  <premis:eventOutcomeInformation>\n");
    xml.push_str(&format!(
        "    <premis:eventOutcome>{}</premis:eventOutcome>\n",
        event.outcome.label()
    ));
    xml.push_str("    <premis:eventOutcomeDetail>\n");
    xml.push_str(&format!(
        "      <premis:eventOutcomeDetailNote>{}</premis:eventOutcomeDetailNote>\n",
        escape_text(&event.outcome_detail)
    ));
    xml.push_str("    </premis:eventOutcomeDetail>\n");
    xml.push_str("  </premis:eventOutcomeInformation>\n");

    xml.push_str("  <premis:linkingAgentIdentifier>\n");
    xml.push_str(&format!(
        "    <premis:linkingAgentIdentifierType>{AGENT_IDENTIFIER_TYPE}</premis:linkingAgentIdentifierType>\n"
    ));
    xml.push_str(&format!(
        "    <premis:linkingAgentIdentifierValue>{}</premis:linkingAgentIdentifierValue>\n",
        escape_text(&event.contact_name)
    ));
    xml.push_str(&format!(
        "    <premis:linkingAgentRole>{AGENT_ROLE}</premis:linkingAgentRole>\n"
    ));
    xml.push_str("  </premis:linkingAgentIdentifier>\n");

    xml.push_str("</premis:event>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn event(outcome: Outcome) -> Event {
        let entered = Utc.with_ymd_and_hms(2018, 9, 11, 16, 13, 0).unwrap();
        Event {
            id: Uuid::parse_str("d7768443-04e2-45d2-b71f-2b716bf13f13").unwrap(),
            title: "Fixity audit".to_string(),
            detail: "Quarterly fixity audit".to_string(),
            outcome,
            outcome_detail: "3 files < expected size".to_string(),
            date: Utc.with_ymd_and_hms(2018, 9, 1, 12, 0, 0).unwrap(),
            entry_created: entered,
            entry_modified: entered,
            contact_name: "O'Brien & Sons".to_string(),
            contact_email: "admin@email.com".to_string(),
        }
    }

    #[test]
    fn test_outcome_labels() {
        let failure = render_premis_item(&event(Outcome::Failure));
        assert!(failure.contains("<premis:eventOutcome>Failure</premis:eventOutcome>"));

        let success = render_premis_item(&event(Outcome::Success));
        assert!(success.contains("<premis:eventOutcome>Success</premis:eventOutcome>"));
    }

    #[test]
    fn test_premis_fields() {
        let xml = render_premis_item(&event(Outcome::Success));

        assert!(xml.contains(r#"<premis:event xmlns:premis="info:lc/xmlns/premis-v2" version="2.0">"#));
        assert!(xml.contains("<premis:eventIdentifierType>UUID</premis:eventIdentifierType>"));
        assert!(xml.contains(
            "<premis:eventIdentifierValue>d7768443-04e2-45d2-b71f-2b716bf13f13</premis:eventIdentifierValue>"
        ));
        assert!(xml.contains("<premis:eventType>majorEvent</premis:eventType>"));
        assert!(xml.contains("<premis:eventDateTime>2018-09-01T12:00:00Z</premis:eventDateTime>"));
        assert!(xml.contains("<premis:eventDetail>Quarterly fixity audit</premis:eventDetail>"));
        assert!(xml.contains(
            "<premis:eventOutcomeDetailNote>3 files &lt; expected size</premis:eventOutcomeDetailNote>"
        ));
        assert!(xml.contains(
            "<premis:linkingAgentIdentifierValue>O'Brien &amp; Sons</premis:linkingAgentIdentifierValue>"
        ));
        assert!(xml.contains("<premis:linkingAgentRole>reportingAgent</premis:linkingAgentRole>"));
    }
}
