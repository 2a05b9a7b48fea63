//! iCalendar export for events ("Add to calendar").
//!
//! Events carry calendar dates, not times, so the generated VEVENT is
//! all-day: DTSTART is the start date and DTEND is the day after the last
//! day, per the exclusive-end convention of RFC 5545.

use chrono::{DateTime, Days, Utc};

use crate::models::EventItem;

const PRODID: &str = "-//Zero Waste Indonesia//EN";
const UID_DOMAIN: &str = "zerowasteindonesia.id";

/// Escapes text for an iCalendar property value.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

fn render(event: &EventItem, stamp: DateTime<Utc>) -> String {
    // DTEND is exclusive: the day after the last event day.
    let end_exclusive = event
        .end_date()
        .checked_add_days(Days::new(1))
        .unwrap_or(event.end_date());

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}@{UID_DOMAIN}", event.id),
        format!("DTSTAMP:{}", stamp.format("%Y%m%dT%H%M%SZ")),
        format!("DTSTART;VALUE=DATE:{}", event.start.format("%Y%m%d")),
        format!("DTEND;VALUE=DATE:{}", end_exclusive.format("%Y%m%d")),
        format!("SUMMARY:{}", escape_text(&event.title)),
    ];

    if let Some(description) = &event.description {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }

    match (&event.venue, &event.city) {
        (Some(venue), Some(city)) => {
            lines.push(format!("LOCATION:{}", escape_text(&format!("{venue}, {city}"))));
        }
        (Some(venue), None) => lines.push(format!("LOCATION:{}", escape_text(venue))),
        (None, Some(city)) => lines.push(format!("LOCATION:{}", escape_text(city))),
        (None, None) => {}
    }

    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    lines.join("\r\n")
}

/// Renders one event as a standalone VCALENDAR document with CRLF line
/// endings, ready to be written to a `.ics` file.
pub fn event_to_ics(event: &EventItem) -> String {
    render(event, Utc::now())
}
