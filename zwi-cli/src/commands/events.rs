use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::Args;
use zwi_core::filter::FilterPipeline;
use zwi_core::ics::event_to_ics;
use zwi_core::{EventItem, FilterState};
use zwi_data::loader;

use crate::utils::slugify;

#[derive(Args, Debug)]
pub struct EventsArgs {
    /// Free-text search over title, venue, and city
    #[arg(long, short)]
    query: Option<String>,

    /// Keep events tagged with this topic (repeatable)
    #[arg(long)]
    topic: Vec<String>,

    /// Only show upcoming events
    #[arg(long, conflicts_with = "past")]
    upcoming: bool,

    /// Only show past events
    #[arg(long)]
    past: bool,

    /// Write an iCalendar file for the event with this id
    #[arg(long, value_name = "ID")]
    ics: Option<String>,

    /// Output path for --ics (defaults to a slug of the event title)
    #[arg(long, requires = "ics")]
    out: Option<PathBuf>,
}

pub fn run(fixtures: &Path, args: EventsArgs) -> Result<()> {
    let events: Vec<EventItem> = loader::load_file(fixtures, loader::EVENTS_FILE)
        .context("error loading event fixtures")?;

    if let Some(id) = &args.ics {
        return export_ics(&events, id, args.out);
    }

    let mut state = FilterState {
        query: args.query.unwrap_or_default(),
        ..Default::default()
    };
    for topic in &args.topic {
        state.toggle("topic", topic);
    }

    let mut pipeline = FilterPipeline::new().with_search(&state.query, |e: &EventItem| {
        let mut fields = vec![e.title.clone()];
        fields.extend(e.venue.iter().cloned());
        fields.extend(e.city.iter().cloned());
        fields
    });
    if let Some(topics) = state.selected("topic") {
        pipeline = pipeline.with_category(topics, |e: &EventItem| e.topics.clone());
    }

    let matched = pipeline.apply(&events);
    if matched.is_empty() {
        println!("No results found");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let mut upcoming: Vec<&EventItem> = matched
        .iter()
        .copied()
        .filter(|e| e.is_upcoming(today))
        .collect();
    let mut past: Vec<&EventItem> = matched
        .iter()
        .copied()
        .filter(|e| !e.is_upcoming(today))
        .collect();
    upcoming.sort_by_key(|e| e.start);
    past.sort_by_key(|e| std::cmp::Reverse(e.start));

    if !args.past {
        print_section("Upcoming", &upcoming);
    }
    if !args.upcoming {
        if !args.past && !upcoming.is_empty() && !past.is_empty() {
            println!();
        }
        print_section("Past", &past);
    }

    Ok(())
}

fn print_section(heading: &str, events: &[&EventItem]) {
    if events.is_empty() {
        return;
    }
    println!("{heading}");
    for event in events {
        let star = if event.featured { " *" } else { "" };
        println!("  {}  {}  {}{star}", event.id, format_dates(event), event.title);
        let place: Vec<&str> = [event.venue.as_deref(), event.city.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !place.is_empty() {
            println!("      {}", place.join(", "));
        }
        if let Some(rsvp) = &event.rsvp {
            println!("      RSVP: {rsvp}");
        }
    }
}

fn format_dates(event: &EventItem) -> String {
    let end = event.end_date();
    if end == event.start {
        format_date(event.start)
    } else {
        format!("{} - {}", format_date(event.start), format_date(end))
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

fn export_ics(events: &[EventItem], id: &str, out: Option<PathBuf>) -> Result<()> {
    let Some(event) = events.iter().find(|e| e.id == id) else {
        bail!("no event with id {id:?}");
    };
    let path = out.unwrap_or_else(|| PathBuf::from(format!("{}.ics", slugify(&event.title))));
    std::fs::write(&path, event_to_ics(event))
        .with_context(|| format!("failed to write calendar file: {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
