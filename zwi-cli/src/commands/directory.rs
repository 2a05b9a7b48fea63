use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use zwi_core::filter::{Bounds, FilterPipeline, LngLat};
use zwi_core::{DirectoryEntry, FilterState};
use zwi_data::loader;

use crate::utils::truncate;

#[derive(Args, Debug)]
pub struct DirectoryArgs {
    /// Free-text search over name, type, and topics
    #[arg(long, short)]
    query: Option<String>,

    /// Keep entries tagged with this topic (repeatable)
    #[arg(long)]
    topic: Vec<String>,

    /// Keep entries of this type, e.g. "waste bank" (repeatable)
    #[arg(long)]
    entry_type: Vec<String>,

    /// Keep entries in this country (repeatable)
    #[arg(long)]
    country: Vec<String>,

    /// Only show verified entries
    #[arg(long)]
    verified: bool,

    /// Map viewport as west,south,east,north
    #[arg(long, value_parser = parse_bounds)]
    bounds: Option<Bounds>,
}

fn parse_bounds(raw: &str) -> Result<Bounds, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err("expected four comma-separated numbers: west,south,east,north".to_string());
    }
    let mut edges = [0.0f64; 4];
    for (slot, part) in edges.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("not a number: {part}"))?;
    }
    Ok(Bounds::new(edges[0], edges[1], edges[2], edges[3]))
}

pub fn run(fixtures: &Path, args: DirectoryArgs) -> Result<()> {
    let entries: Vec<DirectoryEntry> = loader::load_file(fixtures, loader::DIRECTORY_FILE)
        .context("error loading directory fixtures")?;

    let mut state = FilterState {
        query: args.query.unwrap_or_default(),
        bounds: args.bounds,
        ..Default::default()
    };
    for topic in &args.topic {
        state.toggle("topic", topic);
    }
    for entry_type in &args.entry_type {
        state.toggle("entry_type", entry_type);
    }
    for country in &args.country {
        state.toggle("country", country);
    }
    if args.verified {
        state.toggle("verified", "true");
    }

    let matched = filter_entries(&entries, &state);

    if matched.is_empty() {
        println!("No results found");
        return Ok(());
    }

    println!("Showing {} of {} results", matched.len(), entries.len());
    println!();
    for entry in matched {
        let place = match (&entry.city, &entry.country) {
            (Some(city), Some(country)) => format!("{city}, {country}"),
            (Some(city), None) => city.clone(),
            (None, Some(country)) => country.clone(),
            (None, None) => "-".to_string(),
        };
        let badge = if entry.verified { " [verified]" } else { "" };
        println!("  {}  {} ({}){badge}", entry.id, entry.name, entry.entry_type);
        println!("      {place}");
        if !entry.topics.is_empty() {
            println!("      topics: {}", entry.topics.join(", "));
        }
        if let Some(description) = &entry.description {
            println!("      {}", truncate(description, 90));
        }
    }

    Ok(())
}

/// Applies the directory filter state as one pipeline; the verified flag is
/// a stage like every other predicate.
fn filter_entries<'a>(entries: &'a [DirectoryEntry], state: &FilterState) -> Vec<&'a DirectoryEntry> {
    let mut pipeline = FilterPipeline::new().with_search(&state.query, |e: &DirectoryEntry| {
        let mut fields = vec![e.name.clone(), e.entry_type.clone()];
        fields.extend(e.topics.iter().cloned());
        fields
    });
    if let Some(topics) = state.selected("topic") {
        pipeline = pipeline.with_category(topics, |e: &DirectoryEntry| e.topics.clone());
    }
    if let Some(types) = state.selected("entry_type") {
        pipeline = pipeline.with_category(types, |e: &DirectoryEntry| vec![e.entry_type.clone()]);
    }
    if let Some(countries) = state.selected("country") {
        pipeline = pipeline
            .with_category(countries, |e: &DirectoryEntry| e.country.iter().cloned().collect());
    }
    if let Some(verified) = state.selected("verified") {
        pipeline =
            pipeline.with_category(verified, |e: &DirectoryEntry| vec![e.verified.to_string()]);
    }
    if let Some(bounds) = state.bounds {
        pipeline = pipeline.with_bounds(bounds, |e: &DirectoryEntry| e.coords.map(LngLat::from));
    }

    pipeline.apply(entries)
}
