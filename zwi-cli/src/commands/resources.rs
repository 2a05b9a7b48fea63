use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use zwi_core::filter::FilterPipeline;
use zwi_core::{FilterState, ResourceItem};
use zwi_data::loader;

use crate::utils::truncate;

#[derive(Args, Debug)]
pub struct ResourcesArgs {
    /// Free-text search over title, summary, and organization
    #[arg(long, short)]
    query: Option<String>,

    /// Keep resources tagged with this topic (repeatable)
    #[arg(long)]
    topic: Vec<String>,

    /// Keep resources published in this year (repeatable)
    #[arg(long)]
    year: Vec<i32>,

    /// Keep resources of this format, e.g. "report" (repeatable)
    #[arg(long)]
    format: Vec<String>,

    /// Keep resources with this access type, e.g. "free" (repeatable)
    #[arg(long)]
    access: Vec<String>,
}

pub fn run(fixtures: &Path, args: ResourcesArgs) -> Result<()> {
    let resources: Vec<ResourceItem> = loader::load_file(fixtures, loader::RESOURCES_FILE)
        .context("error loading resource fixtures")?;

    let mut state = FilterState {
        query: args.query.unwrap_or_default(),
        ..Default::default()
    };
    for topic in &args.topic {
        state.toggle("topic", topic);
    }
    for year in &args.year {
        state.toggle("year", &year.to_string());
    }
    for format in &args.format {
        state.toggle("format", format);
    }
    for access in &args.access {
        state.toggle("access_type", access);
    }

    let mut pipeline = FilterPipeline::new().with_search(&state.query, |r: &ResourceItem| {
        let mut fields = vec![r.title.clone()];
        fields.extend(r.summary.iter().cloned());
        fields.extend(r.org.iter().cloned());
        fields
    });
    if let Some(topics) = state.selected("topic") {
        pipeline = pipeline.with_category(topics, |r: &ResourceItem| r.topics.clone());
    }
    if let Some(years) = state.selected("year") {
        pipeline = pipeline
            .with_category(years, |r: &ResourceItem| {
                r.year.iter().map(i32::to_string).collect()
            });
    }
    if let Some(formats) = state.selected("format") {
        pipeline =
            pipeline.with_category(formats, |r: &ResourceItem| r.format.iter().cloned().collect());
    }
    if let Some(access) = state.selected("access_type") {
        pipeline = pipeline
            .with_category(access, |r: &ResourceItem| r.access_type.iter().cloned().collect());
    }

    let matched = pipeline.apply(&resources);
    if matched.is_empty() {
        println!("No results found");
        return Ok(());
    }

    println!("Showing {} of {} results", matched.len(), resources.len());
    println!();
    for resource in matched {
        let year = resource.year.map_or("-".to_string(), |y| y.to_string());
        let format = resource.format.as_deref().unwrap_or("-");
        println!("  {}  {} ({format}, {year})", resource.id, resource.title);
        if let Some(org) = &resource.org {
            println!("      by {org}");
        }
        if let Some(summary) = &resource.summary {
            println!("      {}", truncate(summary, 90));
        }
        if let Some(url) = &resource.url {
            println!("      {url}");
        }
    }

    Ok(())
}
