use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use zwi_core::filter::FilterPipeline;
use zwi_core::{CampaignItem, FilterState};
use zwi_data::loader;

#[derive(Args, Debug)]
pub struct CampaignsArgs {
    /// Free-text search over title and tagline
    #[arg(long, short)]
    query: Option<String>,

    /// Keep campaigns tagged with this topic (repeatable)
    #[arg(long)]
    topic: Vec<String>,

    /// Keep campaigns with this status, e.g. "active" (repeatable)
    #[arg(long)]
    status: Vec<String>,
}

pub fn run(fixtures: &Path, args: CampaignsArgs) -> Result<()> {
    let campaigns: Vec<CampaignItem> = loader::load_file(fixtures, loader::CAMPAIGNS_FILE)
        .context("error loading campaign fixtures")?;

    let mut state = FilterState {
        query: args.query.unwrap_or_default(),
        ..Default::default()
    };
    for topic in &args.topic {
        state.toggle("topic", topic);
    }
    for status in &args.status {
        state.toggle("status", status);
    }

    let mut pipeline = FilterPipeline::new().with_search(&state.query, |c: &CampaignItem| {
        let mut fields = vec![c.title.clone()];
        fields.extend(c.tagline.iter().cloned());
        fields
    });
    if let Some(topics) = state.selected("topic") {
        pipeline = pipeline.with_category(topics, |c: &CampaignItem| c.topics.clone());
    }
    if let Some(statuses) = state.selected("status") {
        pipeline = pipeline
            .with_category(statuses, |c: &CampaignItem| c.status.iter().cloned().collect());
    }

    let matched = pipeline.apply(&campaigns);
    if matched.is_empty() {
        println!("No results found");
        return Ok(());
    }

    println!("Showing {} of {} results", matched.len(), campaigns.len());
    println!();
    for campaign in matched {
        let status = campaign.status.as_deref().unwrap_or("-");
        println!("  {}  {} [{status}]", campaign.id, campaign.title);
        if let Some(tagline) = &campaign.tagline {
            println!("      {tagline}");
        }
        if !campaign.partners.is_empty() {
            println!("      with {}", campaign.partners.join(", "));
        }
        if let Some(cta) = &campaign.cta {
            println!("      {}: {}", cta.label, cta.url);
        }
    }

    Ok(())
}
