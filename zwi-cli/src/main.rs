use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use zwi_cli::commands::{calc, campaigns, directory, events, resources};

/// Zero Waste Indonesia toolkit: waste impact calculator and browsers for
/// the directory, resource library, campaigns and events.
#[derive(Parser, Debug)]
#[command(name = "zwi")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing the JSON fixtures
    #[arg(long, default_value = "fixtures", global = true)]
    fixtures: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the impact of a waste diversion scenario
    Calc(calc::CalcArgs),
    /// Search and filter the organization directory
    Directory(directory::DirectoryArgs),
    /// Browse the resource library
    Resources(resources::ResourcesArgs),
    /// List advocacy campaigns
    Campaigns(campaigns::CampaignsArgs),
    /// List community events and export calendar entries
    Events(events::EventsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    zwi_cli::logging::init(cli.verbose);

    match cli.command {
        Command::Calc(args) => calc::run(&cli.fixtures, args),
        Command::Directory(args) => directory::run(&cli.fixtures, args),
        Command::Resources(args) => resources::run(&cli.fixtures, args),
        Command::Campaigns(args) => campaigns::run(&cli.fixtures, args),
        Command::Events(args) => events::run(&cli.fixtures, args),
    }
}
