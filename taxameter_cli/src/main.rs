use clap::{Parser, Subcommand};

use crate::generate::GenerateSubcommands;
use crate::quote::QuoteArgs;
use crate::tariffs::TariffsArgs;

mod catalog;
mod generate;
mod parsers;
mod quote;
mod tariffs;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a trip for a company and car class
    #[command(visible_alias = "q")]
    Quote {
        #[command(flatten)]
        args: QuoteArgs,
    },
    /// List the tariff rules of every company
    Tariffs {
        #[command(flatten)]
        args: TariffsArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Quote { args } => quote::run(args).await?,
        Commands::Tariffs { args } => tariffs::run(args)?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}
