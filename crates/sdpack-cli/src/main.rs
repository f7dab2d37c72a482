//! sdpack CLI - Stream Deck icon pack generator
//!
//! Usage:
//! - `sdpack` - List the valid packs under `./iconpacks`
//! - `sdpack --iconpack <NAME>` - Generate `./packs/<id>.sdIconPack`

use clap::Parser;
use sdpack_logging::{TracingSink, init_logging};

mod generate;
mod list;
mod options;

use options::Options;

#[derive(Parser)]
#[command(name = "sdpack")]
#[command(author, version, about = "Generates Stream Deck icon packs", long_about = None)]
struct Cli {
    /// The iconpack to generate (lists available packs when omitted)
    #[arg(short, long)]
    iconpack: Option<String>,

    #[command(flatten)]
    options: Options,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = cli.options.resolve()?;
    init_logging(config.level()?);
    let sink = TracingSink::new();

    match cli.iconpack {
        Some(name) => generate::run(&config, &sink, &name),
        None => list::run(&config, &sink),
    }

    Ok(())
}
