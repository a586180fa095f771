use clap::Parser;
use menugrid::{ExtractorBuilder, MenuGridError};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menugrid")]
#[command(about = "Extract breakfast and dinner menus from a menu-plan workbook into a JSON feed")]
#[command(version)]
struct Cli {
    /// Source workbook (.xlsx)
    input: PathBuf,

    /// Destination JSON file (overwritten on every run)
    output: PathBuf,

    /// Exact name of the dinner sheet
    #[arg(long, default_value = "AKŞAM MENÜ")]
    dinner_sheet: String,

    /// Exact name of the breakfast sheet
    #[arg(long, default_value = "KAHVALTI")]
    breakfast_sheet: String,

    /// Log skipped anchors and filtered rows
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), MenuGridError> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "menugrid=debug" } else { "menugrid=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let extractor = ExtractorBuilder::new()
        .with_dinner_sheet_name(&cli.dinner_sheet)
        .with_breakfast_sheet_name(&cli.breakfast_sheet)
        .build()?;

    let registry = extractor.extract_path(&cli.input)?;

    let mut output = File::create(&cli.output)?;
    extractor.write_feed(&registry, &mut output)?;

    println!(
        "Menu feed written: {} -> {} ({} days)",
        cli.input.display(),
        cli.output.display(),
        registry.len()
    );

    Ok(())
}
