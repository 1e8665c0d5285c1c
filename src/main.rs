use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use d2cmate::{
    ApiClient, Catalog, CatalogBackend, DEFAULT_API_URL, DescriptionLimit, HsnRow, ProductCard,
    Record, SearchOptions,
    formatters::{empty_summary, results_summary},
    format_hsn_table, format_product_card,
    interactive::{InteractiveSearch, constants::DEFAULT_DEBOUNCE_MS},
    logging,
};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "d2cmate",
    version,
    about = "Search the D2CMate product catalog and HSN code schedule",
    long_about = None
)]
struct Cli {
    /// Search text (omit to list everything)
    #[arg(conflicts_with = "interactive")]
    query: Option<String>,

    /// Search HSN codes instead of products
    #[arg(long)]
    hsn: bool,

    /// Interactive search mode (fzf-like)
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Base URL of the search API
    #[arg(long, env = "D2CMATE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Cut descriptions at 100 characters instead of 200
    #[arg(long)]
    compact: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet period before HSN suggestions are fetched (interactive mode)
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Turn off HSN suggestions (interactive mode)
    #[arg(long)]
    no_suggest: bool,

    /// Write logs to this file (interactive mode)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = if cli.hsn { Catalog::Hsn } else { Catalog::Products };
    let options = SearchOptions {
        api_url: cli.api_url.clone(),
        catalog,
        debounce_ms: cli.debounce_ms,
        suggestions_enabled: !cli.no_suggest,
        verbose: cli.verbose,
    };

    if cli.interactive {
        // stderr is unusable while the alternate screen is up.
        if let Some(path) = &cli.log_file {
            logging::init_file(path, &options)?;
        }
        let mut interactive = InteractiveSearch::new(&options)?;
        return interactive.run();
    }

    logging::init_stderr(&options);

    let query = cli.query.as_deref().filter(|q| !q.is_empty());
    if options.verbose {
        eprintln!("API: {}", options.api_url);
        eprintln!("Query: {query:?}");
    }

    let client = ApiClient::new(options.api_url.as_str()).context("failed to build HTTP client")?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let records = runtime.block_on(client.search(catalog, query))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.format {
        OutputFormat::Text => {
            let limit = if cli.compact {
                DescriptionLimit::Compact
            } else {
                DescriptionLimit::Full
            };
            print_text(&mut handle, &records, catalog, limit, !cli.no_color)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut handle, &records)?;
            writeln!(handle)?;
        }
        OutputFormat::JsonL => {
            for record in &records {
                serde_json::to_writer(&mut handle, record)?;
                writeln!(handle)?;
            }
        }
    }

    Ok(())
}

fn print_text(
    out: &mut impl Write,
    records: &[Record],
    catalog: Catalog,
    limit: DescriptionLimit,
    use_color: bool,
) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "{}", empty_summary(catalog))?;
        return Ok(());
    }

    writeln!(out, "{}\n", results_summary(records.len(), catalog))?;
    match catalog {
        Catalog::Products => {
            for (i, product) in records.iter().filter_map(Record::as_product).enumerate() {
                let card = ProductCard::from_product(product, i, limit);
                writeln!(out, "{}\n", format_product_card(&card, use_color))?;
            }
        }
        Catalog::Hsn => {
            let rows: Vec<HsnRow> = records
                .iter()
                .filter_map(Record::as_hsn)
                .map(HsnRow::from_record)
                .collect();
            writeln!(out, "{}", format_hsn_table(&rows, use_color))?;
        }
    }
    Ok(())
}
