use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use log::info;
use maruyama_page::config::{Config, DEFAULT_CONFIG_PATH};
use maruyama_page::convert::{convert_file, default_output_path};
use maruyama_page::{initialize, DataSource, DescriptionMode, HtmlPage, DEFAULT_SKELETON};

#[derive(Parser)]
#[command(name = "maruyama-page")]
#[command(about = "Render product-detail pages from a products JSON document")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    config: PathBuf,

    /// Show debug output (sets RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the first product of a products document into the page skeleton
    Render {
        /// URL or path of the products document (defaults to the config's data_source)
        source: Option<String>,
        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// HTML skeleton to render into
        #[arg(long)]
        skeleton: Option<PathBuf>,
        /// Select thumbnail K after rendering, as if it had been clicked
        #[arg(long, value_name = "K")]
        select: Option<usize>,
        /// Show the detailed description as plain text instead of markup
        #[arg(long)]
        plain_description: bool,
    },
    /// Convert structured extraction JSON into the products document
    Convert {
        /// Structured extraction JSON
        input: PathBuf,
        /// Output path (defaults to <input stem>_frontend.json)
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = Config::load(&cli.config)?;

    match cli.command {
        Commands::Render {
            source,
            output,
            skeleton,
            select,
            plain_description,
        } => {
            let source: DataSource = source.unwrap_or(config.data_source.clone()).parse()?;
            let skeleton = match skeleton.or(config.skeleton.clone()) {
                Some(path) => std::fs::read_to_string(&path)
                    .wrap_err_with(|| format!("failed to read skeleton {}", path.display()))?,
                None => DEFAULT_SKELETON.to_owned(),
            };
            let mut options = config.render_options();
            if plain_description {
                options.description_mode = DescriptionMode::Text;
            }

            let mut page = HtmlPage::parse(&skeleton, config.selectors.clone())?;
            let mut view = initialize(&mut page, &source, &options).await?;
            if let Some(k) = select {
                view.select(k)?;
                view.paint(&mut page)?;
            }

            let html = page.to_html();
            match output.or(config.output) {
                Some(path) => {
                    std::fs::write(&path, html)
                        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                    info!("rendered page saved to {}", path.display());
                }
                None => println!("{html}"),
            }
        }
        Commands::Convert { input, output } => {
            let output = output.unwrap_or_else(|| default_output_path(&input));
            let catalog = convert_file(&input, &output)?;
            for product in &catalog.products {
                info!(
                    "{}: {} feature(s), {} specification(s)",
                    product.product_name,
                    product.features.len(),
                    product.specifications.len()
                );
            }
        }
    }
    Ok(())
}
