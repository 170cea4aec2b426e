//! MET Collection Explorer CLI
//!
//! Command-line presentation layer over the search resolver. Owns the
//! current filters and page window via flags; the library core stays a
//! pure function of (filters, page).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use met_explorer::{
    client::{CollectionApi, HttpClient},
    error::Result,
    models::{ArtworkRecord, Config, PageWindow, SearchFilters, SearchResult},
    pager,
    resolver::Resolver,
};

/// MET Collection Explorer
#[derive(Parser, Debug)]
#[command(name = "met", version, about = "Explore the MET open collection")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, default_value = "met.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search artworks by keyword, department, year range, and highlights
    Search {
        /// Free-text keyword (e.g. "Van Gogh", "armor", "cat")
        #[arg(short, long)]
        keyword: Option<String>,

        /// Department id (list them with `met departments`)
        #[arg(short, long)]
        department: Option<u32>,

        /// Inclusive start year
        #[arg(long)]
        year_from: Option<i32>,

        /// Inclusive end year
        #[arg(long)]
        year_to: Option<i32>,

        /// Show only collection highlights
        #[arg(long)]
        highlights: bool,

        /// Zero-based page index
        #[arg(short, long, default_value_t = 0)]
        page: usize,
    },

    /// Show one random artwork from the collection highlights
    Surprise,

    /// Find more works by an artist
    Artist {
        /// Artist display name
        name: String,

        /// Zero-based page index
        #[arg(short, long, default_value_t = 0)]
        page: usize,
    },

    /// List curatorial departments and their ids
    Departments,

    /// Show a single object by id
    Object {
        /// Collection object id
        id: u64,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    config.validate()?;

    let client = HttpClient::new(&config.api)?;
    let page_size = config.search.page_size;
    let resolver = Resolver::new(client, config);

    match cli.command {
        Command::Search {
            keyword,
            department,
            year_from,
            year_to,
            highlights,
            page,
        } => {
            let filters = SearchFilters {
                keyword,
                department_id: department,
                year_from,
                year_to,
                highlights_only: highlights,
            };
            let page = PageWindow::new(page, page_size);

            let mut result = resolver.resolve(&filters, &page).await?;
            render_page(&resolver, &mut result, &page).await?;
        }

        Command::Surprise => {
            let mut result = resolver.surprise_me().await?;
            if result.is_empty() {
                log::warn!("The highlights set came back empty, nothing to show.");
                return Ok(());
            }

            let page = PageWindow::new(0, 1);
            for record in resolver.fetch_page(&mut result, &page).await? {
                render_record(&record);
            }
        }

        Command::Artist { name, page } => {
            let page = PageWindow::new(page, page_size);
            let mut result = resolver.more_by_artist(&name, &page).await?;
            render_page(&resolver, &mut result, &page).await?;
        }

        Command::Departments => {
            for department in resolver.api().departments().await? {
                println!("{:>4}  {}", department.department_id, department.display_name);
            }
        }

        Command::Object { id } => {
            let record = resolver.api().get_object(id).await?;
            render_record(&record);
        }
    }

    Ok(())
}

/// Render one page of a resolved search, with the pagination footer.
async fn render_page(
    resolver: &Resolver<HttpClient>,
    result: &mut SearchResult,
    page: &PageWindow,
) -> Result<()> {
    if result.used_fallback {
        println!("No direct matches found. Showing popular highlights instead.\n");
    }

    let records = resolver.fetch_page(result, page).await?;
    for record in &records {
        render_record(record);
    }

    let view = pager::window(result.total_count, page);
    if view.is_empty() {
        println!("No results on page {}.", page.page_index);
    } else {
        println!(
            "Showing results {} - {} of {}",
            view.start + 1,
            view.end,
            result.total_count
        );
    }
    if view.has_previous {
        println!("  previous: --page {}", page.page_index - 1);
    }
    if view.has_next {
        println!("  next:     --page {}", page.page_index + 1);
    }

    Ok(())
}

/// Render a single artwork record as text.
fn render_record(record: &ArtworkRecord) {
    println!("── {} [{}]", record.display_title(), record.id);

    if record.has_artist() {
        println!("   Artist:     {}", record.artist);
        if !record.artist_bio.is_empty() {
            println!("   Bio:        {}", record.artist_bio);
        }
        println!("   More:       met artist \"{}\"", record.artist);
    }
    if !record.object_date.is_empty() {
        println!("   Date:       {}", record.object_date);
    }
    if !record.medium.is_empty() {
        println!("   Medium:     {}", record.medium);
    }
    if !record.culture.is_empty() {
        println!("   Culture:    {}", record.culture);
    }
    if !record.dimensions.is_empty() {
        println!("   Dimensions: {}", record.dimensions);
    }
    if !record.department.is_empty() {
        println!("   Department: {}", record.department);
    }
    if record.is_highlight {
        println!("   Highlight:  yes");
    }
    if !record.tags.is_empty() {
        println!("   Tags:       {}", record.tags.join(", "));
    }
    if let Some(url) = &record.primary_image_url {
        println!("   Image:      {}", url);
    }
    for url in &record.additional_image_urls {
        println!("   Also:       {}", url);
    }
    if !record.object_page_url.is_empty() {
        println!("   Page:       {}", record.object_page_url);
    }
    println!();
}
