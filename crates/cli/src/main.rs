//! queryshelf CLI: browse a catalog of stored SQL queries from the terminal.
//!
//! Calls `queryshelf-core` directly; each invocation is one search session.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use queryshelf_core::types::{CatalogRecord, Category, CategoryFilter, ALL_CATEGORIES_LABEL};
use queryshelf_core::{load_queryshelf_config, QueryCatalog, QueryshelfConfig, SearchState};

/// queryshelf: search, filter, and page through stored SQL queries.
#[derive(Parser)]
#[command(name = "qs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root holding .queryshelf.toml (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Catalog file to load instead of the configured or built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Autocomplete suggestions for a partial title
    Suggest {
        /// Text typed so far
        term: String,
    },
    /// List queries matching the filters, one page at a time
    List {
        /// Case-insensitive text matched against titles and descriptions
        #[arg(long, short)]
        search: Option<String>,

        /// Category label or slug, or "All Types"
        #[arg(long, short, default_value = ALL_CATEGORIES_LABEL)]
        category: CategoryFilter,

        /// Only queries created on this day (YYYY-MM-DD)
        #[arg(long, short)]
        date: Option<NaiveDate>,

        /// Page to show (1-indexed, clamped to the available pages)
        #[arg(long, short, default_value = "1")]
        page: usize,

        /// Results per page (default: from config, else 5)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show a query's SQL and sample output
    Show {
        /// Query id
        id: String,
    },
    /// List the category labels accepted by `list --category`
    Categories,
}

fn resolve_root(root: Option<PathBuf>) -> PathBuf {
    let root = match root {
        Some(r) => r,
        None => std::env::current_dir().unwrap_or_else(|e| {
            eprintln!("Could not determine current directory: {e}");
            std::process::exit(1);
        }),
    };
    root.canonicalize().unwrap_or_else(|e| {
        eprintln!("Path not found: {} ({e})", root.display());
        std::process::exit(1);
    })
}

fn load_catalog(config: &QueryshelfConfig, override_path: Option<PathBuf>) -> QueryCatalog {
    let loaded = match override_path {
        Some(path) => QueryCatalog::load(&path),
        None => config.load_catalog(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Could not encode JSON: {e}");
            std::process::exit(1);
        }
    }
}

fn print_record_line(r: &CatalogRecord) {
    println!("{:<6} {:<44} {:<20} {}", r.id, r.title(), r.category, r.display_date());
}

fn print_sample_output(r: &CatalogRecord) {
    let out = &r.sample_output;
    if out.columns.is_empty() {
        return;
    }
    let cells: Vec<Vec<String>> =
        out.rows.iter().map(|row| row.iter().map(|c| c.to_string()).collect()).collect();
    let widths: Vec<usize> = out
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            cells.iter().filter_map(|row| row.get(i)).map(|c| c.len()).fold(col.len(), usize::max)
        })
        .collect();

    let line = |values: &[String]| {
        values
            .iter()
            .zip(&widths)
            .map(|(v, &w)| format!("{v:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };
    println!("\nSample output:");
    println!("  {}", line(&out.columns));
    println!("  {}", widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("  "));
    for row in &cells {
        println!("  {}", line(row));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("queryshelf=warn".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let root = resolve_root(cli.root);
    let config = load_queryshelf_config(&root);
    debug!(
        root = %root.display(),
        page_size = config.page_size,
        catalog = ?config.catalog_path(),
        "Config resolved"
    );

    match cli.command {
        Commands::Suggest { term } => {
            let catalog = load_catalog(&config, cli.catalog);
            let suggestions = catalog.suggest(&term);

            if cli.json {
                print_json(&suggestions);
            } else {
                if suggestions.is_empty() {
                    eprintln!("No suggestions for '{term}'");
                    std::process::exit(1);
                }
                for r in &suggestions {
                    println!("{}  ({})", r.title(), r.category);
                }
            }
        }
        Commands::List { search, category, date, page, page_size } => {
            let catalog = load_catalog(&config, cli.catalog);
            let state = SearchState::new(page_size.unwrap_or(config.page_size))
                .with_search_term(search.unwrap_or_default())
                .with_category(category)
                .with_date_filter(date)
                .with_page(page);
            let response = catalog.search(&state);

            if cli.json {
                print_json(&response);
            } else {
                if response.page.is_empty() {
                    eprintln!("No SQL queries found matching your criteria.");
                    std::process::exit(1);
                }
                for r in &response.page.items {
                    print_record_line(r);
                }
                eprintln!(
                    "\nPage {} of {} ({} of {} queries match)",
                    response.page.page,
                    response.page.total_pages,
                    response.page.total_items,
                    response.total_records
                );
            }
        }
        Commands::Show { id } => {
            let catalog = load_catalog(&config, cli.catalog);
            let Some(record) = catalog.get(&id) else {
                eprintln!("Query not found: {id}");
                std::process::exit(1);
            };

            if cli.json {
                print_json(record);
            } else {
                println!("{}", record.title());
                println!("{} | {}", record.category, record.display_date());
                println!("\n{}", record.description());
                if !record.sql.is_empty() {
                    println!("\n{}", record.sql);
                }
                print_sample_output(record);
            }
        }
        Commands::Categories => {
            let labels: Vec<&str> = std::iter::once(ALL_CATEGORIES_LABEL)
                .chain(Category::ALL.iter().map(|c| c.label()))
                .collect();
            if cli.json {
                print_json(&labels);
            } else {
                for label in labels {
                    println!("{label}");
                }
            }
        }
    }
}
