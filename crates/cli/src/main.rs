use anyhow::{anyhow, Context, Result};
use catalog::{Catalog, Category, Listing, ListingId, RevenuePeriod};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{CategorySelection, DisplayItem, Query, QueryEngine, SortKey};
use std::path::PathBuf;
use std::time::Instant;

/// BizMarket - Business-for-Sale Listing Browser
#[derive(Parser)]
#[command(name = "bizmarket")]
#[command(about = "Browse, search, and sort business-for-sale listings", long_about = None)]
struct Cli {
    /// Path to the listings catalog JSON file
    #[arg(short, long, default_value = "data/listings.json")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog with search, location, and category filters
    Browse {
        /// Free-text search term (matched against name, location, and blurb)
        #[arg(long, default_value = "")]
        term: String,

        /// Location filter (case-insensitive substring of the location)
        #[arg(long, default_value = "")]
        location: String,

        /// Category: all, tech, restaurant, retail, manufacturing, services
        #[arg(long, default_value = "all")]
        category: String,

        /// Sort key: newest, price-low, price-high, name, location
        #[arg(long, default_value = "newest")]
        sort: String,
    },

    /// Show full details for one listing
    Show {
        /// Listing id to display
        #[arg(long)]
        id: ListingId,
    },

    /// Show listing counts per category
    Categories,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Catalog::load_from_file(&cli.data)
        .with_context(|| format!("Failed to load catalog from {}", cli.data.display()))?;
    println!(
        "{} Loaded {} listings in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Browse {
            term,
            location,
            category,
            sort,
        } => handle_browse(&catalog, term, location, &category, &sort)?,
        Commands::Show { id } => handle_show(&catalog, id)?,
        Commands::Categories => handle_categories(&catalog),
    }

    Ok(())
}

/// Handle the 'browse' command
fn handle_browse(
    catalog: &Catalog,
    term: String,
    location: String,
    category: &str,
    sort: &str,
) -> Result<()> {
    let query = Query {
        search_term: term,
        location,
        category: category
            .parse::<CategorySelection>()
            .with_context(|| format!("Unknown category '{category}'"))?,
        // Unknown sort keys deliberately fall back to newest
        sort: SortKey::parse(sort),
    };

    let engine = QueryEngine::new();
    let items = engine.run(catalog.listings(), &query)?;

    if items.is_empty() {
        println!("\n{}", "No businesses found".bold());
        println!("Try adjusting your search criteria or browse all categories.");
        return Ok(());
    }

    println!(
        "\n{} (sorted by {})\n",
        "Businesses for sale".bold(),
        query.sort
    );
    for item in &items {
        match item {
            DisplayItem::Listing(listing) => print_listing_row(listing),
            DisplayItem::Advertisement { slot } => {
                println!("  {}", format!("── Sponsored (slot {slot}) ──").dimmed())
            }
        }
    }
    Ok(())
}

fn print_listing_row(listing: &Listing) {
    println!(
        "  #{:<4} {:<28} {:>12}  {:<18} [{}]",
        listing.id,
        listing.name,
        format_price(listing.price).green(),
        listing.location,
        listing.category.label().cyan()
    );
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, id: ListingId) -> Result<()> {
    let listing = catalog
        .get(id)
        .ok_or_else(|| anyhow!("Listing {} not found", id))?;

    println!("\n{}", listing.name.bold());
    println!("  Category:    {}", listing.category.label());
    println!("  Location:    {}", listing.location);
    println!("  Asking:      {}", format_price(listing.price).green());
    if let Some(revenue) = &listing.revenue {
        let period = match revenue.period {
            RevenuePeriod::Month => "month",
            RevenuePeriod::Year => "year",
        };
        println!("  Revenue:     {} per {period}", format_price(revenue.amount));
    }
    if let Some(established) = listing.established {
        println!("  Established: {established}");
    }
    if listing.is_negotiable == Some(true) {
        println!("  {}", "Price negotiable".yellow());
    }
    if let Some(status) = listing.status {
        println!("  Status:      {status:?}");
    }
    println!("\n{}", listing.description);
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog) {
    println!("\n{}", "Listings per category".bold());
    for category in Category::ALL {
        println!(
            "  {:<14} {}",
            category.label(),
            catalog.category_count(category)
        );
    }
}

/// Format a whole-currency-unit amount with thousands separators,
/// e.g. 1250000 -> "$1,250,000". Pure display concern.
fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
