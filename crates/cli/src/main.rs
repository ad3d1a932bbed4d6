use anyhow::{Context, Result};
use awards::{ProducerInterval, ProducerIntervals};
use catalogue::Page;
use clap::{Parser, Subcommand};
use colored::Colorize;
use server::{ListMoviesQuery, MovieView, MoviesService};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

/// Razzies - Golden Raspberry Awards catalogue
#[derive(Parser)]
#[command(name = "razzies")]
#[command(about = "Browse Worst Picture nominees and producer win intervals", long_about = None)]
struct Cli {
    /// Path to the semicolon-separated movie list
    #[arg(short, long, default_value = "data/movielist.csv")]
    data_file: PathBuf,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List nominees, year then title
    List {
        /// Only this ceremony year
        #[arg(long)]
        year: Option<String>,

        /// Only winners (true/yes/1) or only losers (false/no/0)
        #[arg(long)]
        winner: Option<String>,

        /// Page number, starting at 1
        #[arg(long)]
        page: Option<String>,

        /// Movies per page (at most 50)
        #[arg(long)]
        per_page: Option<String>,
    },

    /// Show producers with the shortest and longest gaps between wins
    Intervals,

    /// Run concurrent queries to measure latency
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let service = MoviesService::load_from_file(&cli.data_file)
        .context("Failed to load the award catalogue")?;
    info!(
        "Loaded {} movies from {} in {:?}",
        service.store().snapshot().len(),
        cli.data_file.display(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            year,
            winner,
            page,
            per_page,
        } => {
            let query = ListMoviesQuery {
                year,
                winner,
                page,
                per_page,
            };
            handle_list(&service, &query, cli.json)?
        }
        Commands::Intervals => handle_intervals(&service, cli.json)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(service, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(service: &MoviesService, query: &ListMoviesQuery, json: bool) -> Result<()> {
    let page = service.list_movies_from_query(query);

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_page(&page);
    }
    Ok(())
}

/// Handle the 'intervals' command
fn handle_intervals(service: &MoviesService, json: bool) -> Result<()> {
    let intervals = service.producer_intervals();

    if json {
        println!("{}", serde_json::to_string_pretty(&intervals)?);
    } else {
        print_intervals(&intervals);
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(service: MoviesService, requests: usize, concurrent: usize) -> Result<()> {
    let service = Arc::new(service);
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));

    // Alternate between listings of a random year and interval reports
    let mut handles = vec![];
    for request in 0..requests {
        let service = service.clone();
        let permits = permits.clone();
        let year = 1980 + (rand::random::<u32>() % 40) as i32;
        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            tokio::task::spawn_blocking(move || {
                if request % 2 == 0 {
                    let query = ListMoviesQuery {
                        year: Some(year.to_string()),
                        ..Default::default()
                    };
                    service.list_movies_from_query(&query);
                } else {
                    service.producer_intervals();
                }
            })
            .await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let wall_clock = Instant::now();
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let wall_time = wall_clock.elapsed();

    if timings.is_empty() {
        println!("No requests made.");
        return Ok(());
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / wall_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Helper function to format and print a listing page
fn print_page(page: &Page<MovieView>) {
    let pages = page.total.div_ceil(page.per_page);
    println!(
        "{}",
        format!(
            "Movies (page {} of {}, {} total):",
            page.page,
            pages.max(1),
            page.total
        )
        .bold()
        .blue()
    );

    if page.items.is_empty() {
        println!("  (no movies on this page)");
        return;
    }

    for movie in &page.items {
        let marker = if movie.winner {
            "★".yellow()
        } else {
            " ".normal()
        };
        println!("{} {} {}", marker, movie.year.to_string().green(), movie.title);
        println!("     Studios: {}", movie.studios.join(", "));
        println!("     Producers: {}", movie.producers.join(", "));
    }
}

/// Helper function to format and print the interval report
fn print_intervals(intervals: &ProducerIntervals) {
    if intervals.is_empty() {
        println!("No producer has won more than once.");
        return;
    }

    print_interval_group("Shortest interval between wins:", &intervals.min);
    print_interval_group("Longest interval between wins:", &intervals.max);
}

fn print_interval_group(heading: &str, entries: &[ProducerInterval]) {
    println!("{}", heading.bold().blue());
    for entry in entries {
        println!(
            "  {} - {} years ({} -> {})",
            entry.producer.green(),
            entry.interval,
            entry.previous_win,
            entry.following_win
        );
    }
}
