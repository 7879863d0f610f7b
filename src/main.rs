//! newshub binary: one-shot page or interactive session.

use clap::Parser;
use std::error::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use newshub::api::{FailurePolicy, NewsDataClient};
use newshub::cli::Cli;
use newshub::commands::{self, Command};
use newshub::config::Config;
use newshub::controller::{FetchTicket, NewsController};
use newshub::models::FilterState;
use newshub::outputs::page::{self, PageView};
use newshub::outputs::{card::CardView, json};
use newshub::utils::ensure_writable_dir;

type Controller = NewsController<NewsDataClient>;

fn print_page(controller: &Controller, selected: Option<usize>) {
    let view = PageView {
        filters: controller.filters(),
        loading: controller.is_loading(),
        articles: controller.articles(),
        selected,
        last_error: controller.last_error(),
    };
    print!("{}", page::render(&view));
}

/// Show the loading page, then wait for the fetch and show the result.
async fn fetch_and_print(controller: &mut Controller, ticket: FetchTicket) {
    print_page(controller, None);
    controller.run(ticket).await;
    print_page(controller, None);
}

async fn save(controller: &Controller, dir: Option<&str>) {
    let Some(dir) = dir else {
        warn!("No JSON output directory configured (use --json-output-dir)");
        return;
    };
    if let Err(e) = json::write_snapshot(controller.filters(), controller.articles(), dir).await {
        error!(path = %dir, error = %e, "Failed to write JSON snapshot");
    }
}

/// Read commands from stdin until `/quit` or end of input.
async fn run_interactive(
    controller: &mut Controller,
    json_dir: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut selected: Option<usize> = None;
    println!("{}", page::help());

    while let Some(line) = lines.next_line().await? {
        let command = match commands::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };
        debug!(?command, "Received command");

        match command {
            Command::Nothing => continue,
            Command::Quit => break,
            Command::Help => {
                println!("{}", page::help());
                continue;
            }
            Command::Query(text) => {
                controller.set_query(text);
                println!("Query set; use /search to fetch.");
                continue;
            }
            Command::Search(text) => {
                if let Some(text) = text {
                    controller.set_query(text);
                }
                let ticket = controller.submit_search();
                fetch_and_print(controller, ticket).await;
                selected = None;
                continue;
            }
            Command::Category(category) => {
                selected = None;
                match controller.set_category(category) {
                    Some(ticket) => fetch_and_print(controller, ticket).await,
                    None => print_page(controller, selected),
                }
                continue;
            }
            Command::Country(country) => {
                selected = None;
                match controller.set_country(country) {
                    Some(ticket) => fetch_and_print(controller, ticket).await,
                    None => print_page(controller, selected),
                }
                continue;
            }
            Command::Refresh => {
                let ticket = controller.begin_fetch();
                fetch_and_print(controller, ticket).await;
                selected = None;
                continue;
            }
            Command::Select(n) => {
                if n <= controller.articles().len() {
                    selected = Some(n - 1);
                } else {
                    println!("No card {n}.");
                    continue;
                }
            }
            Command::Open(n) => {
                match controller.articles().get(n - 1) {
                    Some(article) => println!("Open: {}", CardView::new(article).link()),
                    None => println!("No card {n}."),
                }
                continue;
            }
            Command::Save => {
                save(controller, json_dir).await;
                continue;
            }
        }
        print_page(controller, selected);
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init (stderr; stdout is the page) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("newshub starting up");

    let args = Cli::parse();
    debug!(?args.config, interactive = args.interactive, "Parsed CLI arguments");

    let config = Config::resolve(&args)?;

    if let Some(dir) = args.json_output_dir.as_deref() {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "JSON output directory is not writable");
            return Err(e);
        }
    }

    let filters = FilterState::new(
        config.default_query.clone(),
        config.default_category,
        config.default_country,
    );
    let policy = if args.fail_empty {
        FailurePolicy::Empty
    } else {
        FailurePolicy::Fallback
    };
    let mut controller = NewsController::new(NewsDataClient::new(config), filters).with_policy(policy);

    let ticket = controller.mount();
    fetch_and_print(&mut controller, ticket).await;

    if args.interactive {
        run_interactive(&mut controller, args.json_output_dir.as_deref()).await?;
    } else if args.json_output_dir.is_some() {
        save(&controller, args.json_output_dir.as_deref()).await;
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}
