mod cli;
mod settings;

use std::io::{self, BufRead};
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde_json::json;

use querybar::{
    CommitEvent, EventSink, FocusTarget, HistoryStore, MemoryService, ResultItem, SearchBar,
    SearchService, app_dirs, logging,
};

use crate::cli::parse_cli;
use crate::settings::ResolvedConfig;

fn main() -> Result<()> {
    let cli = parse_cli();
    logging::initialize()?;

    let settings = settings::load(&cli)?;
    if cli.print_config {
        settings.print_summary();
    }

    run_shell(settings)
}

/// Drive the controller from a line-oriented stdin loop.
///
/// Plain lines update the query; `:enter` submits it, `:pick <text>` commits
/// a selection, `:quit` exits. Option lists and outcomes are printed after
/// each input once the debounced fetch has settled.
fn run_shell(settings: ResolvedConfig) -> Result<()> {
    let corpus = match &settings.seed {
        Some(path) => load_corpus(path)?,
        None => default_corpus(),
    };
    let history_path = match &settings.history_file {
        Some(path) => path.clone(),
        None => app_dirs::get_data_dir()?.join("history.json"),
    };
    let history = HistoryStore::load(&history_path, settings.history_capacity)?;
    let service = Arc::new(MemoryService::with_history(corpus, history));
    let settle_budget = settings.controller.suggest_debounce + Duration::from_millis(100);

    let mut bar = SearchBar::with_config(
        Arc::clone(&service) as Arc<dyn SearchService>,
        Box::new(ConsoleFocus),
        Box::new(ConsoleSink),
        settings.controller,
    );
    bar.hydrate_initial_suggestions();
    settle(&mut bar, settle_budget);
    print_options(&bar);

    println!("Type to update the query; ':enter' submits, ':pick <text>' selects, ':quit' exits.");
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        let input = line.trim_end();
        match input {
            ":quit" => break,
            ":enter" => {
                let query = bar.query().to_string();
                bar.commit(&query, CommitEvent::EnterKey);
            }
            _ => {
                if let Some(choice) = input.strip_prefix(":pick ") {
                    let choice = choice.to_string();
                    bar.set_query(&choice);
                    bar.commit(&choice, CommitEvent::PointerSelection);
                } else {
                    bar.set_query(input);
                }
            }
        }
        settle(&mut bar, settle_budget);
        print_options(&bar);
    }

    service.save_history(&history_path)
}

/// Tick the controller until the debounce window and worker latency pass.
fn settle(bar: &mut SearchBar, budget: Duration) {
    let deadline = Instant::now() + budget;
    while Instant::now() < deadline {
        bar.tick();
        thread::sleep(Duration::from_millis(10));
    }
    bar.tick();
}

fn print_options(bar: &SearchBar) {
    println!("query: '{}'", bar.query());
    for option in bar.options() {
        println!("  > {}", option.label());
    }
}

fn load_corpus(path: &Path) -> Result<Vec<ResultItem>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed corpus {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse seed corpus {}", path.display()))
}

fn default_corpus() -> Vec<ResultItem> {
    [
        "people",
        "people skills",
        "process",
        "process streams",
        "technology",
        "technology stack",
    ]
    .into_iter()
    .map(|name| ResultItem::new(name, json!({ "kind": "graph" })))
    .collect()
}

struct ConsoleFocus;

impl FocusTarget for ConsoleFocus {
    fn focus(&mut self) {
        println!("(input focused)");
    }

    fn blur(&mut self) {
        println!("(input blurred)");
    }

    fn select_all(&mut self) {
        println!("(input text selected)");
    }
}

struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn on_search_result(&mut self, items: Vec<ResultItem>) {
        println!("search result:");
        for item in items {
            println!("  {} {}", item.name, item.params);
        }
    }

    fn on_clear_result(&mut self) {
        println!("(result cleared)");
    }
}
