//! Partlet demo host.
//!
//! Wires the router to a local pages directory, an in-memory document,
//! and a session history, then drives it from a line-oriented REPL:
//! `go <page>` clicks a navigation link, `click <href>` follows a raw
//! href, `back`/`forward` replay history entries, `show` prints the
//! document.

mod config;
mod document;
mod fetch;
mod pages;
mod session;

use std::io::{self, BufRead, Write};

use anyhow::Result;

use config::AppConfig;
use document::MemoryDocument;
use fetch::DirFetchBackend;
use partlet_router::{PageId, Router};
use partlet_types::Trigger;
use session::SessionHistory;

type DemoRouter = Router<MemoryDocument, DirFetchBackend, SessionHistory>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::resolve()?;
    log::info!(
        "Starting Partlet demo (home page '{}', pages dir {})",
        config.router.home_page,
        config.pages_dir.display(),
    );

    let mut router = build_router(config)?;

    // Initial load at the root URL.
    router.handle_trigger(Trigger::PageLoad {
        path: "/".to_string(),
        hash: String::new(),
    })?;
    pump(&mut router)?;

    println!("{}", router.document().render());
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match dispatch(&mut router, line.trim()) {
            Ok(true) => break,
            Ok(false) => {},
            Err(e) => log::error!("{e}"),
        }
    }

    Ok(())
}

/// Assemble the router from an app config: seed the pages directory,
/// build one navbar link per known page, and attach the directory
/// fetch backend plus a fresh session history.
fn build_router(config: AppConfig) -> Result<DemoRouter> {
    pages::populate_demo_pages(&config.pages_dir)?;

    let links: Vec<(String, String)> = config
        .router
        .known_pages
        .iter()
        .map(|name| {
            let href = config.router.page_url(name);
            let label = PageId::Known(name.clone()).display_name();
            (href, label)
        })
        .collect();

    let document = MemoryDocument::new("Partlet Demo", &links);
    let fetch = DirFetchBackend::new(&config.pages_dir);
    let history = SessionHistory::new();
    Ok(Router::new(config.router, document, fetch, history))
}

/// Handle one REPL command. Returns `true` on quit.
fn dispatch(router: &mut DemoRouter, line: &str) -> Result<bool> {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {},
        "go" => {
            if rest.is_empty() {
                println!("usage: go <page>");
                return Ok(false);
            }
            let href = router.config().page_url(rest);
            router.handle_trigger(Trigger::LinkClick { href })?;
            pump(router)?;
            println!("{}", router.document().render());
        },
        "click" => {
            if rest.is_empty() {
                println!("usage: click <href>");
                return Ok(false);
            }
            router.handle_trigger(Trigger::LinkClick {
                href: rest.to_string(),
            })?;
            pump(router)?;
            println!("{}", router.document().render());
        },
        "back" => match router.history_mut().go_back()? {
            Some(state) => {
                router.handle_trigger(Trigger::HistoryPop { state: Some(state) })?;
                pump(router)?;
                println!("{}", router.document().render());
            },
            None => println!("history: already at the oldest entry"),
        },
        "forward" => match router.history_mut().go_forward()? {
            Some(state) => {
                router.handle_trigger(Trigger::HistoryPop { state: Some(state) })?;
                pump(router)?;
                println!("{}", router.document().render());
            },
            None => println!("history: already at the newest entry"),
        },
        "show" => println!("{}", router.document().render()),
        "help" => print_help(),
        "quit" | "exit" => return Ok(true),
        _ => println!("unknown command '{command}' (try 'help')"),
    }

    Ok(false)
}

/// Drain queued fetch completions into the router.
fn pump(router: &mut DemoRouter) -> Result<()> {
    let events = router.fetch_mut().take_completions();
    for event in events {
        router.on_fetch_complete(event)?;
    }
    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  go <page>     navigate to a page (e.g. 'go about')");
    println!("  click <href>  follow a raw href (e.g. 'click #about')");
    println!("  back          go back one history entry");
    println!("  forward       go forward one history entry");
    println!("  show          print the current document");
    println!("  help          show this help");
    println!("  quit          exit");
}
