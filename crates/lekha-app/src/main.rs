//! Lekha driver binary - composition root.
//!
//! Ties the widget crates together into a runnable program:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Build the widget controller over the HTTP knowledge service
//! 3. Run the startup health probe and open the panel
//! 4. Drive the controller from terminal input (stand-in for the host
//!    page's event wiring: lines become chat messages, slash commands map
//!    to controller methods)
//! 5. Optionally export the embeddable markup on exit

use clap::Parser;
use tokio::io::AsyncBufReadExt;

mod cli;
mod console;

use cli::CliArgs;
use console::{connection_label, ConsoleRender};
use lekha_core::config::LekhaConfig;
use lekha_render::{HtmlRender, Render};
use lekha_widget::{SendOutcome, Widget};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Tracing.
    let default_level = args.log_level.clone().unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    tracing::info!("Starting Lekha v{}", env!("CARGO_PKG_VERSION"));

    // Config, with CLI overrides.
    let config_file = args.resolve_config_path();
    let mut config = LekhaConfig::load_or_default(&config_file);
    if let Some(base) = args.api_base.clone() {
        config.api.base_url = base;
    }
    if args.no_web_search {
        config.api.web_search_enabled = false;
    }

    // Widget.
    let mut widget = Widget::with_http(&config, Box::new(ConsoleRender::new()))?;
    widget.startup().await;
    widget.open();

    println!(
        "Session {} against {}. Type a question, or /help for commands.",
        widget.session_id(),
        config.api.base_url
    );

    // Event loop.
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if let Some(command) = line.strip_prefix('/') {
            match command {
                "quit" | "exit" => break,
                "help" => print_help(),
                "open" => widget.open(),
                "close" => widget.close(),
                "toggle" => widget.toggle(),
                "esc" => widget.escape(),
                "web on" => widget.set_web_search_enabled(true),
                "web off" => widget.set_web_search_enabled(false),
                "status" => {
                    let state = widget.state();
                    println!(
                        "open={} loading={} web_search={} connection={}",
                        state.is_open,
                        state.is_loading,
                        state.web_search_enabled,
                        connection_label(state.connection)
                    );
                }
                _ => println!("Unknown command: /{}. Try /help.", command),
            }
            continue;
        }

        if widget.send(&line).await == SendOutcome::Rejected {
            println!("(nothing sent: a request is in flight or the message was empty)");
        }
    }

    // Export the embeddable markup if requested.
    if let Some(path) = args.export_html {
        let mut html = HtmlRender::new(config.appearance.position, &config.appearance.theme);
        html.render(widget.transcript(), widget.state());
        std::fs::write(&path, html.page())?;
        tracing::info!(path = %path.display(), "Embeddable markup exported");
    }

    tracing::info!("Lekha shut down");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  /open /close /toggle /esc   panel visibility");
    println!("  /web on | /web off          toggle web search for next requests");
    println!("  /status                     show widget state");
    println!("  /quit                       exit");
    println!("Anything else is sent to the assistant.");
}
