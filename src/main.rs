// termfolio - a portfolio you talk to like a shell
//
// Entry point. Parses CLI args and dispatches to handlers.

use anyhow::Context;
use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use termfolio_lib::{
    config::{ColorMode, Config},
    core::Dispatcher,
    registry::Effect,
    terminal::{self, DisabledBrowser, LinkOpener, Renderer, SystemBrowser},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Flags accepted before the subcommand
#[derive(Debug, Default)]
struct GlobalOptions {
    config: Option<PathBuf>,
    no_color: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (options, rest) = parse_global_options(&args)?;

    let mut config = Config::load(options.config.as_deref()).context("failed to load config")?;
    if options.no_color {
        config.color = ColorMode::Never;
    }

    init_logging(&config);

    let command = rest.first().map(String::as_str).unwrap_or("shell");
    let tail = rest.get(1..).unwrap_or(&[]);

    match command {
        "shell" => handle_shell(&config).await,
        "run" => handle_run(&config, tail),
        "suggest" => handle_suggest(tail),
        "commands" => handle_commands(),
        "version" | "-v" | "--version" => {
            println!("termfolio v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

fn parse_global_options(args: &[String]) -> anyhow::Result<(GlobalOptions, Vec<String>)> {
    let mut options = GlobalOptions::default();
    let mut rest = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if rest.is_empty() => {
                i += 1;
                let path = args.get(i).context("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--no-color" if rest.is_empty() => options.no_color = true,
            arg => rest.push(arg.to_string()),
        }
        i += 1;
    }

    Ok((options, rest))
}

fn init_logging(config: &Config) {
    // stderr only: stdout belongs to the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(config.log_filter()).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn handle_shell(config: &Config) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::builtin().context("failed to build command registry")?;

    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        terminal::run_interactive(config, dispatcher).await?;
    } else {
        terminal::run_piped(config, dispatcher).await?;
    }

    Ok(())
}

fn handle_run(config: &Config, args: &[String]) -> anyhow::Result<()> {
    let json = args.iter().any(|arg| arg == "--json");
    let input = args
        .iter()
        .filter(|arg| *arg != "--json")
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    let dispatcher = Dispatcher::builtin().context("failed to build command registry")?;
    let response = dispatcher.dispatch(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let renderer = Renderer::new(config, config.use_color(io::stdout().is_terminal()), false);
        let mut out = io::stdout().lock();
        for line in &response.lines {
            renderer.write_line(&mut out, line)?;
        }
    }

    if let Effect::OpenUrl(url) = response.effect {
        let opener: Box<dyn LinkOpener> = if config.open_links {
            Box::new(SystemBrowser)
        } else {
            Box::new(DisabledBrowser)
        };
        if let Err(e) = opener.open(url) {
            warn!(url, error = %e, "could not open link");
        }
    }

    Ok(())
}

fn handle_suggest(args: &[String]) -> anyhow::Result<()> {
    let input = args.join(" ");
    let dispatcher = Dispatcher::builtin().context("failed to build command registry")?;
    let registry = dispatcher.registry();

    if registry.lookup(&input.trim().to_lowercase()).is_some() {
        println!("'{}' is already a command", input.trim());
        return Ok(());
    }

    let engine = termfolio_lib::intelligence::SuggestionEngine::new(registry.names().to_vec());
    match engine.suggest(input.trim()) {
        Some(name) => println!("{}", name),
        None => println!("no suggestion"),
    }

    Ok(())
}

fn handle_commands() -> anyhow::Result<()> {
    let dispatcher = Dispatcher::builtin().context("failed to build command registry")?;

    println!("\nAvailable commands:");
    println!("{}", "=".repeat(40));
    for entry in dispatcher.registry().commands() {
        println!("  {:<16} {}", entry.label(), entry.summary);
    }
    println!("{}", "=".repeat(40));

    Ok(())
}

fn print_usage() {
    println!(
        r#"termfolio v{} - a portfolio you talk to like a shell

USAGE:
    termfolio [--config <path>] [--no-color] [COMMAND]

COMMANDS:
    shell                  Start an interactive session (default)
    run [--json] <input>   Run one portfolio command and print the output
    suggest <word>         Show the closest known command
    commands               List commands, aliases and what they do
    version                Show version
    help                   Show this help

KEYS (interactive):
    Enter                  Run the current line
    Up / Down              Walk through earlier input
    Ctrl-C / Ctrl-D        Leave

CONFIG:
    ~/.termfolio/config.json, overridden by --config.
    TERMFOLIO_LOG sets the log filter; NO_COLOR disables colors.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
