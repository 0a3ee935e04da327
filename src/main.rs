use anyhow::{Context, Result};
use practice_desk::cli;
use practice_desk::navigation::RouteTable;
use practice_desk::session::Session;
use practice_desk::{SharedWorkspace, WorkspaceManager};
use std::fs::File;
use std::io::{self, BufReader};

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };

    // CLI --log-level takes precedence, then PRACTICE_DESK_LOG, then config (applied below)
    let explicit_level = options
        .log_level
        .or_else(practice_desk::debug::level_from_env);
    practice_desk::debug::init_log_bridge(explicit_level);

    log::info!("Starting practice-desk {}", practice_desk::VERSION);

    let mut config = options
        .load_config()
        .context("failed to load configuration")?;
    if explicit_level.is_none() {
        practice_desk::debug::set_level(config.log_level);
    }
    if options.max_tabs.is_some() {
        config.apply_max_tabs_override(options.max_tabs.as_deref());
    }

    let workspace = SharedWorkspace::new(WorkspaceManager::new(&config.workspace));
    let routes = RouteTable::from_menu(&config.menu);
    log::info!(
        "Workspace ready: capacity {}, {} menu routes",
        workspace.capacity(),
        routes.len()
    );

    let session = Session::new(workspace, routes);
    let stdout = io::stdout();
    let summary = match &options.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open session script {}", path.display()))?;
            session.run(BufReader::new(file), stdout.lock())?
        }
        None => session.run(io::stdin().lock(), stdout.lock())?,
    };

    log::info!(
        "Session finished: {} commands, {} errors",
        summary.commands,
        summary.errors
    );
    if summary.errors > 0 {
        std::process::exit(1);
    }
    Ok(())
}
