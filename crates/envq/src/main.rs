//! `envq` -- inspect `.env`-style configuration files from the shell.
//!
//! Parses CLI arguments with clap, loads the env file once, and dispatches
//! to a command handler.

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("envq=debug,envmap=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let Some(command) = cli.command else {
        // No subcommand -- print help
        use clap::CommandFactory;
        Cli::command().print_help().ok();
        println!();
        return;
    };

    let result = commands::open(&cli.global).and_then(|env| match command {
        Commands::Get(args) => commands::run_get(&env, &args.key, cli.global.json),
        Commands::Keys => commands::run_keys(&env, cli.global.json),
        Commands::Check => commands::run_check(&env, cli.global.json),
        Commands::Path => commands::run_path(&env, cli.global.json),
    });

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
