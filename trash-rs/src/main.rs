use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use trash_core::prelude::*;

mod args;
use args::{Cli, Commands};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn confirm_empty() -> io::Result<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "Are you sure you want to empty the trash? [y/N] ")?;
    stdout.flush()?;
    let mut response = String::new();
    io::stdin().lock().read_line(&mut response)?;
    Ok(matches!(response.trim(), "y" | "Y"))
}

fn print_removed(removed: &[String]) {
    for name in removed {
        println!("Deleted {name}");
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = TrashConfig::resolve(cli.trash_dir)?;
    tracing::debug!(root = %config.root.display(), "resolved trash root");
    let manager = TrashManager::new(&config);

    match cli.command {
        Commands::Put {
            paths,
            recursive,
            verbose,
        } => {
            for path in paths {
                let name = manager.put(&path, recursive)?;
                if verbose {
                    println!("Moved {name} to trash");
                }
            }
        }
        Commands::List => {
            for record in manager.list()? {
                println!(
                    "{} {}",
                    trash_core::format_trash_datetime(&record.deletion_date),
                    record.origin_path.display()
                );
            }
        }
        Commands::Restore {
            name,
            overwrite,
            verbose,
        } => {
            let origin = manager.restore(&name, overwrite)?;
            if verbose {
                println!("Restored {} from trash", origin.display());
            }
        }
        Commands::Delete {
            name,
            recursive,
            verbose,
        } => {
            manager.delete(&name, recursive)?;
            if verbose {
                println!("Deleted {name} from trash");
            }
        }
        Commands::Empty { confirm, verbose } => {
            if confirm && !confirm_empty().map_err(|err| TrashError::io("<stdin>", err))? {
                return Ok(0);
            }
            match manager.empty() {
                Ok(removed) => {
                    if verbose {
                        print_removed(&removed);
                    }
                }
                Err(err) => {
                    if verbose {
                        print_removed(err.removed());
                    }
                    return Err(err);
                }
            }
        }
        Commands::Check => {
            let report = manager.check()?;
            for name in &report.orphaned_content {
                println!("orphaned content: {name}");
            }
            for name in &report.orphaned_records {
                println!("orphaned record: {name}");
            }
            for path in &report.malformed_records {
                println!("malformed record: {}", path.display());
            }
            if !report.is_consistent() {
                return Ok(1);
            }
        }
    }
    Ok(0)
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("trash: {err}");
            std::process::exit(1);
        }
    }
}
