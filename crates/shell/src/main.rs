//! CLI for the graph algorithms.

mod commands;
mod report;
mod utils;

use std::path::PathBuf;

use clap::Parser;

use commands::Commands;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The random seed to use.
    #[arg(short('s'), long, default_value = "42")]
    seed: Option<u64>,

    /// Ignore `--seed` and draw randomness from the operating system.
    #[arg(long, default_value_t = false)]
    unseeded: bool,

    /// The name of the log file, written under `logs/`.
    #[arg(long, default_value = "graphs")]
    log: String,

    /// The path at which to write the report.
    #[arg(short('o'), long)]
    out: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

impl Args {
    /// The seed to pass to the algorithms, if any.
    const fn seed(&self) -> Option<u64> {
        if self.unseeded {
            None
        } else {
            self.seed
        }
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    println!("Args: {args:?}");

    // The guard must stay in scope for the logs to be flushed.
    let (_guard, log_path) = utils::configure_logger(&args.log)?;
    println!("Log file: {log_path:?}");
    ftlog::info!("{args:?}");

    let seed = args.seed();
    let report = args.command.run(seed)?;
    println!("{report}");
    ftlog::info!("{report}");

    if let Some(out) = args.out {
        report.write_to(&out)?;
        println!("Report written to {out:?}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;

    #[test]
    fn seeds() -> Result<(), String> {
        let args = Args::try_parse_from(["graphs", "min-cut", "-i", "cut.txt"]).map_err(|e| e.to_string())?;
        assert_eq!(args.seed(), Some(42));

        let args = Args::try_parse_from(["graphs", "-s", "7", "min-cut", "-i", "cut.txt"]).map_err(|e| e.to_string())?;
        assert_eq!(args.seed(), Some(7));

        let args = Args::try_parse_from(["graphs", "--unseeded", "min-cut", "-i", "cut.txt"]).map_err(|e| e.to_string())?;
        assert_eq!(args.seed(), None);
        Ok(())
    }
}
