use std::io::{self, Write};
use clap::Parser;
use log::LevelFilter;
use steam_inventory_pricer::{InventoryPricer, Prompt};

/// Exports Steam inventories with market prices to CSV files in the working directory.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Log debug messages.
    #[arg(long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level().as_str().to_lowercase(),
                record.args(),
            )
        })
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    init_logger(args.verbose);

    if args.verbose {
        log::debug!("Using verbose logging.");
    }

    let input = Prompt::new(io::stdin().lock(), io::stdout()).collect()?;

    log::debug!("Input ids are {:?}", input.identifiers);

    let pricer = InventoryPricer::builder().build()?;
    let requests = input.requests();
    let filepaths = pricer.run(&requests).await;

    log::info!("Exported {} of {} inventories", filepaths.len(), requests.len());

    Ok(())
}
