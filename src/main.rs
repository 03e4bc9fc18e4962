use clap::Parser;
use flowcut::io::{parse_network, write_report};
use flowcut::min_flow::{min_cost_flow_with_config, FlowError, MinCostFlowConfig, PotentialInit};
use log::{info, LevelFilter};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "flowcut",
    version,
    about = "Minimum-cost maximum flow from vertex 0 to vertex n-1, with a minimum cut"
)]
struct Cli {
    /// Network file (reads stdin when omitted)
    input: Option<PathBuf>,
    /// Initial potential: auto, zero or bellman-ford
    #[arg(long, default_value_t = PotentialInit::Auto)]
    potential_init: PotentialInit,
    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), FlowError> {
    let input = match &cli.input {
        Some(path) => {
            info!("reading network from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let network = parse_network::<i64>(&input)?;
    info!(
        "network of {} vertices and {} edges",
        network.n_vertices,
        network.edges.len()
    );

    let config = MinCostFlowConfig {
        potential_init: cli.potential_init,
    };
    let report = min_cost_flow_with_config(&network, config)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_report(&mut writer, &network, &report)?;
    writer.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
