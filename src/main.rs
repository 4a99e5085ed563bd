#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod all_pairs;
mod single_source;
mod traverse;
mod util;

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }

    links {
        WeightGraph(weightgraph::Error, weightgraph::ErrorKind);
        EdgeList(weightgraph::io::edge_list::Error, weightgraph::io::edge_list::ErrorKind);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }
    }
}

#[derive(Parser)]
#[clap(name = "Shortest Paths", version = env!("CARGO_PKG_VERSION"))]
struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Parser)]
enum Command {
    #[clap(
        about = "Computes the distances from a source vertex with Dijkstra's algorithm. All weights must be non-negative."
    )]
    Dijkstra(single_source::SingleSourceCommand),
    #[clap(
        about = "Computes the distances from a source vertex with the Bellman-Ford algorithm, failing if a negative cycle is reachable."
    )]
    BellmanFord(single_source::SingleSourceCommand),
    #[clap(
        about = "Computes the distances between all pairs of vertices with the Floyd-Warshall algorithm. Edges are directed."
    )]
    FloydWarshall(all_pairs::FloydWarshallCommand),
    /// Prints the vertices reachable from a start vertex in depth or breadth first order.
    Traverse(traverse::TraverseCommand),
}

// The main is unpacked from an error-chain macro.
// Using just the macro makes IntelliJ complain that there would be no main.
// The real main (programmed manually) is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    info!("Logging initialised successfully");
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level);

    match &options.subcommand {
        Command::Dijkstra(subcommand) => single_source::dijkstra(options, subcommand),
        Command::BellmanFord(subcommand) => single_source::bellman_ford(options, subcommand),
        Command::FloydWarshall(subcommand) => all_pairs::floyd_warshall(options, subcommand),
        Command::Traverse(subcommand) => traverse::traverse(options, subcommand),
    }?;

    info!("Done");
    Ok(())
}
