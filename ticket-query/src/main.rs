use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticket_query::query::{QueryError, TrainQuery};
use ticket_query::stations::{StationCache, StationDirectory};
use ticket_query::table;
use ticket_query::tickets::{TicketClient, TicketClientConfig, TrainFilter};

/// Query left tickets between two stations.
#[derive(Parser)]
#[command(name = "ticket-query", version)]
struct Args {
    /// Departure station name, e.g. 北京
    from: String,

    /// Arrival station name, e.g. 上海
    to: String,

    /// Travel date: 6-26, 0626, 2016-06-26, 20160626 ...
    date: String,

    /// Only show trains whose number starts with one of these letters,
    /// e.g. "gd" for high-speed and EMU trains
    #[arg(short = 't', long = "train-types")]
    train_types: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), QueryError> {
    let directory = StationDirectory::load(&StationCache::from_env());
    let client = TicketClient::new(TicketClientConfig::default())?;
    let query = TrainQuery::new(directory, client);

    let filter = args
        .train_types
        .as_deref()
        .map(TrainFilter::from_letters)
        .unwrap_or_default();

    let collection = query
        .execute(&args.from, &args.to, &args.date, filter)
        .await?;

    print!("{}", table::render(&collection));
    Ok(())
}
