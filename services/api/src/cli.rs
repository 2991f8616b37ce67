use crate::console::{run_careers, run_lookup, run_showcase, CareersArgs, LookupArgs, ShowcaseArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fiber_bliss::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Kwazi's Fiber Bliss",
    about = "Serve or print the Kwazi's Fiber Bliss showcase and careers pages",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the product showcase page
    Showcase(ShowcaseArgs),
    /// Print one view of the careers portal
    Careers(CareersArgs),
    /// Check the status of an application
    Lookup(LookupArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Showcase(args) => run_showcase(args),
        Command::Careers(args) => run_careers(args),
        Command::Lookup(args) => run_lookup(args),
    }
}
