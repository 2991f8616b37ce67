mod cli;
mod console;
mod infra;
mod routes;
mod server;

use fiber_bliss::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
