mod cli;
mod infra;
mod routes;
mod server;

use abhivorn_site::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
