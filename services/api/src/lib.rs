mod cli;
mod infra;
mod quote;
mod routes;
mod server;

use wedding_booking::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
