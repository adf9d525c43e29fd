// This is the Lambda bootstrap entry point for the alert function

use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    resource_change_alert::setup_logging();
    run(service_fn(resource_change_alert::worker::handler)).await
}
