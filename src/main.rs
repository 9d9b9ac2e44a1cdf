use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(err) = acme_invoicing::run().await {
        error!("Invoicing backend exited with error: {}", err);
        std::process::exit(1);
    }
}
