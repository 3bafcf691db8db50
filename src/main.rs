use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(error) = shop_catalog::run().await {
        error!("shop-catalog exited with error: {:#}", error);
        std::process::exit(1);
    }
}
