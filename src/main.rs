use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    wishlist_client::run().await
}
