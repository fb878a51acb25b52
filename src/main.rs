#[tokio::main]
async fn main() {
    tv_auth::run().await;
}
