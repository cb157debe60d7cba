#[tokio::main]
async fn main() {
    daily_poll::start_server().await;
}
