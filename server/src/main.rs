#[tokio::main]
async fn main() {
    glossario_server::start_server().await;
}
