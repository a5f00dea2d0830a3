#[tokio::main]
async fn main() -> anyhow::Result<()> {
    seometa_server::start().await
}
