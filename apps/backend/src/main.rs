#[tokio::main]
async fn main() -> anyhow::Result<()> {
    deck_convert_backend::run().await
}
