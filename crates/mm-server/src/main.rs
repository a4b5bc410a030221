#[tokio::main]
async fn main() {
    if let Err(err) = mm_server::cli::run().await {
        eprintln!("moodmix error: {err:#}");
        std::process::exit(1);
    }
}
