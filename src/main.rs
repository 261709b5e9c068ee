use workforce_docs::api;

#[tokio::main]
async fn main() {
    if let Err(err) = api::run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
