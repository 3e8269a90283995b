#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = signlearn_quiz_lib::run().await {
        log::error!("Error running quiz service: {:#}", e);
        std::process::exit(1);
    }
}
