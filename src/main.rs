use clap::Parser;
use quizmaster::{Args, Config, QuizError};

#[tokio::main]
async fn main() {
    let config = Config::from(Args::parse());

    if let Err(e) = try_main(&config).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

async fn try_main(config: &Config) -> Result<(), QuizError> {
    quizmaster::logging::init(&config.log_file, &config.log_level)?;

    let result = quizmaster::run(config).await?;
    if config.print_result {
        if let Some(result) = result {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}
