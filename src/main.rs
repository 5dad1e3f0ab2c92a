use quizzy_domain::{
    config::{get_config, init_config, LogFormat},
    dto::quiz_dto::QuizSummary,
    seed::{load_seed, sample_catalog, CatalogSeed},
    services::attempt_service::summarize,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quizzy_domain=info,quizzy=info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn main() -> anyhow::Result<()> {
    init_config()?;
    let config = get_config();
    init_tracing(config.log_format);

    let catalog = match &config.seed_file {
        Some(path) => load_seed(path)?,
        None => {
            info!("No seed file configured, using the built-in sample catalog");
            sample_catalog()
        }
    };

    for summary in catalog.quizzes().map(QuizSummary::from) {
        info!(quiz_id = summary.id, name = %summary.name, questions = summary.total_questions, "quiz loaded");
    }

    for attempt in catalog.attempts() {
        match summarize(&catalog, attempt.id) {
            Ok(summary) => info!(
                attempt_id = summary.attempt_id,
                quiz = %summary.quiz_name,
                answered = summary.answered_questions,
                total = summary.total_questions,
                finished = summary.finished,
                "attempt"
            ),
            Err(e) => warn!(attempt_id = attempt.id, error = %e, "attempt references missing data"),
        }
        if !attempt.is_chronological() {
            warn!(attempt_id = attempt.id, "attempt ends before it starts");
        }
    }

    let snapshot = CatalogSeed::snapshot(&catalog);
    let output = if config.pretty_output {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{}", output);

    Ok(())
}
