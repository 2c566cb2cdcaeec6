use clap::Parser;
use poem2anki::utils::{logger, validation::Validate};
use poem2anki::{
    CardEngine, CardSink, CliConfig, DeckPipeline, FileSink, FileSource, LineSource, StdinSource,
    StdoutSink,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting poem2anki");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let source: Box<dyn LineSource> = match &config.input {
        Some(path) => Box::new(FileSource::new(path.clone())),
        None => Box::new(StdinSource),
    };
    let sink: Box<dyn CardSink> = match &config.output {
        Some(path) => Box::new(FileSink::new(path.clone())),
        None => Box::new(StdoutSink),
    };

    let pipeline = DeckPipeline::new(source, sink, config);
    let engine = CardEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Wrote {} cards to {}",
                summary.card_count,
                summary.destination
            );
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
