use clap::Parser;
use composition_function::lifecycle::{serve, setup_tracing, Args, FunctionSystem};
use tokio::io::{AsyncBufRead, BufReader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    setup_tracing(args.debug);

    let config = args.config();
    info!(ttl = ?config.ttl, buffer_size = config.buffer_size, "Starting composition function");

    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match &args.input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|e| format!("cannot open {}: {e}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    let system = FunctionSystem::new(&config);

    let served = serve(&system.client, reader, tokio::io::stdout()).await;
    match &served {
        Ok(stats) => info!(answered = stats.answered, skipped = stats.skipped, "Input exhausted"),
        Err(e) => error!(error = %e, "Serving stopped"),
    }

    system.shutdown().await?;
    served.map(|_| ()).map_err(|e| e.to_string())
}
