use dashboard::debug::{self, DebugConfig};

#[tokio::main]
async fn main() {
    let command = dashboard::cli::parse();

    let guard = match debug::init(&DebugConfig::from_env()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {}", e);
            None
        }
    };

    let code = match dashboard::cli::run(command).await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {}", e);
            if e.is_unauthorized() {
                eprintln!("Session is missing or expired. Run `dashboard login` to sign in.");
                2
            } else {
                1
            }
        }
    };

    // Flush the log writer; process::exit skips destructors.
    drop(guard);
    std::process::exit(code);
}
