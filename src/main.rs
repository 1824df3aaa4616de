use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match mangacross_feeds_lib::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(error = %error, "mangacross-feeds exited");
            ExitCode::FAILURE
        }
    }
}
