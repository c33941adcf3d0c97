use appcast_gen::{commands::generate, error::exit_code};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// appcast-gen - Sparkle appcast generator
///
/// Builds a Sparkle appcast from the GitHub Releases of the repository named
/// by GITHUB_REPOSITORY (owner/repo). Each release contributes its .zip, .dmg
/// or .pkg asset, preferred in that order.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for authentication.
/// GITHUB_API_URL and GITHUB_SERVER_URL select a GitHub Enterprise instance.
///
/// Exit codes: 2 GITHUB_REPOSITORY missing or not in owner/repo form (it is
/// rejected before any request is made), 3 fetching releases failed,
/// 4 invalid JSON response.
///
/// Examples:
///   appcast-gen --output docs/appcast.xml
#[derive(Parser, Debug)]
#[command(author, version = env!("APPCAST_GEN_VERSION"), about)]
struct Cli {
    /// Path of the appcast file to write
    #[arg(long, value_name = "PATH")]
    output: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = appcast_gen::runtime::RealRuntime;

    match generate(runtime, &cli.output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}
