use clap::Parser;
use workman_gh::adapters::{AnyDirectory, ConsoleDialer};
use workman_gh::app::commands::App;
use workman_gh::domain::ports::ConfigProvider;
use workman_gh::utils::error::{DirectoryError, ErrorSeverity};
use workman_gh::utils::{logger, validation::Validate};
use workman_gh::{CliConfig, DirectoryService};

fn exit_code(e: &DirectoryError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: DirectoryError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // settings decide the log format, so they are read before the logger exists
    let settings = cli.load_settings();
    let json_logs = settings.as_ref().map(|s| s.logging.json).unwrap_or(false);
    if json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);
    if let Some(path) = &cli.config {
        tracing::debug!("Configuration read from {}", path);
    }

    let settings = settings.unwrap_or_else(|e| fail(e));
    if let Err(e) = cli.validate() {
        fail(e);
    }

    let directory = AnyDirectory::open(settings.data_file()).unwrap_or_else(|e| fail(e));
    let service = DirectoryService::new(directory, settings.fallback_location());
    let app = App::new(service, ConsoleDialer, settings.min_phone_digits(), cli.format);

    match app.run(&cli.command).await {
        Ok(output) => print!("{}", output),
        Err(e) => fail(e),
    }
}
