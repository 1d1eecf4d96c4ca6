use clap::Parser;
use rect_area::core::ConfigProvider;
use rect_area::utils::{logger, validation::Validate};
use rect_area::{AreaEngine, CliConfig, ConsoleReporter};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rect-area");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證參數數量，錯誤時只輸出用法訊息
    if let Err(e) = config.validate() {
        tracing::debug!("Argument validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let reporter = ConsoleReporter::stdout(config.output_format());
    let mut engine = AreaEngine::new(config, reporter);

    if let Err(e) = engine.run() {
        tracing::error!(
            "❌ Area calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
