//! Termfolio 入口
//!
//! 根据命令行参数选择 TUI 或 CLI 模式

use std::env;

use termfolio::runtime::{Mode, detect_mode};
use termfolio::system::app_config::{get_config, init_config};
use termfolio::system::logging::init_logging;
use termfolio::system::panic_handler::{RunMode, install_panic_hook};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_config();

    let args: Vec<String> = env::args().collect();
    match detect_mode(&args) {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            install_panic_hook(RunMode::Tui);
            // Keep the guard alive for the whole session so buffered log
            // lines are flushed on exit.
            let _guard = init_logging(get_config(), RunMode::Tui);

            #[cfg(feature = "cli")]
            let portfolio = <termfolio::cli::Cli as clap::Parser>::parse().portfolio;
            #[cfg(not(feature = "cli"))]
            let portfolio = None;

            if let Err(e) = termfolio::runtime::run_tui(portfolio).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }

        #[cfg(feature = "cli")]
        Mode::Cli => {
            install_panic_hook(RunMode::Cli);
            let _guard = init_logging(get_config(), RunMode::Cli);

            if let Err(e) = termfolio::runtime::run_cli().await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }

        Mode::Unknown => {
            eprintln!("No interface features enabled. Rebuild with --features tui or cli.");
            std::process::exit(1);
        }
    }
}
