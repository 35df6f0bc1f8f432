use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use paper_summary::{backend, cli, config, error, logging, notifier, render};
use paper_summary_common::{submit, AnalysisResult, PreviewUrl, Session, UploadFile, UploadOutcome};
use backend::{HttpBackend, LocalPdf};
use cli::{Cli, Commands};
use config::Config;
use error::{PaperSummaryError, Result};
use notifier::TerminalNotifier;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let notifier = TerminalNotifier;

    match cli.command {
        Commands::Analyze { pdf, mode, endpoint, schema, output, interactive } => {
            println!("📑 paper-summary - 論文解析\n");

            let mut config = Config::load()?;
            config.apply_overrides(endpoint, schema.map(|s| s.to_string()))?;

            let file = LocalPdf::open(&pdf)?;
            let backend = HttpBackend::new(&config)?;
            let mut session = Session::new(config.client.schema);

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(format!("{} を解析中... ({})", file.name(), backend.endpoint()));
            spinner.enable_steady_tick(Duration::from_millis(100));

            let outcome = submit(&mut session, &backend, &file, &notifier, |file| {
                Some(PreviewUrl::unmanaged(file.path().display().to_string()))
            })
            .await;
            spinner.finish_and_clear();

            match outcome? {
                UploadOutcome::Ready => {}
                UploadOutcome::Failed(e) => return Err(e.into()),
                UploadOutcome::Stale => return Err(PaperSummaryError::Cancelled),
            }

            let result = session
                .result()
                .ok_or(PaperSummaryError::Cancelled)?;

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(result)?;
                std::fs::write(&output, json)?;
                println!("✔ 結果を保存: {}\n", output.display());
            }

            if interactive {
                render::browse(result, mode, &notifier)?;
            } else {
                render::print_result(result, mode);
            }
        }

        Commands::View { input, mode, interactive } => {
            let content = std::fs::read_to_string(&input)
                .map_err(|_| PaperSummaryError::FileNotFound(input.display().to_string()))?;
            let result: AnalysisResult = serde_json::from_str(&content)?;

            if interactive {
                render::browse(&result, mode, &notifier)?;
            } else {
                render::print_result(&result, mode);
            }
        }

        Commands::Config { set_endpoint, set_schema, show } => {
            let mut config = Config::load_or_default(&Config::config_path()?);

            if let Some(schema) = set_schema {
                config.set_schema(schema)?;
                println!("✔ スキーマを設定しました: {}", schema);
            }

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.client.endpoint);
                println!("  スキーマ: {}", config.client.schema);
                println!("  フィールド名: {}", config.client.field_name);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
