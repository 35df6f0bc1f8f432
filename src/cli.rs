use clap::{Parser, Subcommand};
use paper_summary_common::{ResponseSchema, SummaryViewMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "paper-summary")]
#[command(about = "論文PDFを解析サーバーへ送り、要約を表示する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// PDFを解析サーバーへアップロードして要約を表示
    Analyze {
        /// PDFファイルのパス
        #[arg(required = true)]
        pdf: PathBuf,

        /// 表示モード (full/section/image)
        #[arg(short, long, default_value = "full")]
        mode: SummaryViewMode,

        /// 解析エンドポイント（設定ファイルより優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// レスポンススキーマ (canonical/legacy)
        #[arg(long)]
        schema: Option<ResponseSchema>,

        /// 解析結果をJSONで保存
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 表示モードを対話的に切り替える
        #[arg(short, long)]
        interactive: bool,
    },

    /// 保存した解析結果を表示（通信なし）
    View {
        /// 解析結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 表示モード (full/section/image)
        #[arg(short, long, default_value = "full")]
        mode: SummaryViewMode,

        /// 表示モードを対話的に切り替える
        #[arg(short, long)]
        interactive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 解析エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// レスポンススキーマを設定 (canonical/legacy)
        #[arg(long)]
        set_schema: Option<ResponseSchema>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
