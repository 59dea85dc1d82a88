use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hashintersect_core::{
    render_json, with_default_extension, ExportOutcome, InputSlots, Outcome, ReportSettings, Session,
    MAX_INPUTS, MIN_INPUTS,
};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "hashintersect", version, about = "Find the hashes common to 2-5 hash list files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 比较 2~5 个哈希列表文件，输出共同值
    Compare {
        /// 输入文件（每行一个哈希；前 2 个必填，最多 5 个）
        #[arg(required = true, num_args = MIN_INPUTS..=MAX_INPUTS, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// 保存共同值；不带路径时使用默认文件名（md5_intersection.txt）
        #[arg(long, short, num_args = 0..=1, value_name = "PATH")]
        output: Option<Option<PathBuf>>,

        /// 标准输出格式
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// 设置文件路径（TOML，[report] 段）
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compare { files, output, format, config } => {
            info!(files = files.len(), "starting comparison");

            let settings = match config {
                Some(path) => ReportSettings::load(&path).context("load settings")?,
                None => ReportSettings::default(),
            };

            let slots = InputSlots::from_paths(files).context("select input files")?;
            let mut session = Session::new(slots, settings);
            for index in 0..MAX_INPUTS {
                if let Some(path) = session.slots.get(index) {
                    info!(slot = %InputSlots::label(index), path = %path.display(), "input selected");
                }
            }

            // 任一文件读取失败即中止，不输出部分结果
            let outcome = match session.compare() {
                Ok(outcome) => outcome,
                Err(e) => {
                    let file = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                    error!(file = %file, error = %e, "comparison aborted");
                    return Err(e).context("comparison failed");
                }
            };

            match format {
                Format::Text => {
                    if let Some(text) = session.text() {
                        println!("{text}");
                    }
                }
                Format::Json => {
                    if let Some(result) = session.result() {
                        println!("{}", render_json(result).context("render json")?);
                    }
                }
            }

            match outcome {
                Outcome::NoCommonValues => info!("no common values found"),
                Outcome::Common(count) => info!(common = count, "common values found"),
            }

            if let Some(output) = output {
                let path = output.unwrap_or_else(|| PathBuf::from(&session.settings().default_output));
                let path = with_default_extension(&path);
                match session.save(&path).context("save result")? {
                    ExportOutcome::Saved { path, lines } => {
                        info!(path = %path.display(), lines, "result saved");
                    }
                    ExportOutcome::NothingToSave => warn!("nothing to save"),
                }
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
