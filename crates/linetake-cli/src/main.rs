use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linetake_core::{count_lines, read_input, run_plan_file, take_and_write, Direction, TakeOptions, TakeStats, TakeStep};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "linetake", version, about = "Split lines off the front or back of a text file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 从文件开头取 N 行
    Head {
        /// 输入文件（UTF-8 文本）
        #[arg(long)]
        input: PathBuf,

        /// 取出的行数（正整数）
        #[arg(long)]
        count: NonZeroUsize,

        /// 输出文件（JSON）；缺省写到标准输出
        #[arg(long)]
        output: Option<PathBuf>,

        /// 最大输入文件大小（单位字节）
        #[arg(long)]
        max_input_size: Option<u64>,
    },
    /// 从文件末尾取 N 行
    Tail {
        /// 输入文件（UTF-8 文本）
        #[arg(long)]
        input: PathBuf,

        /// 取出的行数（正整数）
        #[arg(long)]
        count: NonZeroUsize,

        /// 输出文件（JSON）；缺省写到标准输出
        #[arg(long)]
        output: Option<PathBuf>,

        /// 最大输入文件大小（单位字节）
        #[arg(long)]
        max_input_size: Option<u64>,
    },
    /// 按计划文件依次取行
    Run {
        /// 输入文件（UTF-8 文本）
        #[arg(long)]
        input: PathBuf,

        /// 计划文件路径（TOML），默认 ./plan.toml
        #[arg(long)]
        plan: Option<PathBuf>,

        /// 输出文件（JSON）；缺省写到标准输出
        #[arg(long)]
        output: Option<PathBuf>,

        /// 最大输入文件大小（单位字节，例如 5242880 代表 5MB）
        #[arg(long)]
        max_input_size: Option<u64>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    let stats = match cli.command {
        Commands::Head { input, count, output, max_input_size } => {
            let opts = TakeOptions { max_input_size, ..TakeOptions::default() };
            single_take(&input, Direction::Front, count, output.as_deref(), &opts)?
        }
        Commands::Tail { input, count, output, max_input_size } => {
            let opts = TakeOptions { max_input_size, ..TakeOptions::default() };
            single_take(&input, Direction::Back, count, output.as_deref(), &opts)?
        }
        Commands::Run { input, plan, output, max_input_size } => {
            info!(?input, ?plan, ?output, "starting plan");
            let opts = TakeOptions { max_input_size, plan_path: plan };
            let mut out = open_output(output.as_deref())?;
            let stats = run_plan_file(&input, &mut out, &opts).context("run plan failed")?;
            out.flush().context("flush output")?;
            stats
        }
    };

    info!(
        steps_applied = stats.steps_applied,
        lines_taken = stats.lines_taken,
        bytes_taken = stats.bytes_taken,
        remainder_bytes = stats.remainder_bytes,
        "take finished"
    );
    Ok(())
}

/// head / tail：单步计划
fn single_take(
    input: &Path,
    direction: Direction,
    count: NonZeroUsize,
    output: Option<&Path>,
    opts: &TakeOptions,
) -> Result<TakeStats> {
    let text = read_input(input, opts)?;
    info!(?input, ?direction, count = count.get(), total_lines = count_lines(&text), "starting take");

    let mut out = open_output(output)?;
    let steps = [TakeStep::new(direction, count)];
    let stats = take_and_write(&text, &steps, &mut out).context("take failed")?;
    out.flush().context("flush output")?;
    Ok(stats)
}

/// 以缓冲方式打开输出目标：文件或标准输出
fn open_output(output: Option<&Path>) -> Result<BufWriter<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("create output file {}", path.display()))?),
        None => Box::new(std::io::stdout()),
    };
    Ok(BufWriter::new(sink))
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，避免与标准输出上的 JSON 混在一起
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
