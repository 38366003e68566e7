//! mysqldump-to-csv 命令行入口
//!
//! 转换在阻塞工作线程上执行，主任务同时等待转换结束和退出信号，先到者决定进程如何结束。

use clap::{CommandFactory, Parser};
use mysqldump_to_csv::{ConvertError, ConvertSummary, ConverterConfig, convert_file};
use mysqldump_to_csv::parser::constants::DEFAULT_MAX_LINE_SIZE;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

/// 收到信号后等待工作线程自行退出的时间
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

/// Convert the INSERT statements of a MySQL dump into CSV on standard output.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// MySQL dump file to convert.
    input: Option<PathBuf>,

    /// Maximum size of one input line in bytes, line terminator included.
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_SIZE)]
    max_line_size: usize,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

/// 工作线程的结束方式
enum Outcome {
    Finished(Result<ConvertSummary, ConvertError>),
    Interrupted(&'static str),
    Crashed(String),
}

fn main() -> ExitCode {
    let args = Args::parse();
    let Some(input) = args.input.clone() else {
        // 缺少输入文件时只打印用法，正常退出
        if let Err(e) = Args::command().print_help() {
            eprintln!("failed to print usage: {e}");
        }
        return ExitCode::SUCCESS;
    };

    init_tracing(args.verbose);

    let config = ConverterConfig::new().with_max_line_size(args.max_line_size);
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "failed to start runtime");
            return ExitCode::FAILURE;
        }
    };

    let cancel = CancellationToken::new();
    let outcome = runtime.block_on(supervise(input, config, cancel));
    runtime.shutdown_timeout(SHUTDOWN_GRACE);

    report(outcome)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

/// 在工作线程上执行转换，并与退出信号竞争
///
/// 信号处理器在工作线程启动前安装，启动之后到达的信号都由这里接管。
async fn supervise(input: PathBuf, config: ConverterConfig, cancel: CancellationToken) -> Outcome {
    let signals = match ShutdownSignals::install() {
        Ok(signals) => Some(signals),
        Err(e) => {
            warn!(error = %e, "failed to install signal handlers");
            None
        }
    };

    let worker_cancel = cancel.clone();
    let mut worker = tokio::task::spawn_blocking(move || {
        debug!(path = %input.display(), "worker started");
        let stdout = io::stdout();
        let output = BufWriter::new(stdout.lock());
        convert_file(&input, output, &config, &worker_cancel)
    });

    tokio::select! {
        signal = wait_for_shutdown_signal(signals) => {
            cancel.cancel();
            Outcome::Interrupted(signal)
        }
        joined = &mut worker => match joined {
            Ok(result) => Outcome::Finished(result),
            Err(e) => Outcome::Crashed(e.to_string()),
        },
    }
}

/// 把结束方式映射为退出码
fn report(outcome: Outcome) -> ExitCode {
    match outcome {
        Outcome::Finished(Ok(summary)) => {
            info!(
                lines = summary.lines_read,
                inserts = summary.insert_lines,
                skipped = summary.skipped_lines,
                rows = summary.rows_written,
                "conversion finished"
            );
            ExitCode::SUCCESS
        }
        Outcome::Finished(Err(e)) if !e.is_fatal() => {
            warn!(error = %e, "conversion stopped early");
            ExitCode::SUCCESS
        }
        Outcome::Finished(Err(e)) => {
            error!(error = %e, "conversion failed");
            ExitCode::FAILURE
        }
        Outcome::Interrupted(signal) => {
            info!(signal, "received shutdown signal, exiting");
            ExitCode::SUCCESS
        }
        Outcome::Crashed(reason) => {
            error!(reason = %reason, "conversion worker panicked");
            ExitCode::FAILURE
        }
    }
}

/// 等待第一个退出信号
///
/// 没有可用的信号处理器时永远等待，转换照常进行。
async fn wait_for_shutdown_signal(signals: Option<ShutdownSignals>) -> &'static str {
    match signals {
        Some(mut signals) => signals.recv().await,
        None => std::future::pending().await,
    }
}

/// SIGHUP、SIGINT、SIGTERM 和 SIGQUIT 的监听器
#[cfg(unix)]
struct ShutdownSignals {
    hangup: tokio::signal::unix::Signal,
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
    quit: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl ShutdownSignals {
    fn install() -> io::Result<Self> {
        use tokio::signal::unix::{SignalKind, signal};

        Ok(Self {
            hangup: signal(SignalKind::hangup())?,
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
            quit: signal(SignalKind::quit())?,
        })
    }

    async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.hangup.recv() => "SIGHUP",
            _ = self.interrupt.recv() => "SIGINT",
            _ = self.terminate.recv() => "SIGTERM",
            _ = self.quit.recv() => "SIGQUIT",
        }
    }
}

/// Ctrl+C 监听器
#[cfg(windows)]
struct ShutdownSignals {
    ctrl_c: tokio::signal::windows::CtrlC,
}

#[cfg(windows)]
impl ShutdownSignals {
    fn install() -> io::Result<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
        })
    }

    async fn recv(&mut self) -> &'static str {
        self.ctrl_c.recv().await;
        "Ctrl+C"
    }
}
