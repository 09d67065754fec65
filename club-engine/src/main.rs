use anyhow::Context;
use club_engine::{AppError, Config, run, setup_environment};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    // 1. 加载配置 (.env, 环境变量, 命令行)
    let config = Config::from_args();

    // 2. 日志
    setup_environment(&config);

    // 3. 回放并输出
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&config, &mut out) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(AppError::Input(e)) => {
            tracing::error!(line_no = e.line_no, kind = %e.kind, "Malformed input");
            // 只输出出错的那一行
            writeln!(out, "{}", e.line)?;
            out.flush()?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).with_context(|| format!("club-engine {}", config.input.display())),
    }
}
