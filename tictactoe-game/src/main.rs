use std::io;

use anyhow::Result;
use clap::Parser;
use tictactoe_game::{run, CliArgs, GameSettings};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let stored = match &args.settings {
        Some(path) => GameSettings::load_from(path)?,
        None => GameSettings::load(),
    };
    let mut settings = stored.clone();
    args.apply(&mut settings);
    let initial_difficulty = settings.difficulty;

    // 初始化日志（RUST_LOG 优先），输出到 stderr 以免打乱棋盘
    let level = settings.log_level.as_str();
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(format!(
            "warn,tictactoe={level},tictactoe_game={level},tictactoe_ai={level}"
        ))
    })?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    info!("井字棋启动，难度: {:?}", settings.difficulty);

    let mut rng = settings.rng();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let game = run(stdin.lock(), &mut stdout, &mut settings, &mut rng)?;

    // 只保存对局中切换的难度，命令行覆盖项不写回
    if settings.difficulty != initial_difficulty {
        let updated = GameSettings {
            difficulty: settings.difficulty,
            ..stored
        };
        let saved = match &args.settings {
            Some(path) => updated.save_to(path),
            None => updated.save(),
        };
        if let Err(e) = saved {
            warn!("保存设置失败: {:#}", e);
        }
    }

    info!("退出，最终状态: {:?}", game.status());
    Ok(())
}
