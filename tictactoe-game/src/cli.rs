//! 命令行参数

use std::path::PathBuf;

use clap::Parser;
use tictactoe_core::Difficulty;

use crate::settings::GameSettings;

/// 井字棋：人类执 X，电脑执 O
#[derive(Parser, Debug, Default, Clone, PartialEq)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against the computer in the terminal", long_about = None)]
#[command(version)]
pub struct CliArgs {
    /// AI difficulty: easy, medium or hard (overrides the settings file)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Settings file to use instead of the default location
    #[arg(long)]
    pub settings: Option<PathBuf>,
}

impl CliArgs {
    /// 把命令行参数叠加到设置上
    pub fn apply(&self, settings: &mut GameSettings) {
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(seed) = self.seed {
            settings.rng_seed = Some(seed);
        }
    }
}
