//! 井字棋对局
//!
//! 包含:
//! - 对局控制（状态机、人机轮换）
//! - 游戏设置
//! - 命令行参数
//! - 终端前端

pub mod cli;
pub mod game;
pub mod settings;
pub mod terminal;

pub use cli::CliArgs;
pub use game::GameState;
pub use settings::{GameSettings, LogLevel};
pub use terminal::{run, Command};
