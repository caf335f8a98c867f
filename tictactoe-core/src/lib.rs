//! 井字棋共享类型库
//!
//! 包含:
//! - 格子、棋手、棋盘等核心数据结构
//! - 八条获胜连线常量
//! - 对局状态与 AI 难度
//! - 走法及其来源
//! - 错误类型

mod board;
mod constants;
mod error;
mod moves;
mod piece;
mod status;

pub use board::Board;
pub use constants::*;
pub use error::{GameError, Result};
pub use moves::{Move, MoveOrigin};
pub use piece::{Cell, Player};
pub use status::{Difficulty, GameStatus};
