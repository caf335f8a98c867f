//! 错误类型定义

use thiserror::Error;

/// 对局规则错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// 格子索引越界
    #[error("Invalid cell index: {index}")]
    InvalidIndex { index: usize },

    /// 格子已被占据
    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 不是该方的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 没有空格可走
    #[error("No available move")]
    NoAvailableMove,

    /// 无法识别的难度
    #[error("Invalid difficulty: {value}")]
    InvalidDifficulty { value: String },
}

/// 对局操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
