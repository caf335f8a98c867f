//! 常量定义

use crate::piece::Player;

/// 棋盘边长
pub const BOARD_SIDE: usize = 3;

/// 格子总数
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// 一条获胜连线（三个格子索引）
pub type WinningLine = [usize; 3];

/// 全部获胜连线，顺序固定：三行、三列、两条对角线
pub const WINNING_LINES: [WinningLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 人类玩家执 X，先手
pub const HUMAN_PLAYER: Player = Player::X;

/// 电脑执 O，后手（搜索中的极大方）
pub const COMPUTER_PLAYER: Player = Player::O;

/// 中等难度下每回合改走随机格的概率
pub const MEDIUM_RANDOM_MOVE_CHANCE: f64 = 0.3;
