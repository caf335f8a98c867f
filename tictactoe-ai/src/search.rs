//! 搜索引擎
//!
//! 实现 Minimax 完全搜索（3x3 棋盘无需深度限制）以及按难度的走法选择

use rand::Rng;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, Cell, Player, BOARD_CELLS, COMPUTER_PLAYER, MEDIUM_RANDOM_MOVE_CHANCE};
use tracing::debug;

use crate::evaluate::Evaluator;

// 重导出 Difficulty 以便外部使用
pub use tictactoe_core::Difficulty;

/// O 必胜
pub const SCORE_O_WINS: i32 = 1;
/// X 必胜
pub const SCORE_X_WINS: i32 = -1;
/// 双方最优下必和
pub const SCORE_DRAW: i32 = 0;

/// AI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 是否运行 Minimax；为 false 时完全随机落子
    pub use_search: bool,
    /// 每回合放弃最优解、改走随机空格的概率
    ///
    /// 仅在 use_search 时读取；不搜索时本来就随机落子，置 0。
    pub random_move_chance: f64,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                use_search: false,
                random_move_chance: 0.0,
            },
            Difficulty::Medium => Self {
                difficulty,
                use_search: true,
                random_move_chance: MEDIUM_RANDOM_MOVE_CHANCE,
            },
            Difficulty::Hard => Self {
                difficulty,
                use_search: true,
                random_move_chance: 0.0,
            },
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// AI 引擎
///
/// 电脑执 O，是搜索中的极大方；人类执 X，是极小方。
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 按难度选择电脑走法
    ///
    /// 只有棋盘没有空格时返回 None。调用方应保证只在未终局时调用。
    pub fn select_move<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) -> Option<usize> {
        self.nodes_searched = 0;

        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        if !self.config.use_search {
            let index = Self::random_cell(&empty, rng);
            debug!("AI 随机落子: {} (难度: {:?})", index, self.config.difficulty);
            return Some(index);
        }

        let (best_index, best_score) = self.best_move(board)?;

        // 每回合只掷一次硬币，与搜索结果无关
        let chance = self.config.random_move_chance;
        if chance > 0.0 && rng.gen_bool(chance.min(1.0)) {
            let index = Self::random_cell(&empty, rng);
            debug!(
                "AI 放弃最优解 {} (分值 {})，改走随机格 {}",
                best_index, best_score, index
            );
            return Some(index);
        }

        debug!(
            "AI 最优走法: {} (分值 {}, 搜索节点 {})",
            best_index, best_score, self.nodes_searched
        );
        Some(best_index)
    }

    /// 最优走法及其分值，同分取索引最小者
    pub fn best_move(&mut self, board: &Board) -> Option<(usize, i32)> {
        let mut best: Option<(usize, i32)> = None;
        for (index, score) in self.evaluate_moves(board) {
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }
        best
    }

    /// 评估电脑在每个空格落子后的分值（按格子索引升序）
    pub fn evaluate_moves(&mut self, board: &Board) -> Vec<(usize, i32)> {
        self.nodes_searched = 0;

        let mut scratch = board.clone();
        let mut scored = Vec::with_capacity(BOARD_CELLS);

        for index in board.empty_cells() {
            scratch.set(index, COMPUTER_PLAYER.cell());
            let score = self.minimax(&mut scratch, false);
            scratch.set(index, Cell::Empty);
            scored.push((index, score));
        }

        scored
    }

    /// Minimax 搜索
    ///
    /// 原地落子、递归、撤销；返回时棋盘与传入时完全一致。
    /// maximizing 为 true 时轮到 O 走。
    pub fn minimax(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.nodes_searched += 1;

        match Evaluator::check_winner(board) {
            Some(Player::O) => return SCORE_O_WINS,
            Some(Player::X) => return SCORE_X_WINS,
            None => {}
        }
        // 已确认无人获胜，下满即和棋
        if board.is_full() {
            return SCORE_DRAW;
        }

        let mover = if maximizing { Player::O } else { Player::X };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in 0..BOARD_CELLS {
            if !board.is_empty_at(index) {
                continue;
            }

            board.set(index, mover.cell());
            let score = self.minimax(board, !maximizing);
            board.set(index, Cell::Empty);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// 获取搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    fn random_cell<R: Rng + ?Sized>(empty: &[usize], rng: &mut R) -> usize {
        empty[rng.gen_range(0..empty.len())]
    }
}
