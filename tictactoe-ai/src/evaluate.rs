//! 棋局判定

use tictactoe_core::{Board, Cell, GameStatus, Player, WinningLine, WINNING_LINES};

/// 判定器
///
/// 全部为纯函数，对任意 9 格棋盘都有定义（包括搜索中出现的不可达局面）。
pub struct Evaluator;

impl Evaluator {
    /// 按固定顺序返回第一条被同一方占满的连线
    pub fn winning_line(board: &Board) -> Option<WinningLine> {
        let cells = board.cells();
        WINNING_LINES.iter().copied().find(|&[a, b, c]| {
            cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
        })
    }

    /// 获胜方
    pub fn check_winner(board: &Board) -> Option<Player> {
        Self::winning_line(board).and_then(|[a, _, _]| board.cells()[a].player())
    }

    /// 下满且无人获胜
    pub fn is_draw(board: &Board) -> bool {
        board.is_full() && Self::check_winner(board).is_none()
    }

    /// 是否终局
    pub fn is_terminal(board: &Board) -> bool {
        Self::check_winner(board).is_some() || Self::is_draw(board)
    }

    /// 由棋盘推出对局状态
    pub fn status(board: &Board) -> GameStatus {
        if let Some(winner) = Self::check_winner(board) {
            GameStatus::Won(winner)
        } else if Self::is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}
