//! 对局控制
//!
//! 状态机：InProgress(当前方) → Won(胜方) / Draw，终局后只能 reset。
//! 轮次交替只在这里维护，棋盘本身不做校验。

use rand::Rng;
use tictactoe_ai::{AiEngine, Evaluator};
use tictactoe_core::{
    Board, Cell, Difficulty, GameError, GameStatus, Move, MoveOrigin, Player, Result,
    WinningLine, BOARD_CELLS, COMPUTER_PLAYER,
};
use tracing::{debug, info, warn};

/// 对局状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    /// 已接受的走法（仅本局，不持久化）
    history: Vec<Move>,
}

impl GameState {
    /// 新对局：空棋盘，X 先走
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// 从已有局面创建
    ///
    /// X 与 O 数量相等时轮到 X，否则轮到 O；状态由判定器推出。
    pub fn from_board(board: Board) -> Self {
        let current_player = if board.count(Cell::X) > board.count(Cell::O) {
            Player::O
        } else {
            Player::X
        };
        let status = Evaluator::status(&board);
        Self {
            board,
            current_player,
            status,
            history: Vec::new(),
        }
    }

    /// 回到初始状态
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("对局已重置");
    }

    /// 落子（规则校验）
    ///
    /// 来源必须与当前方一致：人类执 X，电脑执 O。
    /// 成功时返回新的对局状态，失败时状态不变。
    pub fn try_apply_move(&mut self, index: usize, origin: MoveOrigin) -> Result<GameStatus> {
        if !self.status.is_in_progress() {
            return Err(GameError::GameOver);
        }
        if origin.player() != self.current_player {
            return Err(GameError::NotYourTurn);
        }
        match self.board.get(index) {
            None => return Err(GameError::InvalidIndex { index }),
            Some(cell) if !cell.is_empty() => return Err(GameError::CellOccupied { index }),
            Some(_) => {}
        }

        let player = self.current_player;
        self.board.set(index, player.cell());
        self.history.push(Move::new(index, player, origin));

        self.status = Evaluator::status(&self.board);
        match self.status {
            GameStatus::InProgress => self.current_player = player.opponent(),
            GameStatus::Won(winner) => info!("游戏结束: {} 获胜", winner),
            GameStatus::Draw => info!("游戏结束: 和棋"),
        }

        Ok(self.status)
    }

    /// 落子，非法走法静默忽略
    ///
    /// 返回是否被接受。
    pub fn apply_move(&mut self, index: usize, origin: MoveOrigin) -> bool {
        match self.try_apply_move(index, origin) {
            Ok(_) => true,
            Err(e) => {
                debug!("忽略走法 {}: {}", index, e);
                false
            }
        }
    }

    /// 人类落子；只在轮到人类时接受
    pub fn apply_human_move(&mut self, index: usize) -> bool {
        self.apply_move(index, MoveOrigin::Human)
    }

    /// 电脑走一步
    ///
    /// 只应在对局进行中且轮到电脑时调用；否则记录警告并返回 None，状态不变。
    pub fn computer_turn<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Option<usize> {
        if !self.is_computer_turn() {
            warn!(
                "非电脑回合调用 computer_turn (状态: {:?}, 当前方: {})",
                self.status, self.current_player
            );
            return None;
        }

        let mut engine = AiEngine::from_difficulty(difficulty);
        let Some(index) = engine.select_move(&self.board, rng) else {
            warn!("AI 无可用走法: {}", GameError::NoAvailableMove);
            return None;
        };

        debug!("电脑落子: {} (难度: {:?})", index, difficulty);
        self.apply_move(index, MoveOrigin::Computer).then_some(index)
    }

    /// 是否需要电脑走棋
    pub fn is_computer_turn(&self) -> bool {
        self.status.is_in_progress() && self.current_player == COMPUTER_PLAYER
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 按行优先顺序的 9 个格子（供界面渲染）
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        self.board.cells()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// 某格落子的来源（界面据此区分样式）
    pub fn origin_at(&self, index: usize) -> Option<MoveOrigin> {
        self.history
            .iter()
            .find(|mv| mv.index == index)
            .map(|mv| mv.origin)
    }

    /// 获胜连线（用于高亮）
    pub fn winning_line(&self) -> Option<WinningLine> {
        Evaluator::winning_line(&self.board)
    }

    /// 状态提示文字
    pub fn message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.current_player),
            GameStatus::Won(winner) => format!("Player {} wins!", winner),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
