//! 格子与棋手

use serde::{Deserialize, Serialize};

/// 棋手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 先手
    X,
    /// 后手
    O,
}

impl Player {
    /// 获取对方
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// 该棋手落子后格子的取值
    pub fn cell(&self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// 显示符号
    pub fn symbol(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 格子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// 占据该格的棋手
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    /// 显示符号（空格用 '.'）
    pub fn symbol(&self) -> char {
        self.player().map_or('.', |p| p.symbol())
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_cell_player_mapping() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::from(Player::X).player(), Some(Player::X));
        assert_eq!(Player::O.cell(), Cell::O);
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Cell::Empty.symbol(), '.');
        assert_eq!(Cell::X.symbol(), 'X');
        assert_eq!(Player::O.to_string(), "O");
    }
}
