//! 走法

use serde::{Deserialize, Serialize};

use crate::constants::{COMPUTER_PLAYER, HUMAN_PLAYER};
use crate::piece::Player;

/// 走法来源（决定轮到哪一方，也供界面区分样式）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOrigin {
    Human,
    Computer,
}

impl MoveOrigin {
    /// 该来源执的棋子
    pub fn player(self) -> Player {
        match self {
            MoveOrigin::Human => HUMAN_PLAYER,
            MoveOrigin::Computer => COMPUTER_PLAYER,
        }
    }
}

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 落子格索引 (0-8)
    pub index: usize,
    /// 落子方
    pub player: Player,
    /// 来源
    pub origin: MoveOrigin,
}

impl Move {
    /// 创建新走法
    pub fn new(index: usize, player: Player, origin: MoveOrigin) -> Self {
        Self {
            index,
            player,
            origin,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_player() {
        assert_eq!(MoveOrigin::Human.player(), Player::X);
        assert_eq!(MoveOrigin::Computer.player(), Player::O);
    }
}
