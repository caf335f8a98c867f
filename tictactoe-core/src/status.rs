//! 对局状态与 AI 难度

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::piece::Player;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 简单：完全随机落子
    Easy,
    /// 中等：最优解，30% 概率改走随机格
    #[default]
    Medium,
    /// 困难：始终走最优解
    Hard,
}

impl Difficulty {
    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// 所有选项
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// 下一个选项
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty {
                value: s.to_string(),
            }),
        }
    }
}

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// 进行中
    InProgress,
    /// 某方获胜
    Won(Player),
    /// 和棋
    Draw,
}

impl GameStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// 是否已结束（胜或和）
    pub fn is_over(&self) -> bool {
        !self.is_in_progress()
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(GameError::InvalidDifficulty {
                value: "expert".to_string()
            })
        );
    }

    #[test]
    fn test_difficulty_cycle() {
        let mut d = Difficulty::default();
        assert_eq!(d, Difficulty::Medium);
        for _ in 0..Difficulty::all().len() {
            d = d.next();
        }
        assert_eq!(d, Difficulty::Medium);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Hard).unwrap();
        assert_eq!(json, "\"hard\"");
        let decoded: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(decoded, Difficulty::Easy);
    }

    #[test]
    fn test_game_status() {
        assert!(GameStatus::InProgress.is_in_progress());
        assert!(GameStatus::Draw.is_over());
        assert_eq!(GameStatus::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(GameStatus::Draw.winner(), None);
    }
}
