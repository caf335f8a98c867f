//! 井字棋 AI 引擎
//!
//! 包含:
//! - 胜负/和棋判定
//! - Minimax 完全搜索
//! - 按难度选择走法（可注入随机源）

mod evaluate;
mod search;

pub use evaluate::Evaluator;
pub use search::{AiConfig, AiEngine, Difficulty, SCORE_DRAW, SCORE_O_WINS, SCORE_X_WINS};
