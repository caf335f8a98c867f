//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_CELLS, BOARD_SIDE};
use crate::piece::Cell;

/// 棋盘
///
/// 3x3 共 9 格，索引为 row * 3 + col。
/// 棋盘本身不校验 X/O 数量，轮次交替由对局控制器维护。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// 从 9 个格子构造棋盘
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    /// 获取指定格子，越界返回 None
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// 设置指定格子（越界忽略）
    pub fn set(&mut self, index: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(index) {
            *slot = cell;
        }
    }

    /// 指定格子是否为空（越界视为非空）
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index).is_some_and(|c| c.is_empty())
    }

    /// 所有空格索引（升序）
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// 是否已下满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// 统计某种格子的数量
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// 按行优先顺序的 9 个格子
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// 清空棋盘
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; BOARD_CELLS];
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = chunk.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
