//! 终端前端
//!
//! 从输入读取命令、渲染棋盘，并在人类落子后等待设定的停顿再让电脑走棋。

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use tictactoe_core::{Cell, Difficulty, MoveOrigin, BOARD_SIDE};
use tracing::info;

use crate::game::GameState;
use crate::settings::GameSettings;

const HELP: &str = "Commands: 1-9 play a cell, r reset, d change difficulty, q quit";

/// 终端命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 落子，格子索引 0-8
    Play(usize),
    Reset,
    CycleDifficulty,
    Quit,
}

impl Command {
    /// 解析一行输入；格子编号从 1 开始
    pub fn parse(line: &str) -> Option<Command> {
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" => Some(Command::Quit),
            "r" | "reset" => Some(Command::Reset),
            "d" | "difficulty" => Some(Command::CycleDifficulty),
            other => match other.parse::<usize>() {
                Ok(n @ 1..=9) => Some(Command::Play(n - 1)),
                _ => None,
            },
        }
    }
}

/// 运行一局（或多局，直到 quit / 输入结束）
///
/// 对局中切换的难度写回 settings.difficulty，返回退出时的对局状态。
pub fn run<I, O, R>(
    input: I,
    output: &mut O,
    settings: &mut GameSettings,
    rng: &mut R,
) -> Result<GameState>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    let mut game = GameState::new();

    writeln!(output, "{}", HELP)?;
    render(output, &game, settings.difficulty)?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => game.reset(),
            Some(Command::CycleDifficulty) => {
                settings.difficulty = settings.difficulty.next();
                info!("难度切换为 {:?}", settings.difficulty);
            }
            Some(Command::Play(index)) => {
                if !game.apply_human_move(index) {
                    writeln!(output, "Illegal move")?;
                } else if game.is_computer_turn() {
                    // 停顿由界面层负责，核心逻辑本身是同步的
                    if settings.ai_delay_ms > 0 {
                        thread::sleep(Duration::from_millis(settings.ai_delay_ms));
                    }
                    game.computer_turn(settings.difficulty, rng);
                }
            }
            None => writeln!(output, "{}", HELP)?,
        }
        render(output, &game, settings.difficulty)?;
    }

    Ok(game)
}

/// 渲染棋盘与状态行
///
/// 空格显示编号，电脑的落子用小写 o 区分；终局有连线时额外列出连线的格子编号。
fn render<O: Write>(output: &mut O, game: &GameState, difficulty: Difficulty) -> Result<()> {
    writeln!(output)?;
    for (row, cells) in game.cells().chunks(BOARD_SIDE).enumerate() {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let index = row * BOARD_SIDE + col;
                match cell {
                    Cell::Empty => (index + 1).to_string(),
                    _ if game.origin_at(index) == Some(MoveOrigin::Computer) => {
                        cell.symbol().to_ascii_lowercase().to_string()
                    }
                    _ => cell.symbol().to_string(),
                }
            })
            .collect();
        if row > 0 {
            writeln!(output, "---+---+---")?;
        }
        writeln!(output, " {} ", line.join(" | "))?;
    }
    writeln!(output, "[{}] {}", difficulty, game.message())?;
    if let Some(line) = game.winning_line() {
        let cells: Vec<String> = line.iter().map(|index| (index + 1).to_string()).collect();
        writeln!(output, "Winning line: {}", cells.join("-"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tictactoe_core::{GameStatus, Player};

    fn hard_settings() -> GameSettings {
        GameSettings {
            difficulty: Difficulty::Hard,
            ai_delay_ms: 0,
            ..Default::default()
        }
    }

    fn play(script: &str, settings: &mut GameSettings) -> (GameState, String) {
        let mut output = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let game = run(script.as_bytes(), &mut output, settings, &mut rng).unwrap();
        (game, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("1"), Some(Command::Play(0)));
        assert_eq!(Command::parse(" 9 "), Some(Command::Play(8)));
        assert_eq!(Command::parse("Q"), Some(Command::Quit));
        assert_eq!(Command::parse("r"), Some(Command::Reset));
        assert_eq!(Command::parse("d"), Some(Command::CycleDifficulty));
        assert_eq!(Command::parse("0"), None);
        assert_eq!(Command::parse("10"), None);
        assert_eq!(Command::parse("x"), None);
    }

    #[test]
    fn test_human_move_gets_computer_reply() {
        let (game, output) = play("1\nq\n", &mut hard_settings());

        assert_eq!(game.cells()[0], Cell::X);
        assert_eq!(game.cells()[4], Cell::O);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(output.contains(" X | 2 | 3 "));
        assert!(output.contains(" 4 | o | 6 "));
        assert!(output.contains("[Hard] Player X's turn"));
    }

    #[test]
    fn test_illegal_move_reported() {
        let (game, output) = play("1\n1\n", &mut hard_settings());
        assert!(output.contains("Illegal move"));
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_reset_and_difficulty_cycle() {
        let mut settings = hard_settings();
        let (game, output) = play("5\nr\nd\n", &mut settings);
        assert_eq!(game, GameState::new());
        assert!(output.contains("[Easy] Player X's turn"));
        assert_eq!(settings.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_game_played_to_the_end() {
        // 始终走第一个空格，输入结束即退出
        let script = "1\n2\n3\n4\n5\n6\n7\n8\n9\n";
        let (game, output) = play(script, &mut hard_settings());

        assert!(game.status().is_over());
        assert_ne!(game.status(), GameStatus::Won(Player::X));
        assert!(output.contains("wins!") || output.contains("It's a draw!"));
    }

    #[test]
    fn test_winning_line_shown() {
        // Easy 且随机数恒为 0：电脑总走第一个空格，X 沿对角线取胜
        let mut settings = GameSettings {
            difficulty: Difficulty::Easy,
            ai_delay_ms: 0,
            ..Default::default()
        };
        let mut output = Vec::new();
        let game = run(
            "1\n5\n9\n".as_bytes(),
            &mut output,
            &mut settings,
            &mut StepRng::new(0, 0),
        )
        .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(output.contains("[Easy] Player X wins!\nWinning line: 1-5-9\n"));
    }
}
