use std::io::{self, BufRead, Write};

use thiserror::Error;
use tictactoe_common::games::tictactoe::{board_mark_icon, CellLocation, Mark, PlayArea, PlayResult};
use tictactoe_common::log;

use crate::config::{ClientConfig, RenderMode};

const HELP_TEXT: &str = "Commands: <row> <col> to play, 'new' for a new game, 'help', 'quit'";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(CellLocation),
    NewGame,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("Expected '<row> <col>', got '{0}'")]
    BadCoordinates(String),
    #[error("Row and column must not be negative, got {row} {col}")]
    Negative { row: i64, col: i64 },
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "new" => return Ok(Some(Command::NewGame)),
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" | "q" => return Ok(Some(Command::Quit)),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let looks_numeric = |part: &&str| part.starts_with(['-', '+']) || part.starts_with(|c: char| c.is_ascii_digit());
    if parts.len() != 2 || !parts.iter().all(looks_numeric) {
        return Err(CommandError::Unknown(trimmed.to_string()));
    }

    let (Ok(row), Ok(col)) = (parts[0].parse::<i64>(), parts[1].parse::<i64>()) else {
        return Err(CommandError::BadCoordinates(trimmed.to_string()));
    };

    CellLocation::from_signed(row, col)
        .map(|location| Some(Command::Select(location)))
        .ok_or(CommandError::Negative { row, col })
}

fn cell_text(config: &ClientConfig, mark: Mark) -> String {
    match config.render_mode {
        RenderMode::Symbols => config.symbols.for_mark(mark).to_string(),
        RenderMode::Icons => match board_mark_icon(mark) {
            "" => "-".to_string(),
            icon => icon.to_string(),
        },
    }
}

/// Draws the grid with row and column numbers, one line per row.
pub fn render_board(area: &PlayArea, config: &ClientConfig) -> String {
    let grid = area.board().game_board();
    let cells: Vec<Vec<String>> = grid
        .rows()
        .map(|row| row.iter().map(|&mark| cell_text(config, mark)).collect())
        .collect();

    let width = cells
        .iter()
        .flatten()
        .map(|text| text.chars().count())
        .max()
        .unwrap_or(1)
        .max(grid.size().to_string().len());

    let mut out = String::new();
    out.push_str(&" ".repeat(width + 1));
    for col in 0..grid.size() {
        out.push_str(&format!(" {:^width$}", col, width = width));
    }
    out.push('\n');

    for (row, row_cells) in cells.iter().enumerate() {
        out.push_str(&format!("{:>width$} ", row, width = width));
        for text in row_cells {
            out.push_str(&format!(" {:^width$}", text, width = width));
        }
        out.push('\n');
    }
    out
}

pub fn render_status(area: &PlayArea) -> String {
    let score = area.score();
    let headline = if area.is_game_over() {
        format!("{} - type 'new' to play again", area.result_message())
    } else {
        format!("Player {} to move", area.current_player())
    };
    format!("{}\nScore: X {} - O {}\n", headline, score.get(Mark::X), score.get(Mark::O))
}

/// Reads commands from `input` until it ends or the user quits, writing the
/// board and messages to `output`.
pub fn run_session<R: BufRead, W: Write>(
    area: &mut PlayArea,
    config: &ClientConfig,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "{}", HELP_TEXT)?;
    write!(output, "{}{}", render_board(area, config), render_status(area))?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{}", HELP_TEXT)?;
                continue;
            }
            Command::NewGame => area.new_game(),
            Command::Select(location) => match area.cell_selected(location) {
                Ok(Some(result)) => {
                    if let PlayResult::Win { .. } = result {
                        let cells = result.winning_cells(area.board().board_size());
                        let line: Vec<String> = cells.iter().map(|cell| cell.to_string()).collect();
                        writeln!(output, "Winning line: {}", line.join(" "))?;
                    }
                }
                Ok(None) => {
                    writeln!(output, "The game is over, type 'new' to start another")?;
                    continue;
                }
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            },
        }

        write!(output, "{}{}", render_board(area, config), render_status(area))?;
    }

    log!("Session ended, final score X {} - O {}", area.score().x, area.score().o);
    Ok(())
}
