//! Line protocol spoken by the game server.
//!
//! One command per line, case-sensitive, arguments comma-separated inside
//! parentheses. Board and cell numbers on the wire run 1-9; they are converted
//! to 0-8 here and back again in [`format_reply`].

use std::fmt;

use crate::board::BOARD_COUNT;

/// Server command relevant to move selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Opponent opened at `(board, cell)`
    SecondMove { board: usize, cell: usize },
    /// We opened at `(board, cell)` and the opponent answered `reply` in board `cell`
    ThirdMove {
        board: usize,
        cell: usize,
        reply: usize,
    },
    /// Opponent played `cell` in the active sub-board
    NextMove { cell: usize },
    Win,
    Loss,
    Draw,
}

impl Command {
    /// Parse one line. Lines that carry nothing for the engine (`start(x)`,
    /// `init`, `end`, blank lines, unknown words) yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, crate::Error> {
        let line = line.trim();
        let (name, args) = match line.split_once('(') {
            Some((name, rest)) => {
                let inner = rest.split(')').next().unwrap_or_default();
                (name, Some(inner))
            }
            None => (line, None),
        };

        let command = match name {
            "second_move" => {
                let [board, cell] = parse_indices(line, args)?;
                Command::SecondMove { board, cell }
            }
            "third_move" => {
                let [board, cell, reply] = parse_indices(line, args)?;
                Command::ThirdMove { board, cell, reply }
            }
            "next_move" => {
                let [cell] = parse_indices(line, args)?;
                Command::NextMove { cell }
            }
            "win" => Command::Win,
            "loss" => Command::Loss,
            "draw" => Command::Draw,
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

/// Whether `text`, received without a trailing newline, already holds a whole
/// command: a bare terminal signal, or a known command with its closing `)`.
pub fn is_complete(text: &str) -> bool {
    let text = text.trim();
    match text.split_once('(') {
        Some((name, _)) => {
            matches!(name, "second_move" | "third_move" | "next_move") && text.ends_with(')')
        }
        None => matches!(text, "win" | "loss" | "draw"),
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Command::SecondMove { board, cell } => {
                write!(f, "second_move({},{})", board + 1, cell + 1)
            }
            Command::ThirdMove { board, cell, reply } => {
                write!(f, "third_move({},{},{})", board + 1, cell + 1, reply + 1)
            }
            Command::NextMove { cell } => write!(f, "next_move({})", cell + 1),
            Command::Win => write!(f, "win"),
            Command::Loss => write!(f, "loss"),
            Command::Draw => write!(f, "draw"),
        }
    }
}

fn parse_indices<const N: usize>(
    line: &str,
    args: Option<&str>,
) -> Result<[usize; N], crate::Error> {
    let malformed = |reason: String| crate::Error::MalformedCommand {
        line: line.to_string(),
        reason,
    };

    let args = args.ok_or_else(|| malformed("missing argument list".to_string()))?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(malformed(format!(
            "expected {N} arguments, got {}",
            parts.len()
        )));
    }

    let mut indices = [0; N];
    for (slot, part) in indices.iter_mut().zip(parts) {
        let value: usize = part
            .parse()
            .map_err(|_| malformed(format!("'{part}' is not a number")))?;
        if !(1..=BOARD_COUNT).contains(&value) {
            return Err(malformed(format!("{value} is outside 1-{BOARD_COUNT}")));
        }
        *slot = value - 1;
    }
    Ok(indices)
}

/// Reply line for a chosen cell (0-8): its 1-9 number and a newline
pub fn format_reply(cell: usize) -> String {
    format!("{}\n", cell + 1)
}
