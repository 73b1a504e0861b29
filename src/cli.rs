#![cfg(feature = "std")]

//! Terminal front end: prompts, board rendering and the interactive game loop.
//!
//! Everything here is generic over `BufRead`/`Write` so sessions can be
//! scripted in tests.

use std::io::{BufRead, Write};

use crate::{
    common::{Grid, MoveOutcome, Rejection},
    config::{coords_to_cell, BOARD_SIZE, DEFAULT_TOKENS, NUM_CELLS},
    game::GameController,
    player::{Player, PlayerSpec},
    setup::{counterpart_token, validate_players, SetupError},
};

/// Parse a cell number `1`..=`9` into `(row, col)`.
pub fn parse_cell(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let n: usize = input
        .parse()
        .map_err(|_| format!("Invalid cell '{}' - must be a number 1-{}", input, NUM_CELLS))?;
    if n == 0 || n > NUM_CELLS {
        return Err(format!("Cell {} out of range - must be 1-{}", n, NUM_CELLS));
    }
    let index = n - 1;
    Ok((index / BOARD_SIZE, index % BOARD_SIZE))
}

/// Render the grid; empty cells show the number that selects them.
pub fn render_board(grid: &Grid) -> String {
    let mut out = String::new();
    for (r, row) in grid.iter().enumerate() {
        if r > 0 {
            out.push_str("---+---+---\n");
        }
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, cell)| match cell {
                Some(token) => token.to_string(),
                None => coords_to_cell(r, c).map_or(String::new(), |i| (i + 1).to_string()),
            })
            .collect();
        out.push_str(&format!(" {} | {} | {}\n", cells[0], cells[1], cells[2]));
    }
    out
}

/// "Alice's (X) turn"
pub fn turn_announcement(player: &Player) -> String {
    format!("{}'s ({}) turn", player.name(), player.token())
}

/// One-line message for a move result.
pub fn describe_outcome(outcome: &MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Rejected(Rejection::Inactive) => "Game has not started yet.".to_string(),
        MoveOutcome::Rejected(Rejection::Occupied) => {
            "Invalid move! Cell already occupied.".to_string()
        }
        MoveOutcome::Winner { name } => format!("{} wins!", name),
        MoveOutcome::Tie => "It's a tie!".to_string(),
        MoveOutcome::NextPlayer { name } => format!("{}'s turn", name),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> anyhow::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    read_line(input)
}

/// Ask for names and tokens until they pass validation.
///
/// Values already given (e.g. from command-line flags) are not asked for;
/// if one of them is what fails validation, the error is returned.
/// An empty token answer takes the default: `X` for the first seat, the
/// opposite of the first seat's token for the second. Returns `None` on EOF.
pub fn prompt_players<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    given: [(Option<String>, Option<String>); 2],
) -> anyhow::Result<Option<(PlayerSpec, PlayerSpec)>> {
    loop {
        let mut answers: Vec<(String, String)> = Vec::with_capacity(2);
        for (seat, (name, token)) in given.iter().enumerate() {
            let name = match name {
                Some(n) => n.clone(),
                None => match prompt(input, output, &format!("Player {} name: ", seat + 1))? {
                    Some(n) => n,
                    None => return Ok(None),
                },
            };
            let fallback = match answers.first() {
                Some((_, first)) => counterpart_token(first).unwrap_or(DEFAULT_TOKENS[1]),
                None => DEFAULT_TOKENS[0],
            };
            let token = match token {
                Some(t) => t.clone(),
                None => {
                    let text = format!("Player {} token [{}]: ", seat + 1, fallback);
                    match prompt(input, output, &text)? {
                        Some(t) if t.is_empty() => fallback.to_string(),
                        Some(t) => t,
                        None => return Ok(None),
                    }
                }
            };
            answers.push((name, token));
        }
        match validate_players(
            &answers[0].0,
            Some(answers[0].1.as_str()),
            &answers[1].0,
            Some(answers[1].1.as_str()),
        ) {
            Ok(specs) => return Ok(Some(specs)),
            Err(e) => {
                writeln!(output, "{}", e)?;
                if fixed_by_caller(e, &given) {
                    return Err(anyhow::anyhow!(e));
                }
            }
        }
    }
}

/// Whether the value that failed validation was supplied up front, so
/// asking again cannot fix it.
fn fixed_by_caller(err: SetupError, given: &[(Option<String>, Option<String>); 2]) -> bool {
    match err {
        SetupError::EmptyName { seat } => given[usize::from(seat) - 1].0.is_some(),
        SetupError::MissingToken { seat } => given[usize::from(seat) - 1].1.is_some(),
        SetupError::DuplicateTokens => given.iter().all(|(_, t)| t.is_some()),
    }
}

/// Play games between `p1` and `p2` until the user quits.
///
/// Reads cell numbers (`q` quits). After each finished game the user may
/// play again with the same players. Returns the terminal outcome of every
/// completed game.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    controller: &mut GameController,
    p1: &PlayerSpec,
    p2: &PlayerSpec,
) -> anyhow::Result<Vec<MoveOutcome>> {
    let mut finished = Vec::new();
    controller.start(p1.clone(), p2.clone());
    loop {
        write!(output, "\n{}", render_board(&controller.board()))?;
        if let Some(player) = controller.current_player() {
            writeln!(output, "{}", turn_announcement(player))?;
        }
        let line = match prompt(input, output, "Cell [1-9, q to quit]: ")? {
            Some(l) => l,
            None => break,
        };
        if line.eq_ignore_ascii_case("q") {
            break;
        }
        let (row, col) = match parse_cell(&line) {
            Ok(rc) => rc,
            Err(msg) => {
                writeln!(output, "{}", msg)?;
                continue;
            }
        };
        let outcome = controller.play(row, col).map_err(|e| anyhow::anyhow!(e))?;
        writeln!(output, "{}", describe_outcome(&outcome))?;
        if !outcome.is_terminal() {
            continue;
        }

        write!(output, "\n{}", render_board(&controller.board()))?;
        finished.push(outcome);
        match prompt(input, output, "Play again? [y/N]: ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => {
                controller.reset();
                controller.start(p1.clone(), p2.clone());
            }
            _ => break,
        }
    }
    controller.reset();
    writeln!(output, "Game Ended")?;
    Ok(finished)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_maps_row_major() {
        assert_eq!(parse_cell("1"), Ok((0, 0)));
        assert_eq!(parse_cell(" 6 "), Ok((1, 2)));
        assert_eq!(parse_cell("9"), Ok((2, 2)));
        assert!(parse_cell("0").is_err());
        assert!(parse_cell("10").is_err());
        assert!(parse_cell("a").is_err());
        assert!(parse_cell("").is_err());
    }

    #[test]
    fn render_numbers_empty_cells() {
        let mut grid = Grid::default();
        grid[1][1] = Some("X".into());
        assert_eq!(
            render_board(&grid),
            " 1 | 2 | 3\n---+---+---\n 4 | X | 6\n---+---+---\n 7 | 8 | 9\n"
        );
    }

    #[test]
    fn describe_each_outcome() {
        assert_eq!(
            describe_outcome(&MoveOutcome::Winner { name: "Ann".into() }),
            "Ann wins!"
        );
        assert_eq!(describe_outcome(&MoveOutcome::Tie), "It's a tie!");
        assert_eq!(
            describe_outcome(&MoveOutcome::Rejected(Rejection::Occupied)),
            "Invalid move! Cell already occupied."
        );
    }
}
