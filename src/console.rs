#![cfg(feature = "std")]

//! Text front-end driving a [`GameSession`] over stdin/stdout.

use std::io::{self, Write};
use std::string::String;

use log::{info, warn};

use crate::common::{CellView, Outcome, Phase};
use crate::config::{GRID_SIZE, PLAYER_SHIP_LENGTHS};
use crate::game::{GameSession, SessionView};

const SIZE: usize = GRID_SIZE as usize;

/// Formats (row, col) as a letter+number coordinate, `(2, 3)` -> `"D3"`.
pub fn coord_label(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

/// Parses a letter+number coordinate, `"D3"` -> `(2, 3)`. Returns `None`
/// for anything that does not name a cell on the grid.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > SIZE || col >= SIZE {
        return None;
    }
    Some((row - 1, col))
}

/// Outcome message for an attack, `"Hit at D3"` style.
pub fn outcome_line(row: usize, col: usize, outcome: Outcome) -> String {
    match outcome {
        Outcome::Hit => format!("Hit at {}", coord_label(row, col)),
        Outcome::Miss => format!("Miss at {}", coord_label(row, col)),
        Outcome::AlreadyAttacked => format!("Already attacked {}", coord_label(row, col)),
    }
}

/// Required-fleet summary, `"3 and 4"` style.
pub fn required_lengths_line() -> String {
    let mut line = String::new();
    for (i, len) in PLAYER_SHIP_LENGTHS.iter().enumerate() {
        if i > 0 {
            line.push_str(" and ");
        }
        line.push_str(&len.to_string());
    }
    line
}

fn print_header() {
    print!("   ");
    for col in 0..SIZE {
        print!(" {}", (b'A' + col as u8) as char);
    }
    println!();
}

fn print_player_board(view: &SessionView) {
    print_header();
    for row in 0..SIZE {
        print!("{:2} ", row + 1);
        for col in 0..SIZE {
            let cell = view.player[row][col];
            let ch = if cell.hit {
                'X'
            } else if cell.occupied {
                'S'
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}

fn print_opponent_board(view: &SessionView) {
    print_header();
    for row in 0..SIZE {
        print!("{:2} ", row + 1);
        for col in 0..SIZE {
            let ch = match view.opponent[row][col] {
                CellView::Hit => 'X',
                CellView::Miss => 'o',
                CellView::Unknown => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Print the boards relevant to the current phase: the player's own grid
/// during placement, the opponent board above it during battle.
pub fn print_session(session: &GameSession) {
    let view = session.view();
    match view.phase {
        Phase::Placement => {
            println!("Your board:");
            print_player_board(&view);
        }
        Phase::Battle => {
            println!("Opponent board:");
            print_opponent_board(&view);
            println!("\nYour board:");
            print_player_board(&view);
        }
    }
}

/// Interactive session loop: placement commands until battle starts,
/// then attack commands until the player quits.
pub fn run_interactive(session: &mut GameSession) -> anyhow::Result<()> {
    println!(
        "Place exactly {} ships of lengths {} by toggling cells.",
        PLAYER_SHIP_LENGTHS.len(),
        required_lengths_line()
    );
    loop {
        print_session(session);
        match session.phase() {
            Phase::Placement => print!("Toggle a cell (e.g. D3), or 'start': "),
            Phase::Battle => print!("Fire at a cell (e.g. D3), or 'quit': "),
        }
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line == "quit" {
            return Ok(());
        }

        match session.phase() {
            Phase::Placement if line == "start" => match session.start_battle() {
                Ok(()) => {
                    info!("battle started");
                    println!("Battle started. The enemy opened fire on your fleet.");
                }
                Err(e) => {
                    warn!("battle start rejected: {}", e);
                    println!("{}", e);
                }
            },
            Phase::Placement => match parse_coord(line) {
                Some((row, col)) => {
                    if let Err(e) = session.toggle_placement(row, col) {
                        println!("{}", e);
                    }
                }
                None => println!("Invalid input"),
            },
            Phase::Battle => match parse_coord(line) {
                Some((row, col)) => match session.attack_opponent(row, col) {
                    Ok(outcome) => println!("{}", outcome_line(row, col, outcome)),
                    Err(e) => println!("{}", e),
                },
                None => println!("Invalid input"),
            },
        }
    }
}
