//! Interactive text console and command loop.
//!
//! Translates one-letter commands (with long aliases) into `Position` calls:
//! show the board, get/set the position, list legal targets, report check,
//! make and undo moves, and run perft/divide. A failed command prints a
//! diagnostic and leaves the position unchanged.

use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::board::chess_types::{PieceKind, Square};
use crate::board::position::Position;
use crate::errors::ParseError;
use crate::move_generation::game_end::GameStatus;
use crate::move_generation::perft::validate_depth;
use crate::utils::algebraic::{algebraic_to_square, square_name};
use crate::utils::fen_generator::EnPassantExport;
use crate::utils::fen_parser::FenOptions;
use crate::utils::long_algebraic::parse_promotion;
use crate::utils::render_position::{render_position, RenderStyle};

const CONSOLE_BANNER: &str = "ownchess board console, type h for help";

const HELP_TEXT: &str = "Available commands:
\tq - exit (also qqq)
\th - show this message
\tb - show board
\tf [FEN] - set FEN, initial position if no FEN given
\tf get - get FEN of current position
\tl [square] - show legal moves from a square, list all if no square given (also slm)
\tc - is the current player in check (also iic)
\tm <square_from> <square_to> [q|r|b|n] - make a move (also mm)
\tu - undo the last move (also um, umove, unmove)
\tp <depth> - run perft from the current position
\td <depth> - run divide from the current position";

/// Startup options taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// `--fen <FEN>`: initial position instead of the opening layout.
    pub fen: Option<String>,
    /// `--strict-fen`
    pub fen_options: FenOptions,
    /// `--strict-ep`
    pub en_passant: EnPassantExport,
    /// `--ansi`
    pub style: RenderStyle,
}

impl ConsoleOptions {
    /// Parse flags; unknown arguments are ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fen" => options.fen = args.next(),
                "--strict-fen" => options.fen_options = FenOptions::STRICT,
                "--strict-ep" => options.en_passant = EnPassantExport::OnlyWhenCapturable,
                "--ansi" => options.style = RenderStyle::Ansi,
                _ => warn!("ignoring unknown argument '{arg}'"),
            }
        }

        options
    }
}

pub fn run_stdio_loop(options: ConsoleOptions) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(options);

    writeln!(stdout, "{CONSOLE_BANNER}")?;
    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    position: Position,
    options: ConsoleOptions,
}

impl ConsoleState {
    /// An unusable `--fen` falls back to the opening layout.
    pub fn new(options: ConsoleOptions) -> Self {
        let position = match options.fen.as_deref() {
            Some(fen) => Position::from_fen_with(fen, options.fen_options).unwrap_or_else(|err| {
                warn!("--fen rejected ({err}), using the starting position");
                Position::new_game()
            }),
            None => Position::new_game(),
        };

        Self { position, options }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Execute one command line. Returns `true` when the console should quit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let result = match cmd {
            "q" | "qqq" | "quit" | "exit" => return Ok(true),
            "h" | "help" => writeln!(out, "{HELP_TEXT}").map_err(|e| e.to_string()),
            "b" | "board" => self.show_board(&[], out),
            "f" | "fen" => self.handle_fen(&args, out),
            "l" | "slm" | "legal" => self.handle_legal(&args, out),
            "c" | "iic" | "check" => self.handle_check(out),
            "m" | "mm" | "move" => self.handle_move(&args, out),
            "u" | "um" | "undo" | "umove" | "unmove" => {
                self.position.undo_move().map_err(|e| e.to_string())
            }
            "p" | "perft" => self.handle_perft(&args, out),
            "d" | "divide" => self.handle_divide(&args, out),
            _ => Err(format!("unknown command '{cmd}', type h for help")),
        };

        if let Err(err) = result {
            warn!("command '{trimmed}' failed: {err}");
            writeln!(out, "error: {err}")?;
        }

        Ok(false)
    }

    fn show_board(&self, highlights: &[Square], out: &mut impl Write) -> Result<(), String> {
        writeln!(
            out,
            "{}",
            render_position(&self.position, self.options.style, highlights)
        )
        .map_err(|e| e.to_string())
    }

    fn handle_fen(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        match args {
            ["get"] => writeln!(out, "{}", self.position.get_fen_with(self.options.en_passant))
                .map_err(|e| e.to_string()),
            [] => {
                self.position = Position::new_game();
                Ok(())
            }
            fields => {
                let fen = fields.join(" ");
                self.position =
                    Position::from_fen_with(&fen, self.options.fen_options).map_err(|e| e.to_string())?;
                Ok(())
            }
        }
    }

    fn handle_legal(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        if let Some(square) = args.first() {
            let from = algebraic_to_square(square).map_err(|e| e.to_string())?;
            let targets = self.position.legal_targets(from);
            return self.show_board(&targets, out);
        }

        let mut origins: Vec<Square> = self.position.legal_moves().iter().map(|&(from, _)| from).collect();
        origins.dedup();
        for from in origins {
            let mut targets = self.position.legal_targets(from);
            targets.sort_unstable();
            let targets: Vec<String> = targets.into_iter().map(square_name).collect();
            writeln!(out, "{}: {}", square_name(from), targets.join(" ")).map_err(|e| e.to_string())?;
        }
        Ok(())
    }

    fn handle_check(&self, out: &mut impl Write) -> Result<(), String> {
        let side = self.position.side_to_move();
        let verdict = if self.position.side_to_move_in_check() {
            "in check"
        } else {
            "not in check"
        };
        writeln!(out, "{side:?} is {verdict}").map_err(|e| e.to_string())
    }

    fn handle_move(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let (from, to, promotion) = match args {
            [from, to] => (*from, *to, None),
            [from, to, promotion] => (*from, *to, Some(*promotion)),
            _ => return Err("usage: m <square_from> <square_to> [q|r|b|n]".to_owned()),
        };

        let from = algebraic_to_square(from).map_err(|e| e.to_string())?;
        let to = algebraic_to_square(to).map_err(|e| e.to_string())?;
        let promotion = match promotion {
            Some(letter) => parse_promotion(letter).map_err(|e| e.to_string())?,
            None => PieceKind::Queen,
        };

        let status = self
            .position
            .make_move(from, to, promotion)
            .map_err(|e| e.to_string())?;
        if status != GameStatus::Ongoing {
            writeln!(out, "{status}").map_err(|e| e.to_string())?;
        }
        Ok(())
    }

    fn handle_perft(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let depth = parse_depth(args)?;

        let started = Utc::now();
        let nodes = self.position.perft(depth);
        let elapsed_ms = elapsed_ms_since(started);
        let knps = nodes as f64 / elapsed_ms as f64;

        info!("perft({depth}) = {nodes} in {elapsed_ms} ms");
        writeln!(
            out,
            "perft({depth}) = {nodes} nodes in {elapsed_ms} ms ({knps:.1} knodes/s)"
        )
        .map_err(|e| e.to_string())
    }

    fn handle_divide(&mut self, args: &[&str], out: &mut impl Write) -> Result<(), String> {
        let depth = parse_depth(args)?;

        let started = Utc::now();
        let counts = self.position.divide(depth);
        let elapsed_ms = elapsed_ms_since(started);
        let total: u64 = counts.values().sum();
        for (label, nodes) in &counts {
            writeln!(out, "{label}: {nodes}").map_err(|e| e.to_string())?;
        }

        info!("divide({depth}) = {total} over {} moves in {elapsed_ms} ms", counts.len());
        writeln!(out, "total: {total} nodes in {elapsed_ms} ms").map_err(|e| e.to_string())
    }
}

/// Wall-clock milliseconds since `started`, at least 1.
fn elapsed_ms_since(started: DateTime<Utc>) -> i64 {
    (Utc::now() - started).num_milliseconds().max(1)
}

fn parse_depth(args: &[&str]) -> Result<u32, String> {
    let raw = args.first().ok_or("missing depth")?;
    let depth = raw.parse::<i64>().map_err(|_| {
        ParseError::InvalidNumber {
            field: "depth",
            value: (*raw).to_owned(),
        }
        .to_string()
    })?;
    validate_depth(depth).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(console: &mut ConsoleState, line: &str) -> String {
        let mut out = Vec::new();
        let quit = console.handle_command(line, &mut out).expect("writing to a Vec cannot fail");
        assert!(!quit);
        String::from_utf8(out).expect("console output is UTF-8")
    }

    #[test]
    fn moves_and_undo_update_the_fen() {
        let mut console = ConsoleState::new(ConsoleOptions::default());
        assert_eq!(run(&mut console, "m e2 e4"), "");
        assert_eq!(
            run(&mut console, "f get"),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1\n"
        );
        run(&mut console, "u");
        assert_eq!(console.position(), &Position::new_game());
    }

    #[test]
    fn failed_commands_report_and_keep_state() {
        let mut console = ConsoleState::new(ConsoleOptions::default());
        let output = run(&mut console, "m e2 e5");
        assert!(output.starts_with("error: illegal move"));
        assert!(run(&mut console, "u").starts_with("error: nothing to undo"));
        assert!(run(&mut console, "p -1").starts_with("error: perft depth must not be negative"));
        assert!(run(&mut console, "f 8/8/8/8/8/8/8/8 w - - 0 1").starts_with("error:"));
        assert!(run(&mut console, "zap").starts_with("error: unknown command"));
        assert_eq!(console.position(), &Position::new_game());
    }

    #[test]
    fn set_position_perft_and_divide() {
        let mut console = ConsoleState::new(ConsoleOptions::default());
        run(&mut console, "f 4k3/1P6/8/8/8/8/8/4K3 w - - 0 1");
        assert!(run(&mut console, "p 1").starts_with("perft(1) = 9 nodes"));

        let divide = run(&mut console, "d 1");
        assert!(divide.contains("b7b8Q: 1\n"));
        assert!(divide.contains("\ntotal: 9 nodes in "));
        assert!(divide.ends_with(" ms\n"));

        run(&mut console, "f");
        assert_eq!(console.position(), &Position::new_game());
    }

    #[test]
    fn check_and_mate_are_reported() {
        let mut console = ConsoleState::new(ConsoleOptions::default());
        for line in ["m f2 f3", "m e7 e5", "m g2 g4"] {
            run(&mut console, line);
        }
        assert_eq!(run(&mut console, "m d8 h4"), "checkmate\n");
        assert_eq!(run(&mut console, "c"), "White is in check\n");
    }

    #[test]
    fn legal_listing_groups_targets_by_origin() {
        let mut console = ConsoleState::new(ConsoleOptions::default());
        let listing = run(&mut console, "l");
        assert_eq!(listing.lines().count(), 10);
        assert!(listing.contains("g1: f3 h3\n"));
        assert!(listing.contains("e2: e3 e4\n"));
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut console = ConsoleState::new(ConsoleOptions::default());
        for alias in ["q", "qqq", "quit", "exit"] {
            let mut out = Vec::new();
            assert!(console.handle_command(alias, &mut out).expect("quit should succeed"));
        }
    }

    #[test]
    fn short_aliases_reach_the_same_commands() {
        let mut console = ConsoleState::new(ConsoleOptions::default());
        assert_eq!(run(&mut console, "iic"), "White is not in check\n");
        assert_eq!(run(&mut console, "slm").lines().count(), 10);

        for undo in ["um", "umove", "unmove"] {
            assert_eq!(run(&mut console, "mm e2 e4"), "");
            assert_ne!(console.position(), &Position::new_game());
            assert_eq!(run(&mut console, undo), "");
            assert_eq!(console.position(), &Position::new_game());
        }
    }

    #[test]
    fn options_come_from_flags() {
        let args = ["--fen", "4k3/8/8/8/8/8/8/4K3 w - - 0 1", "--strict-ep", "--ansi"]
            .into_iter()
            .map(str::to_owned);
        let options = ConsoleOptions::from_args(args);
        assert_eq!(options.fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));
        assert_eq!(options.en_passant, EnPassantExport::OnlyWhenCapturable);
        assert_eq!(options.style, RenderStyle::Ansi);
        assert_eq!(options.fen_options, FenOptions::default());

        let console = ConsoleState::new(options);
        assert_eq!(console.position().get_fen(), "4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    }
}
