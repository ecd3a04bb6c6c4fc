//! Kanoodle Fusion helper
//!
//! Inspects the compiled-in piece and level catalogs, previews piece
//! orientations, pre-checks a move before it is sent to the contract and
//! compares a contract board snapshot against a level's target.

use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fusion::geometry::{all_orientations, format_shape};
use fusion::{Board, Catalog, Level, LevelId, Piece, PieceId, Rotation, Transform};

/// Piece geometry and level tools for Kanoodle Fusion.
#[derive(Parser)]
#[command(name = "fusion")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log catalog construction and checks.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List every level with its allowed pieces.
    Levels,
    /// Print a level's target board.
    Level { id: LevelId },
    /// Print a piece in a given orientation.
    Piece {
        id: PieceId,
        #[command(flatten)]
        orientation: OrientationArgs,
    },
    /// Print every distinct orientation of a piece.
    Orientations { id: PieceId },
    /// Pre-check a placement and print the contract arguments.
    Check {
        level: LevelId,
        piece: PieceId,
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
        #[command(flatten)]
        orientation: OrientationArgs,
    },
    /// Compare a contract board snapshot (16 color codes) with a level target.
    Compare {
        level: LevelId,
        #[arg(num_args = 1.., required = true)]
        codes: Vec<u8>,
    },
    /// Dump the catalog as JSON.
    Export,
}

#[derive(clap::Args)]
struct OrientationArgs {
    /// Clockwise quarter turns.
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    rotation: u8,
    /// Mirror horizontally before rotating.
    #[arg(short, long)]
    flip: bool,
}

impl OrientationArgs {
    fn transform(&self) -> Transform {
        // clap limits the range to 0..=3
        let rotation = Rotation::from_quarter_turns(self.rotation).unwrap_or_default();
        Transform::new(rotation, self.flip)
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = Catalog::standard();
    if let Err(e) = catalog.check_integrity() {
        eprintln!("Corrupt catalog: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Some(Command::Levels) | None => {
            run_levels(catalog);
            Ok(())
        }
        Some(Command::Level { id }) => run_level(catalog, id),
        Some(Command::Piece { id, orientation }) => {
            run_piece(catalog, id, orientation.transform())
        }
        Some(Command::Orientations { id }) => run_orientations(catalog, id),
        Some(Command::Check {
            level,
            piece,
            x,
            y,
            orientation,
        }) => run_check(catalog, level, piece, x, y, orientation.transform()),
        Some(Command::Compare { level, codes }) => run_compare(catalog, level, &codes),
        Some(Command::Export) => run_export(catalog),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Installs a stderr subscriber; `RUST_LOG` applies unless `--verbose` is given.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_levels(catalog: &Catalog) {
    for level in catalog.levels() {
        println!("{}", format_level_summary(level));
    }
}

fn run_level(catalog: &Catalog, id: LevelId) -> Result<(), Box<dyn Error>> {
    let level = catalog.level(id)?;
    println!("{}", format_level_summary(level));
    print!("{}", level.target());
    Ok(())
}

fn run_piece(catalog: &Catalog, id: PieceId, transform: Transform) -> Result<(), Box<dyn Error>> {
    let piece = catalog.piece(id)?;
    print!("{}", format_shape(&piece.oriented(transform)));
    Ok(())
}

fn run_orientations(catalog: &Catalog, id: PieceId) -> Result<(), Box<dyn Error>> {
    let piece = catalog.piece(id)?;
    print!("{}", format_orientations(piece));
    Ok(())
}

fn run_check(
    catalog: &Catalog,
    level: LevelId,
    piece: PieceId,
    x: i32,
    y: i32,
    transform: Transform,
) -> Result<(), Box<dyn Error>> {
    let planned = catalog.plan_move(level, piece, transform, x, y)?;
    tracing::debug!(?planned, "move planned");
    println!("{:?}", planned.args());
    Ok(())
}

fn run_compare(catalog: &Catalog, level: LevelId, codes: &[u8]) -> Result<(), Box<dyn Error>> {
    let target = catalog.level(level)?.target();
    let current = Board::from_codes(codes)?;
    print!("{}", format_comparison(&current, target));
    Ok(())
}

fn run_export(catalog: &Catalog) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(&catalog.export())?);
    Ok(())
}

fn format_level_summary(level: &Level) -> String {
    let pieces: Vec<String> = level.allowed().iter().map(|id| id.to_string()).collect();
    format!("Level {:>2}: pieces {}", level.id(), pieces.join(", "))
}

/// Orientations separated by blank lines.
fn format_orientations(piece: &Piece) -> String {
    let orientations = all_orientations(piece.cells());
    let mut output = format!("Piece {}: {} orientations\n", piece.id(), orientations.len());
    for cells in &orientations {
        output.push('\n');
        output.push_str(&format_shape(cells));
    }
    output
}

/// Current and target side by side, followed by the mismatch verdict.
fn format_comparison(current: &Board, target: &Board) -> String {
    let mut output = String::from("now   want\n");
    for (now, want) in current.to_string().lines().zip(target.to_string().lines()) {
        output.push_str(&format!("{}  {}\n", now, want));
    }

    let mismatches = current.mismatches(target);
    if mismatches.is_empty() {
        output.push_str("Solved\n");
    } else {
        let cells: Vec<String> = mismatches
            .iter()
            .map(|(x, y)| format!("({}, {})", x, y))
            .collect();
        output.push_str(&format!("{} cells differ: {}\n", cells.len(), cells.join(" ")));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_summary() {
        let catalog = Catalog::standard();
        insta::assert_snapshot!(
            format_level_summary(catalog.level(1).unwrap()),
            @"Level  1: pieces 4, 5, 8, 10, 11, 12, 13"
        );
    }

    #[test]
    fn test_orientations_snapshot() {
        let catalog = Catalog::standard();
        insta::assert_snapshot!(format_orientations(catalog.piece(9).unwrap()), @r"
        Piece 9: 4 orientations

        R
        Y

        RY

        Y
        R

        YR
        ");
    }

    #[test]
    fn test_comparison_snapshot() {
        let catalog = Catalog::standard();
        let target = catalog.level(2).unwrap().target();
        let mut codes: Vec<u8> = target.cells().iter().map(|color| color.code()).collect();
        codes[0] = 0;
        codes[15] = 3;
        let current = Board::from_codes(&codes).unwrap();
        insta::assert_snapshot!(format_comparison(&current, target), @r"
        now   want
        .YYY  YYYY
        YYRR  YYRR
        YYBR  YYBR
        BRBB  BRBR
        2 cells differ: (0, 0) (3, 3)
        ");
    }

    #[test]
    fn test_solved_comparison() {
        let catalog = Catalog::standard();
        let target = catalog.level(7).unwrap().target();
        assert!(format_comparison(target, target).ends_with("Solved\n"));
    }

    #[test]
    fn test_orientation_args_map_to_transform() {
        let args = OrientationArgs {
            rotation: 2,
            flip: true,
        };
        assert_eq!(args.transform(), Transform::new(Rotation::R180, true));
    }

    #[test]
    fn test_cli_parses_check() {
        let cli = Cli::try_parse_from(["fusion", "check", "1", "5", "1", "1", "-r", "3", "-f"])
            .unwrap();
        match cli.command {
            Some(Command::Check {
                level,
                piece,
                x,
                y,
                orientation,
            }) => {
                assert_eq!((level, piece, x, y), (1, 5, 1, 1));
                assert_eq!(orientation.transform(), Transform::new(Rotation::R270, true));
            }
            _ => panic!("expected check command"),
        }
        assert!(Cli::try_parse_from(["fusion", "piece", "1", "-r", "4"]).is_err());
    }
}
