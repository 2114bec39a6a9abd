//! `knightpath path`

use knightpath_core::error::{KnightError, Result};
use knightpath_core::format::OutputFormat;
use knightpath_core::graph::shortest_path_with_limits;
use knightpath_core::Square;
use serde::Serialize;

use super::{ensure_on_board, print_json, square_label, CommandContext};

#[derive(Serialize)]
struct PathOutput {
    from: Square,
    to: Square,
    found: bool,
    move_count: usize,
    path: Vec<Square>,
}

/// Execute the path command
pub fn execute(ctx: &CommandContext, from: Square, to: Square) -> Result<()> {
    ensure_on_board(from)?;
    ensure_on_board(to)?;

    let path = shortest_path_with_limits(from, to, &ctx.limits)?
        .ok_or_else(|| KnightError::no_path(square_label(from), square_label(to)))?;
    let move_count = path.len() - 1;

    match ctx.format {
        OutputFormat::Json => print_json(&PathOutput {
            from,
            to,
            found: true,
            move_count,
            path,
        })?,
        OutputFormat::Human => {
            for (step, square) in path.iter().enumerate() {
                println!("{:>2}  {}", step, square_label(*square));
            }
            if !ctx.quiet {
                let unit = if move_count == 1 { "move" } else { "moves" };
                println!(
                    "{} {} from {} to {}",
                    move_count,
                    unit,
                    square_label(from),
                    square_label(to)
                );
            }
        }
    }

    Ok(())
}
