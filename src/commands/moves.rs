//! `knightpath moves`

use knightpath_core::error::Result;
use knightpath_core::format::OutputFormat;
use knightpath_core::{knight_moves, Square};
use serde::Serialize;

use super::{ensure_on_board, print_json, square_label, CommandContext};

#[derive(Serialize)]
struct MovesOutput {
    square: Square,
    moves: Vec<Square>,
}

/// Execute the moves command
pub fn execute(ctx: &CommandContext, square: Square) -> Result<()> {
    ensure_on_board(square)?;
    let moves = knight_moves(square);

    match ctx.format {
        OutputFormat::Json => print_json(&MovesOutput { square, moves })?,
        OutputFormat::Human => {
            if !ctx.quiet {
                println!("Knight moves from {}:", square_label(square));
            }
            for m in &moves {
                println!("{}", square_label(*m));
            }
        }
    }

    Ok(())
}
