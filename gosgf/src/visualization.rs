use crate::{BoardSnapshot, Stone};

fn stone_char(stone: Stone) -> char {
    match stone {
        Stone::Empty => '·',
        Stone::Black => '●',
        Stone::White => '○',
    }
}

/// Draws the board as text, with column indices on top and row indices on the left.
pub fn visualize_board(snapshot: &BoardSnapshot) -> String {
    let size = snapshot.size();

    // Column header
    let mut result = String::from("    ");
    for x in 0..size {
        result += &format!("{:>2}", x);
    }
    // Draw the top of the box
    result += "\n    ╭";
    for _ in 0..size {
        result += "──";
    }
    result += "╮";

    for (y, row) in snapshot.board_state.iter().enumerate() {
        result += &format!("\n{:>3} │", y);
        for &stone in row {
            result.push(stone_char(stone));
            result.push(' ');
        }
        result += "│";
    }

    // Draw the bottom of the box
    result += "\n    ╰";
    for _ in 0..size {
        result += "──";
    }
    result += "╯";
    result
}
