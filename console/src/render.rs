use tictactoe_engine::{Board, Cell, GameSession};

/// Board with 1-9 shown on empty cells so the player knows what to type.
pub fn render_board(board: &Board) -> String {
    let winning = board.winning_line().map(|(_, line)| line);

    let symbol = |index: usize| match board.cells()[index] {
        Cell::Empty => char::from(b'1' + index as u8).to_string(),
        Cell::Marked(mark) if winning.is_some_and(|line| line.contains(&index)) => {
            format!("[{}]", mark)
        }
        Cell::Marked(mark) => mark.to_string(),
    };

    (0..3)
        .map(|row| {
            (0..3)
                .map(|col| format!("{:^3}", symbol(row * 3 + col)))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

pub fn render_session(session: &GameSession) -> String {
    format!("{}\n{}\n", render_board(session.board()), session.status_line())
}
