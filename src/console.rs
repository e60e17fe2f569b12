//! Line-oriented console shared by the menu, human players and the board
//! printer.

use noughts::{
    BOARD_SIZE, Board, CoordinateSource, InputRejection, MatchEvent, MatchObserver, Move, Side,
};
use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};
use tracing::{instrument, warn};

/// A console shared between the session and the players it creates.
pub type SharedConsole<R, W> = Arc<Mutex<Console<R, W>>>;

/// Reads lines from `R` and writes text to `W`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Wraps the console for sharing.
    pub fn shared(self) -> SharedConsole<R, W> {
        Arc::new(Mutex::new(self))
    }

    /// Reads one line without its terminator; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read,
    /// so garbage reaches the caller as an ordinary line to reject.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Writes `text` without a newline, for prompts.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.output
    }
}

/// Renders the board with column labels across the top and row labels down
/// the side.
pub fn render_board(board: &Board) -> String {
    let border = "-".repeat(2 * BOARD_SIZE + 5);
    let mut out = String::from("  |");
    for column in 0..BOARD_SIZE {
        out.push_str(&format!(" {}", column));
    }
    out.push_str(" |\n");
    out.push_str(&border);
    out.push('\n');
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{} |", row));
        for column in 0..BOARD_SIZE {
            let symbol = board
                .cell_at(Move::new(column, row))
                .map(|cell| cell.symbol())
                .unwrap_or(' ');
            out.push_str(&format!(" {}", symbol));
        }
        out.push_str(" |\n");
    }
    out.push_str(&border);
    out
}

/// Feeds a human player's coordinates from the console.
pub struct ConsoleSource<R, W> {
    console: SharedConsole<R, W>,
}

impl<R, W> ConsoleSource<R, W> {
    /// Creates a source reading from `console`.
    pub fn new(console: SharedConsole<R, W>) -> Self {
        Self { console }
    }
}

impl<R: BufRead + Send, W: Write + Send> CoordinateSource for ConsoleSource<R, W> {
    #[instrument(skip(self, _board))]
    fn next_line(&mut self, _board: &Board, side: Side) -> Option<String> {
        let Ok(mut console) = self.console.lock() else {
            warn!("Console lock poisoned");
            return None;
        };
        let prompt = format!(
            "{} to move. Enter the column then the row, e.g. \"0 2\": ",
            side
        );
        if let Err(e) = console.prompt(&prompt) {
            warn!(error = %e, "Failed to write prompt");
            return None;
        }
        match console.read_line() {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Failed to read move");
                None
            }
        }
    }

    fn rejected(&mut self, rejection: &InputRejection) {
        if let Ok(mut console) = self.console.lock()
            && let Err(e) = console.say(&rejection.to_string())
        {
            warn!(error = %e, "Failed to report rejected input");
        }
    }
}

/// Prints the board after every move and the outcome at the end.
pub struct BoardPrinter<R, W> {
    console: SharedConsole<R, W>,
}

impl<R, W> BoardPrinter<R, W> {
    /// Creates a printer writing to `console`.
    pub fn new(console: SharedConsole<R, W>) -> Self {
        Self { console }
    }
}

impl<R: BufRead, W: Write> MatchObserver for BoardPrinter<R, W> {
    fn on_event(&mut self, event: &MatchEvent, board: &Board) {
        let text = match event {
            MatchEvent::Started { first, second } => format!(
                "\n{} (X) vs {} (O)\n\n{}\n",
                first,
                second,
                render_board(board)
            ),
            MatchEvent::MoveMade { side, strategy, mv } => format!(
                "{} ({}) plays {}\n\n{}\n",
                strategy,
                side,
                mv,
                render_board(board)
            ),
            MatchEvent::Finished(outcome) => format!("{}\n", outcome),
        };
        let Ok(mut console) = self.console.lock() else {
            warn!("Console lock poisoned");
            return;
        };
        if let Err(e) = console.say(&text) {
            warn!(error = %e, "Failed to print match event");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_render_board_layout() {
        let board = Board::from_rows("X../.O./..X").unwrap();
        let expected = "  | 0 1 2 |\n\
                        -----------\n\
                        0 | X . . |\n\
                        1 | . O . |\n\
                        2 | . . X |\n\
                        -----------";
        assert_eq!(render_board(&board), expected);
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut console = Console::new(Cursor::new(b"start easy easy\r\n".to_vec()), Vec::new());
        assert_eq!(
            console.read_line().unwrap().as_deref(),
            Some("start easy easy")
        );
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_line_tolerates_invalid_utf8() {
        let mut console = Console::new(Cursor::new(b"\xff\xfe\n1 1\n".to_vec()), Vec::new());
        let garbage = console.read_line().unwrap().unwrap();
        assert!(!garbage.is_empty());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("1 1"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_source_reports_rejections() {
        let console = Console::new(Cursor::new(b"1 1\n".to_vec()), Vec::new()).shared();
        let mut source = ConsoleSource::new(console.clone());
        assert_eq!(
            source.next_line(&Board::new(), Side::First).as_deref(),
            Some("1 1")
        );
        source.rejected(&InputRejection::NotNumbers);
        assert_eq!(source.next_line(&Board::new(), Side::First), None);

        let console = console.lock().unwrap();
        let written = String::from_utf8_lossy(console.output());
        assert!(written.contains("X to move"), "{written}");
        assert!(written.contains("whole numbers"), "{written}");
    }
}
