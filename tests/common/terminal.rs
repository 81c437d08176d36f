// Feed rendered output through a virtual terminal

/// Rows and columns of the virtual screen
pub const ROWS: u16 = 40;
pub const COLS: u16 = 120;

/// Process `output` (lines separated by `\n`) and return the parser.
pub fn screen_of(output: &str) -> vt100::Parser {
    let mut parser = vt100::Parser::new(ROWS, COLS, 0);
    parser.process(output.replace('\n', "\r\n").as_bytes());
    parser
}

/// Column of the first occurrence of `needle` on `row`
pub fn find_col(screen: &vt100::Screen, row: u16, needle: &str) -> Option<u16> {
    let line: String = screen.rows(0, COLS).nth(row as usize)?;
    let byte = line.find(needle)?;
    Some(line[..byte].chars().count() as u16)
}

/// Text of `row`, trailing blanks removed
pub fn row_text(screen: &vt100::Screen, row: u16) -> String {
    screen
        .rows(0, COLS)
        .nth(row as usize)
        .unwrap_or_default()
        .trim_end()
        .to_string()
}
