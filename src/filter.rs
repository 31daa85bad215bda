use std::io;
use std::io::BufRead;

pub const DEFAULT_MAX_LINE_LEN: usize = 100;

// Oversized lines in BOCA exports are corrupt; drop them whole before the
// XML parser ever sees them. The limit excludes the line terminator.
pub fn strip_long_lines<R: BufRead>(reader: R, max_len: usize) -> io::Result<String> {
    let mut filtered = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.len() > max_len {
            continue;
        }
        filtered.push_str(&line);
        filtered.push('\n');
    }
    Ok(filtered)
}
