use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Removes every trailing `\n` and `\r` byte. An empty or all line-ending
/// input yields an empty slice.
#[inline]
#[must_use]
pub fn trim_line_ending(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |i| i + 1);
    &line[..end]
}

/// Reads one pattern per line from `reader`. Line endings are trimmed and
/// blank lines are skipped, since an empty pattern cannot be searched for.
///
/// ### Errors
///
/// Any I/O error from `reader`.
pub fn read_patterns<R: BufRead>(mut reader: R) -> std::io::Result<Vec<Vec<u8>>> {
    let mut patterns = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let pattern = trim_line_ending(&buf);
        if !pattern.is_empty() {
            patterns.push(pattern.to_vec());
        }
    }

    Ok(patterns)
}

/// Opens `path` and reads one pattern per line. See [`read_patterns`].
///
/// ### Errors
///
/// Any I/O error from opening or reading the file.
pub fn read_pattern_file<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<Vec<u8>>> {
    read_patterns(BufReader::new(File::open(path)?))
}
