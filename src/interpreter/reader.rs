use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::error::Error;

/// Reads every line of the file at `path`.
///
/// Line order is preserved and line terminators (`\n` or `\r\n`) are removed.
///
/// # Errors
/// Returns [`Error::Io`] if the file cannot be opened or read.
pub fn read_all_lines(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let io_error = |source| Error::Io { path: path.display().to_string(),
                                        source };

    let file = File::open(path).map_err(io_error)?;
    let lines = read_lines(BufReader::new(file)).map_err(io_error)?;

    debug!(path = %path.display(), lines = lines.len(), "read source file");
    Ok(lines)
}

/// Reads every line of a buffered stream.
///
/// # Errors
/// Propagates any I/O error from the stream, including invalid UTF-8.
///
/// # Example
/// ```
/// use numscript::interpreter::reader::read_lines;
///
/// let lines = read_lines("a = 2\r\nprint a\n".as_bytes()).unwrap();
/// assert_eq!(lines, ["a = 2", "print a"]);
/// ```
pub fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
