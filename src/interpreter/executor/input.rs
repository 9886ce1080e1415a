use std::{collections::VecDeque, io::BufRead};

/// Splits a buffered input stream into whitespace-delimited words, reading
/// one line at a time and only when the previous line is used up.
///
/// # Example
/// ```
/// use numscript::interpreter::executor::input::WordReader;
///
/// let mut words = WordReader::new("7  12\n\n  -3\n".as_bytes());
///
/// assert_eq!(words.next_word().unwrap().as_deref(), Some("7"));
/// assert_eq!(words.next_word().unwrap().as_deref(), Some("12"));
/// assert_eq!(words.next_word().unwrap().as_deref(), Some("-3"));
/// assert_eq!(words.next_word().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct WordReader<R> {
    reader:  R,
    pending: VecDeque<String>,
}

impl<R: BufRead> WordReader<R> {
    /// Wraps a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self { reader,
               pending: VecDeque::new() }
    }

    /// Returns the next word, or `None` at the end of the stream.
    ///
    /// # Errors
    /// Propagates I/O errors from the underlying reader.
    pub fn next_word(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();

        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }

        Ok(self.pending.pop_front())
    }
}
