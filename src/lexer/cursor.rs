/// Marks the end of the buffer. It is appended to every source so the
/// scanning functions can always peek one character ahead.
pub const SENTINEL: char = '\0';

/// Position tracking over an immutable, sentinel-terminated source buffer.
///
/// `start` marks the beginning of the lexeme being scanned and `pos` the
/// character currently considered; `lexeme()` is everything in between.
/// Positions are byte offsets, `line` and `column` count characters.
#[derive(Debug, Clone)]
pub struct SourceCursor {
    source: String,
    start: usize,
    pos: usize,
    line: u32,
    column: u32,
}

impl SourceCursor {
    pub fn new(mut source: String) -> Self {
        source.push(SENTINEL);
        SourceCursor {
            source,
            start: 0,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// True once the cursor sits on the appended sentinel.
    pub fn at_end(&self) -> bool {
        self.pos + SENTINEL.len_utf8() >= self.source.len()
    }

    pub fn peek(&self) -> char {
        self.remainder().chars().next().unwrap_or(SENTINEL)
    }

    /// Consumes and returns the current character. Never moves past the
    /// sentinel.
    pub fn next(&mut self) -> char {
        let c = self.peek();
        if !self.at_end() {
            self.pos += c.len_utf8();
            self.column += 1;
        }
        c
    }

    /// Steps back over the previously consumed character.
    pub fn backup(&mut self) {
        if let Some(c) = self.source[..self.pos].chars().next_back() {
            self.pos -= c.len_utf8();
            self.column -= 1;
            if self.start > self.pos {
                self.start = self.pos;
            }
        }
    }

    pub fn accept(&mut self, valid: char) -> bool {
        self.accept_if(|c| c == valid)
    }

    /// Consumes the current character if `predicate` holds for it. The
    /// sentinel is never accepted.
    pub fn accept_if<F: Fn(char) -> bool>(&mut self, predicate: F) -> bool {
        if self.at_end() {
            return false;
        }
        let c = self.next();
        if predicate(c) {
            true
        } else {
            self.backup();
            false
        }
    }

    /// Consumes the current character unless it is in `invalid` or is the
    /// sentinel.
    pub fn not(&mut self, invalid: &[char]) -> bool {
        self.accept_if(|c| !invalid.contains(&c))
    }

    pub fn check(&self, valid: char) -> bool {
        !self.at_end() && self.peek() == valid
    }

    pub fn check_digit(&self) -> bool {
        !self.at_end() && self.peek().is_ascii_digit()
    }

    /// Checks whether the source continues with `valid` without moving.
    pub fn matches(&self, valid: &str) -> bool {
        self.remainder().starts_with(valid)
    }

    /// Consumes `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            self.next();
        }
    }

    /// Moves the lexeme start up to the current position.
    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    /// Consumes the current character and drops it from the lexeme.
    pub fn skip(&mut self) {
        self.next();
        self.ignore();
    }

    pub fn lexeme(&self) -> &str {
        &self.source[self.start..self.pos]
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }
}
