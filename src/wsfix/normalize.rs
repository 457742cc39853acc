//! # Line Normalization
//!
//! Pure text transformation: no filesystem access happens here. Callers hand in
//! the full content of a file and get back a [`NormalizeOutcome`] describing the
//! rewritten content and whether anything changed.
//!
//! ## Line model
//!
//! Content is split after each `\n`. Each [`Line`] keeps its own break marker
//! (`\n`, `\r\n`, or none for an unterminated last line):
//!
//! ```text
//! "foo   \nbar\r\nbaz\t"  →  [("foo   ", "\n"), ("bar", "\r\n"), ("baz\t", "")]
//! ```
//!
//! Normalizing a line strips the run of spaces and tabs in front of the break
//! and re-attaches the same break. Line endings are never converted, the
//! number of lines never changes, and lines without trailing blanks are
//! returned byte-identical.
//!
//! Normalization is idempotent: `normalize(normalize(c).content)` reports no
//! changed lines.

const TRAILING: &[char] = &[' ', '\t'];

/// One line of a file, borrowed from the original content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Text before the break marker.
    pub text: &'a str,
    /// `"\n"`, `"\r\n"` or `""`.
    pub ending: &'a str,
}

impl<'a> Line<'a> {
    fn split(raw: &'a str) -> Self {
        let text_len = if raw.ends_with("\r\n") {
            raw.len() - 2
        } else if raw.ends_with('\n') {
            raw.len() - 1
        } else {
            raw.len()
        };
        let (text, ending) = raw.split_at(text_len);
        Self { text, ending }
    }

    pub fn terminated(&self) -> bool {
        !self.ending.is_empty()
    }

    /// Line text with trailing spaces and tabs removed.
    pub fn body(&self) -> &'a str {
        self.text.trim_end_matches(TRAILING)
    }

    /// Appends the normalized form of this line to `out`.
    /// Returns true if it differs from the original line.
    fn normalize_into(&self, out: &mut String) -> bool {
        let body = self.body();
        out.push_str(body);
        out.push_str(self.ending);
        body.len() != self.text.len()
    }
}

/// The ordered lines of a file's content at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSequence<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> LineSequence<'a> {
    pub fn parse(content: &'a str) -> Self {
        let lines = content
            .split_inclusive('\n')
            .map(Line::split)
            .collect();
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line<'a>> {
        self.lines.iter()
    }

    pub fn normalize(&self) -> NormalizeOutcome {
        let capacity = self
            .lines
            .iter()
            .map(|l| l.text.len() + l.ending.len())
            .sum();
        let mut content = String::with_capacity(capacity);
        let mut changed_lines = 0;

        for line in &self.lines {
            if line.normalize_into(&mut content) {
                changed_lines += 1;
            }
        }

        NormalizeOutcome {
            content,
            changed_lines,
        }
    }
}

/// Result of normalizing one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOutcome {
    pub content: String,
    pub changed_lines: usize,
}

impl NormalizeOutcome {
    /// The per-file change record: true if any line differed.
    pub fn is_modified(&self) -> bool {
        self.changed_lines > 0
    }
}

/// Strips trailing whitespace from every line of `content`.
pub fn normalize(content: &str) -> NormalizeOutcome {
    LineSequence::parse(content).normalize()
}
