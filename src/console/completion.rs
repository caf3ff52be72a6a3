//! Inline completion with cycling.

/// Completion cycler over the command vocabulary.
///
/// Matches candidates against a typed prefix, case-insensitively, in
/// candidate order; repeated advances walk the match set and wrap around.
/// Handing in a different prefix restarts the cycle.
pub struct Completer {
    /// Prefix being cycled.
    prefix: String,
    /// Index into the match subsequence.
    cursor: usize,
    /// Whether a cycle is in progress.
    cycling: bool,
    /// Most recently returned completion.
    current: String,
}

impl Completer {
    pub const fn new() -> Self {
        Self {
            prefix: String::new(),
            cursor: 0,
            cycling: false,
            current: String::new(),
        }
    }

    /// Advance to the next candidate matching `prefix`, wrapping after the
    /// last match. Returns the candidate's stored casing, or `None` when
    /// nothing matches.
    pub fn advance<'a, I>(&mut self, prefix: &str, candidates: I) -> Option<&'a str>
    where
        I: Iterator<Item = &'a str>,
    {
        if !self.cycling || self.prefix != prefix {
            self.prefix.clear();
            self.prefix.push_str(prefix);
            self.cursor = 0;
            self.cycling = false;
        } else {
            self.cursor += 1;
        }

        let matches: Vec<&str> = candidates
            .filter(|c| matches_prefix(c, prefix))
            .collect();

        if matches.is_empty() {
            self.cycling = false;
            self.current.clear();
            return None;
        }

        if self.cursor >= matches.len() {
            self.cursor = 0;
        }

        self.cycling = true;
        self.current.clear();
        self.current.push_str(matches[self.cursor]);
        Some(matches[self.cursor])
    }

    /// The completion most recently handed out (empty before any).
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Length of the most recent completion; the console compares this
    /// against the caret to pick accept-vs-advance.
    pub fn current_len(&self) -> usize {
        self.current.len()
    }

    /// Forget cycle state (line cleared or submitted).
    pub fn reset(&mut self) {
        self.cycling = false;
        self.cursor = 0;
        self.current.clear();
    }
}

fn matches_prefix(candidate: &str, prefix: &str) -> bool {
    candidate.len() >= prefix.len()
        && candidate.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
