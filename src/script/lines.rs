//! Lazy sequence of candidate commands derived from script text.

/// Reserved command that ends the replay successfully.
pub const EXIT_DIRECTIVE: &str = "exit";

/// One non-trivial script line, trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptCommand<'a> {
    /// 1-based line number in the source file
    pub line: usize,
    pub text: &'a str,
}

impl ScriptCommand<'_> {
    /// Whole-line, case-insensitive match on `exit`. `exit now` is an ordinary command.
    pub fn is_exit(&self) -> bool {
        self.text.to_lowercase() == EXIT_DIRECTIVE
    }
}

/// Lines split on `\n`, `\r\n` or a lone `\r`. No trailing empty line.
#[derive(Debug, Clone)]
struct SourceLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(end) = self.rest.find(|c: char| c == '\n' || c == '\r') else {
            return Some(std::mem::take(&mut self.rest));
        };
        let line = &self.rest[..end];
        let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = &self.rest[end + terminator..];
        Some(line)
    }
}

/// Iterator over the commands of a script, skipping blanks and `#` comments.
///
/// Borrowing the source keeps it restartable: calling [`commands`] again on the
/// same text starts from the first line.
#[derive(Debug, Clone)]
pub struct ScriptCommands<'a> {
    lines: std::iter::Enumerate<SourceLines<'a>>,
}

impl<'a> Iterator for ScriptCommands<'a> {
    type Item = ScriptCommand<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, raw) in self.lines.by_ref() {
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            return Some(ScriptCommand {
                line: index + 1,
                text,
            });
        }
        None
    }
}

/// Commands of `source` in file order.
pub fn commands(source: &str) -> ScriptCommands<'_> {
    ScriptCommands {
        lines: SourceLines { rest: source }.enumerate(),
    }
}
