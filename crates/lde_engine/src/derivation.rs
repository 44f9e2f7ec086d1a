use std::fmt;

/// Ordered, append-only explanation lines produced by one solve call.
///
/// Each solve owns its derivation exclusively, so independent solves never
/// share state. Blank lines separate the derivation's sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Derivation {
    lines: Vec<String>,
}

impl Derivation {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
