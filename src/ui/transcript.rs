// Output transcript shown in the output pane

/// Captured report lines, oldest first
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript { lines: Vec::new() }
    }

    /// Append text, one entry per line
    pub fn print(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        // Keep blank separator lines but drop the one left by a trailing newline
        let mut parts: Vec<&str> = text.split('\n').collect();
        if parts.len() > 1 && parts.last().is_some_and(|s| s.is_empty()) {
            parts.pop();
        }
        self.lines.extend(parts.into_iter().map(str::to_string));
    }

    /// Get all lines
    pub fn get_output(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_splits_lines() {
        let mut transcript = Transcript::new();
        transcript.print("Your Cart:\nTotal: $1.00\n");
        transcript.print("Cart cleared.");
        assert_eq!(
            transcript.get_output(),
            ["Your Cart:", "Total: $1.00", "Cart cleared."]
        );
    }
}
