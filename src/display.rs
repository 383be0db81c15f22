use std::io::IsTerminal;

/// Where and how the rendered report goes.
pub struct Display {
    colored: bool,
}

impl Display {
    /// Colors only make sense on a terminal.
    ///
    /// Auto-detecting this keeps escape codes out of pipes and files, so
    /// `llm-price-tracker > prices.txt` works without remembering `--unformatted`.
    pub fn new(unformatted: bool) -> Self {
        Display {
            colored: !unformatted && std::io::stdout().is_terminal(),
        }
    }

    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Applies the color decision to `colored`'s global switch.
    // Has to run before anything is rendered.
    pub fn configure(&self) {
        colored::control::set_override(self.colored);
    }

    pub fn print(&self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unformatted_never_colors() {
        assert!(!Display::new(true).is_colored());
    }
}
