//! Decision outcome types.

use std::fmt;

/// Binary classification label derived from the phishing probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Phishing,
    Legitimate,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Phishing => write!(f, "phishing"),
            Label::Legitimate => write!(f, "legitimate"),
        }
    }
}

/// Outcome of one decision over a URL.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Host is on the trusted-suffix whitelist; classification skipped.
    Whitelisted,
    /// URL could not be decomposed; no features produced.
    Invalid,
    /// Classifier ran; probability is for the phishing class, in [0, 1].
    Classified { probability: f64, label: Label },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_display() {
        assert_eq!(Label::Phishing.to_string(), "phishing");
        assert_eq!(Label::Legitimate.to_string(), "legitimate");
    }
}
