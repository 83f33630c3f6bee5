use std::fmt;

use super::types::{VulnCategory, Verdicts};

impl fmt::Display for VulnCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Verdicts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flagged = self.flagged();
        if flagged.is_empty() {
            return write!(f, "safe");
        }
        let names: Vec<&str> = flagged.iter().map(|c| c.as_str()).collect();
        write!(f, "vulnerable ({})", names.join(", "))
    }
}
