//! Signal phase as reported by predictors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Current state of a traffic signal.
///
/// Deserialization never fails: any value other than `GREEN` or `RED`
/// (case-insensitive) becomes [`SignalPhase::Amber`], the conservative
/// "prepare to stop" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum SignalPhase {
    Green,
    Red,
    Amber,
}

impl SignalPhase {
    /// Parses a wire value, folding anything unrecognized into `Amber`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "GREEN" => SignalPhase::Green,
            "RED" => SignalPhase::Red,
            "AMBER" | "YELLOW" => SignalPhase::Amber,
            other => {
                tracing::debug!(phase = other, "Unrecognized signal phase, treating as AMBER");
                SignalPhase::Amber
            }
        }
    }

    /// Returns the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalPhase::Green => "GREEN",
            SignalPhase::Red => "RED",
            SignalPhase::Amber => "AMBER",
        }
    }
}

impl From<String> for SignalPhase {
    fn from(value: String) -> Self {
        SignalPhase::parse(&value)
    }
}

impl fmt::Display for SignalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_phases() {
        assert_eq!(SignalPhase::parse("GREEN"), SignalPhase::Green);
        assert_eq!(SignalPhase::parse("RED"), SignalPhase::Red);
        assert_eq!(SignalPhase::parse("AMBER"), SignalPhase::Amber);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(SignalPhase::parse("green"), SignalPhase::Green);
        assert_eq!(SignalPhase::parse(" Red "), SignalPhase::Red);
    }

    #[test]
    fn test_unrecognized_phase_is_amber() {
        assert_eq!(SignalPhase::parse("purple"), SignalPhase::Amber);
        assert_eq!(SignalPhase::parse(""), SignalPhase::Amber);
    }

    #[test]
    fn test_deserialize_folds_garbage_into_amber() {
        let phase: SignalPhase = serde_json::from_str("\"FLASHING\"").unwrap();
        assert_eq!(phase, SignalPhase::Amber);
    }

    #[test]
    fn test_serialize_uppercase() {
        assert_eq!(serde_json::to_string(&SignalPhase::Red).unwrap(), "\"RED\"");
        assert_eq!(SignalPhase::Green.to_string(), "GREEN");
    }
}
