use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Forecast aggregation periods accepted by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [Frequency::Daily, Frequency::Weekly, Frequency::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFrequencyError(pub String);

impl fmt::Display for ParseFrequencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid frequency '{}', must be Daily, Weekly, or Monthly", self.0)
    }
}

impl std::error::Error for ParseFrequencyError {}

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    /// Case-insensitive, mirroring how the server normalizes the value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            _ => Err(ParseFrequencyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("weekly".parse::<Frequency>(), Ok(Frequency::Weekly));
        assert_eq!("MONTHLY".parse::<Frequency>(), Ok(Frequency::Monthly));
        assert_eq!(" Daily ".parse::<Frequency>(), Ok(Frequency::Daily));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "hourly".parse::<Frequency>().unwrap_err();
        assert!(err.to_string().contains("hourly"));
    }
}
