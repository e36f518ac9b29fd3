use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

/// Set once per invocation and handed to the policy core explicitly. The
/// surrounding CLI derives it from flags or the environment and must have
/// rejected anything else before the core runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  Development,
  Production,
}

impl BuildMode {
  #[inline]
  pub fn is_production(self) -> bool {
    matches!(self, Self::Production)
  }
}

impl FromStr for BuildMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "development" | "dev" => Ok(Self::Development),
      "production" | "prod" => Ok(Self::Production),
      _ => Err(format!("Invalid mode \"{s}\".")),
    }
  }
}

impl Display for BuildMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

#[test]
fn test_from_str_rejects_unknown_modes() {
  assert_eq!("production".parse(), Ok(BuildMode::Production));
  assert_eq!("dev".parse(), Ok(BuildMode::Development));
  assert!("staging".parse::<BuildMode>().is_err());
}
