use std::fmt::Display;

use serde::Serialize;

/// The three binary-asset families. They differ only in extensions and
/// output directory; the inlining rule is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
  Image,
  Font,
  Media,
}

impl AssetClass {
  pub fn output_subdir(self) -> &'static str {
    match self {
      Self::Image => "images/",
      Self::Font => "fonts/",
      Self::Media => "media/",
    }
  }
}

impl Display for AssetClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Image => write!(f, "image"),
      Self::Font => write!(f, "font"),
      Self::Media => write!(f, "media"),
    }
  }
}
