use std::fmt::Display;

use serde::Serialize;

use crate::{AssetClass, BuildMode};

/// What happens to a matched file. `Component` is composite: the single
/// source contributes a script half and a style half, enumerated via
/// directive expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pipeline {
  Script,
  Component,
  StyleExtract,
  StyleInlineFallback,
  BinaryAsset(AssetClass),
  Passthrough,
}

impl Pipeline {
  #[inline]
  pub fn is_style(self) -> bool {
    matches!(self, Self::StyleExtract | Self::StyleInlineFallback)
  }

  #[inline]
  pub fn is_binary_asset(self) -> bool {
    matches!(self, Self::BinaryAsset(_))
  }

  /// Extract in production, runtime style-tag injection in development.
  pub fn style_for(mode: BuildMode) -> Self {
    if mode.is_production() { Self::StyleExtract } else { Self::StyleInlineFallback }
  }
}

impl Display for Pipeline {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Script => write!(f, "script"),
      Self::Component => write!(f, "component"),
      Self::StyleExtract => write!(f, "style-extract"),
      Self::StyleInlineFallback => write!(f, "style-inline-fallback"),
      Self::BinaryAsset(class) => write!(f, "{class}-asset"),
      Self::Passthrough => write!(f, "passthrough"),
    }
  }
}
