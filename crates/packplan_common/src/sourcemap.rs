use std::fmt::Display;

use serde::Serialize;

use crate::BuildMode;

/// Sourcemap flavor per mode: fast inline eval maps while developing, full
/// standalone `.map` files for production artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourcemapKind {
  EvalInline,
  Separate,
}

impl SourcemapKind {
  pub fn for_mode(mode: BuildMode) -> Self {
    if mode.is_production() { Self::Separate } else { Self::EvalInline }
  }

  /// Only separate maps produce an extra output file next to the bundle.
  pub fn emits_map_file(self) -> bool {
    matches!(self, Self::Separate)
  }
}

impl Display for SourcemapKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::EvalInline => write!(f, "eval-inline"),
      Self::Separate => write!(f, "separate"),
    }
  }
}

#[test]
fn test_for_mode() {
  assert_eq!(SourcemapKind::for_mode(BuildMode::Development), SourcemapKind::EvalInline);
  assert_eq!(SourcemapKind::for_mode(BuildMode::Production), SourcemapKind::Separate);
  assert!(SourcemapKind::for_mode(BuildMode::Production).emits_map_file());
  assert!(!SourcemapKind::for_mode(BuildMode::Development).emits_map_file());
}
