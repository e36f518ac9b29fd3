use arcstr::ArcStr;
use serde::Serialize;

use crate::{FilenameTemplate, Pipeline};

/// The outcome of classifying one path: which pipeline handles it, where its
/// output lands and under what name, and (for binary assets) the inlining
/// threshold. Computed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDirective {
  pub pipeline: Pipeline,
  pub output_subdir: ArcStr,
  pub filename_template: FilenameTemplate,
  pub inline_threshold_bytes: Option<usize>,
}

impl ResolvedDirective {
  /// Inline decision for a concrete byte size. Always `false` for pipelines
  /// without a threshold.
  pub fn should_inline(&self, byte_len: usize) -> bool {
    self.inline_threshold_bytes.is_some_and(|limit| byte_len < limit)
  }
}

#[test]
fn test_should_inline_is_strictly_below_limit() {
  let directive = ResolvedDirective {
    pipeline: Pipeline::BinaryAsset(crate::AssetClass::Font),
    output_subdir: arcstr::literal!("fonts/"),
    filename_template: FilenameTemplate::new("[name].[hash:8].[ext]"),
    inline_threshold_bytes: Some(crate::INLINE_LIMIT_BYTES),
  };
  assert!(directive.should_inline(9999));
  assert!(!directive.should_inline(10000));
  assert!(!directive.should_inline(10001));
}
