mod asset_class;
mod build_mode;
mod directive;
mod filename_template;
mod pipeline;
mod policy_options;
mod rule;
mod rule_set;
mod sourcemap;

pub use crate::{
  asset_class::AssetClass,
  build_mode::BuildMode,
  directive::ResolvedDirective,
  filename_template::{FileNameRenderOptions, FilenameTemplate},
  pipeline::Pipeline,
  policy_options::{PolicyOptions, normalized_policy_options::NormalizedPolicyOptions},
  rule::{ExtensionSet, INLINE_LIMIT_BYTES, Rule},
  rule_set::RuleSet,
  sourcemap::SourcemapKind,
};
