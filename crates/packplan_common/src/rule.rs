use arcstr::ArcStr;
use serde::Serialize;

use packplan_utils::path_ext;

use crate::{FilenameTemplate, Pipeline, ResolvedDirective};

/// Assets strictly smaller than this are embedded as data URIs instead of
/// emitted as files. One constant for images, fonts and media alike — the
/// classes share the limit deliberately.
pub const INLINE_LIMIT_BYTES: usize = 10000;

/// The set of file extensions a rule claims, compared ASCII
/// case-insensitively against the path's final dot segment.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ExtensionSet(Vec<String>);

impl ExtensionSet {
  pub fn new<I>(extensions: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<String>,
  {
    Self(extensions.into_iter().map(Into::into).collect())
  }

  pub fn matches(&self, extension: &str) -> bool {
    self.0.iter().any(|candidate| candidate.eq_ignore_ascii_case(extension))
  }
}

/// One classification rule. Rules are immutable once a rule set is built;
/// their position in the set is their precedence.
#[derive(Debug, Clone, Serialize)]
pub struct Rule {
  pub extensions: ExtensionSet,
  pub pipeline: Pipeline,
  pub output_subdir: ArcStr,
  pub filename_template: FilenameTemplate,
  pub inline_threshold_bytes: Option<usize>,
}

impl Rule {
  pub fn matches(&self, path: &str) -> bool {
    path_ext::extension(path).is_some_and(|extension| self.extensions.matches(extension))
  }

  pub fn directive(&self) -> ResolvedDirective {
    ResolvedDirective {
      pipeline: self.pipeline,
      output_subdir: self.output_subdir.clone(),
      filename_template: self.filename_template.clone(),
      inline_threshold_bytes: self.inline_threshold_bytes,
    }
  }
}

#[test]
fn test_extension_matching_ignores_case_and_query() {
  let rule = Rule {
    extensions: ExtensionSet::new(["png", "jpg", "jpeg", "gif", "svg"]),
    pipeline: Pipeline::BinaryAsset(crate::AssetClass::Image),
    output_subdir: arcstr::literal!("images/"),
    filename_template: FilenameTemplate::new("[name].[hash:8].[ext]"),
    inline_threshold_bytes: Some(INLINE_LIMIT_BYTES),
  };
  assert!(rule.matches("assets/LOGO.PNG"));
  assert!(rule.matches("logo.svg?v=2"));
  assert!(!rule.matches("notes.txt"));
  assert!(!rule.matches("png"));
}
