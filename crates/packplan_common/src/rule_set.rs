use serde::Serialize;

use packplan_utils::path_ext;

use crate::{FilenameTemplate, Pipeline, ResolvedDirective, Rule};

/// Ordered rule table. Matching walks the rules in declared order and the
/// first hit wins; the serialized form enumerates them in that same order,
/// so the table doubles as documentation of the precedence.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
  rules: Vec<Rule>,
}

impl RuleSet {
  pub fn new(rules: Vec<Rule>) -> Self {
    Self { rules }
  }

  pub fn rules(&self) -> &[Rule] {
    &self.rules
  }

  pub fn first_match(&self, path: &str) -> Option<&Rule> {
    self.rules.iter().find(|rule| rule.matches(path))
  }

  /// Total over every input: unmatched paths degrade to a passthrough
  /// directive (copy verbatim) instead of failing.
  pub fn classify(&self, path: &str) -> ResolvedDirective {
    self.first_match(path).map_or_else(|| passthrough_directive(path), Rule::directive)
  }
}

fn passthrough_directive(path: &str) -> ResolvedDirective {
  let template =
    if path_ext::extension(path).is_some() { "[name].[ext]" } else { "[name]" };
  ResolvedDirective {
    pipeline: Pipeline::Passthrough,
    output_subdir: arcstr::literal!(""),
    filename_template: FilenameTemplate::new(template),
    inline_threshold_bytes: None,
  }
}

#[test]
fn test_classify_is_total() {
  let empty = RuleSet::new(vec![]);
  let directive = empty.classify("externals/robots.txt");
  assert_eq!(directive.pipeline, Pipeline::Passthrough);
  assert_eq!(directive.output_subdir.as_str(), "");
  assert_eq!(directive.inline_threshold_bytes, None);

  let extensionless = empty.classify("LICENSE");
  assert_eq!(extensionless.filename_template.template(), "[name]");
}
