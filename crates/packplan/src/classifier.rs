use packplan_common::{
  BuildMode, FilenameTemplate, NormalizedPolicyOptions, Pipeline, PolicyOptions, ResolvedDirective,
  RuleSet,
};

use crate::{normalize_options::normalize_options, rule_set::build_rule_set_with};

/// Owns a normalized option set and the rule table built from it. Both are
/// read-only after construction, so a classifier can be shared across
/// threads freely.
pub struct Classifier {
  options: NormalizedPolicyOptions,
  rules: RuleSet,
}

impl Classifier {
  pub fn new(options: PolicyOptions) -> Self {
    let options = normalize_options(options);
    let rules = build_rule_set_with(&options);
    Self { options, rules }
  }

  pub fn options(&self) -> &NormalizedPolicyOptions {
    &self.options
  }

  pub fn rules(&self) -> &RuleSet {
    &self.rules
  }

  pub fn mode(&self) -> BuildMode {
    self.options.mode
  }

  pub fn classify(&self, path: &str) -> ResolvedDirective {
    self.rules.classify(path)
  }

  /// Composite directives fan out into their concrete halves; everything
  /// else expands to itself.
  pub fn expand(&self, directive: &ResolvedDirective) -> Vec<ResolvedDirective> {
    expand_with(
      directive,
      self.options.mode,
      &self.options.script_filenames,
      &self.options.style_filenames,
    )
  }
}

/// Stand-alone classification against the default scaffold policy.
pub fn classify(path: &str, mode: BuildMode) -> ResolvedDirective {
  Classifier::new(PolicyOptions { mode: Some(mode), ..PolicyOptions::default() }).classify(path)
}

/// Stand-alone expansion against the default scaffold policy.
pub fn expand(directive: &ResolvedDirective, mode: BuildMode) -> Vec<ResolvedDirective> {
  let options = normalize_options(PolicyOptions { mode: Some(mode), ..PolicyOptions::default() });
  expand_with(directive, mode, &options.script_filenames, &options.style_filenames)
}

fn expand_with(
  directive: &ResolvedDirective,
  mode: BuildMode,
  script_filenames: &FilenameTemplate,
  style_filenames: &FilenameTemplate,
) -> Vec<ResolvedDirective> {
  match directive.pipeline {
    Pipeline::Component => vec![
      ResolvedDirective {
        pipeline: Pipeline::Script,
        output_subdir: arcstr::literal!("js/"),
        filename_template: script_filenames.clone(),
        inline_threshold_bytes: None,
      },
      ResolvedDirective {
        pipeline: Pipeline::style_for(mode),
        output_subdir: arcstr::literal!("css/"),
        filename_template: style_filenames.clone(),
        inline_threshold_bytes: None,
      },
    ],
    _ => vec![directive.clone()],
  }
}

#[test]
fn test_styles_follow_the_mode() {
  for path in ["app.css", "theme.less"] {
    assert_eq!(classify(path, BuildMode::Development).pipeline, Pipeline::StyleInlineFallback);
    assert_eq!(classify(path, BuildMode::Production).pipeline, Pipeline::StyleExtract);
  }
}

#[test]
fn test_query_string_never_changes_the_directive() {
  for mode in [BuildMode::Development, BuildMode::Production] {
    assert_eq!(classify("logo.svg?v=2", mode), classify("logo.svg", mode));
    assert_eq!(classify("fonts/icon.woff2?#iefix", mode), classify("fonts/icon.woff2", mode));
  }
}

#[test]
fn test_classify_is_idempotent() {
  let first = classify("components/Header.vue", BuildMode::Production);
  let second = classify("components/Header.vue", BuildMode::Production);
  assert_eq!(first, second);
}

#[test]
fn test_component_expands_into_script_and_style_halves() {
  let directive = classify("components/Header.vue", BuildMode::Production);
  assert_eq!(directive.pipeline, Pipeline::Component);

  let halves = expand(&directive, BuildMode::Production);
  assert_eq!(halves.len(), 2);

  let script = &halves[0];
  assert_eq!(script.pipeline, Pipeline::Script);
  assert_eq!(script.output_subdir.as_str(), "js/");
  assert_eq!(script.filename_template.template(), "[name].[chunkhash:8].js");

  let style = &halves[1];
  assert_eq!(style.pipeline, Pipeline::StyleExtract);
  assert_eq!(style.output_subdir.as_str(), "css/");
  assert_eq!(style.filename_template.template(), "[name].[chunkhash:8].css");
}

#[test]
fn test_component_style_half_follows_the_mode() {
  let directive = classify("components/Header.vue", BuildMode::Development);
  let halves = expand(&directive, BuildMode::Development);
  assert_eq!(halves[1].pipeline, Pipeline::StyleInlineFallback);
}

#[test]
fn test_non_composite_directives_expand_to_themselves() {
  let directive = classify("index.js", BuildMode::Production);
  assert_eq!(expand(&directive, BuildMode::Production), vec![directive]);
}

#[test]
fn test_unmatched_paths_pass_through() {
  let directive = classify("externals/robots.txt", BuildMode::Production);
  assert_eq!(directive.pipeline, Pipeline::Passthrough);
  let directive = classify("Makefile", BuildMode::Development);
  assert_eq!(directive.pipeline, Pipeline::Passthrough);
}
