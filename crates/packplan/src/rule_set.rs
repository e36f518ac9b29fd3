use packplan_common::{
  AssetClass, BuildMode, ExtensionSet, NormalizedPolicyOptions, Pipeline, PolicyOptions, Rule,
  RuleSet,
};

use crate::normalize_options::normalize_options;

/// Builds a fresh, fully-formed rule table for a mode. Nothing is appended
/// to a shared table afterwards; mode-conditional choices (the style
/// pipeline) are baked in at construction time.
///
/// Declaration order is precedence order: script, component, styles, then
/// the binary-asset classes.
pub fn build_rule_set(mode: BuildMode) -> RuleSet {
  let options = normalize_options(PolicyOptions { mode: Some(mode), ..PolicyOptions::default() });
  build_rule_set_with(&options)
}

pub(crate) fn build_rule_set_with(options: &NormalizedPolicyOptions) -> RuleSet {
  let style_pipeline = Pipeline::style_for(options.mode);

  let binary_rule = |class: AssetClass, extensions: &[&str]| Rule {
    extensions: ExtensionSet::new(extensions.iter().copied()),
    pipeline: Pipeline::BinaryAsset(class),
    output_subdir: class.output_subdir().into(),
    filename_template: options.asset_filenames.clone(),
    inline_threshold_bytes: Some(options.inline_limit),
  };

  RuleSet::new(vec![
    Rule {
      extensions: ExtensionSet::new(["js"]),
      pipeline: Pipeline::Script,
      output_subdir: arcstr::literal!("js/"),
      filename_template: options.script_filenames.clone(),
      inline_threshold_bytes: None,
    },
    Rule {
      extensions: ExtensionSet::new(["vue"]),
      pipeline: Pipeline::Component,
      output_subdir: arcstr::literal!("js/"),
      filename_template: options.script_filenames.clone(),
      inline_threshold_bytes: None,
    },
    Rule {
      extensions: ExtensionSet::new(["css"]),
      pipeline: style_pipeline,
      output_subdir: arcstr::literal!("css/"),
      filename_template: options.style_filenames.clone(),
      inline_threshold_bytes: None,
    },
    Rule {
      extensions: ExtensionSet::new(["less"]),
      pipeline: style_pipeline,
      output_subdir: arcstr::literal!("css/"),
      filename_template: options.style_filenames.clone(),
      inline_threshold_bytes: None,
    },
    binary_rule(AssetClass::Image, &["png", "jpg", "jpeg", "gif", "svg"]),
    binary_rule(AssetClass::Font, &["woff", "woff2", "eot", "ttf", "otf"]),
    binary_rule(AssetClass::Media, &["swf", "mp4", "webm", "ogg", "mp3", "wav", "flac", "aac"]),
  ])
}

#[test]
fn test_declaration_order_is_precedence_order() {
  let rules = build_rule_set(BuildMode::Production);
  let pipelines = rules.rules().iter().map(|rule| rule.pipeline).collect::<Vec<_>>();
  assert_eq!(
    pipelines,
    vec![
      Pipeline::Script,
      Pipeline::Component,
      Pipeline::StyleExtract,
      Pipeline::StyleExtract,
      Pipeline::BinaryAsset(AssetClass::Image),
      Pipeline::BinaryAsset(AssetClass::Font),
      Pipeline::BinaryAsset(AssetClass::Media),
    ]
  );
}

#[test]
fn test_first_match_wins_over_later_rules() {
  // A rule set where a catch-all claims every extension a later rule also
  // claims; the earlier declaration must win.
  let mut rules = build_rule_set(BuildMode::Production).rules().to_vec();
  let shadowing = Rule {
    extensions: ExtensionSet::new(["vue", "css", "png"]),
    pipeline: Pipeline::Passthrough,
    output_subdir: arcstr::literal!(""),
    filename_template: packplan_common::FilenameTemplate::new("[name].[ext]"),
    inline_threshold_bytes: None,
  };
  rules.insert(0, shadowing);
  let shadowed = RuleSet::new(rules);
  assert_eq!(shadowed.classify("Header.vue").pipeline, Pipeline::Passthrough);
  assert_eq!(shadowed.classify("logo.png").pipeline, Pipeline::Passthrough);
  // The un-shadowed table resolves the same paths to the declared rules.
  let rules = build_rule_set(BuildMode::Production);
  assert_eq!(rules.classify("Header.vue").pipeline, Pipeline::Component);
  assert_eq!(rules.classify("logo.png").pipeline, Pipeline::BinaryAsset(AssetClass::Image));
}

#[test]
fn test_threshold_is_shared_across_binary_classes() {
  let rules = build_rule_set(BuildMode::Development);
  let thresholds = rules
    .rules()
    .iter()
    .filter(|rule| rule.pipeline.is_binary_asset())
    .map(|rule| rule.inline_threshold_bytes)
    .collect::<Vec<_>>();
  assert_eq!(thresholds, vec![Some(10000), Some(10000), Some(10000)]);
}
