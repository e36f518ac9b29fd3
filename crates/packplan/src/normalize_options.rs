use packplan_common::{
  BuildMode, FilenameTemplate, INLINE_LIMIT_BYTES, NormalizedPolicyOptions, PolicyOptions,
};

pub fn normalize_options(raw_options: PolicyOptions) -> NormalizedPolicyOptions {
  NormalizedPolicyOptions {
    mode: raw_options.mode.unwrap_or(BuildMode::Development),
    dir: raw_options.dir.unwrap_or_else(|| "dist".to_string()),
    script_filenames: FilenameTemplate::new(
      raw_options.script_filenames.unwrap_or_else(|| "[name].[chunkhash:8].js".to_string()),
    ),
    style_filenames: FilenameTemplate::new(
      raw_options.style_filenames.unwrap_or_else(|| "[name].[chunkhash:8].css".to_string()),
    ),
    asset_filenames: FilenameTemplate::new(
      raw_options.asset_filenames.unwrap_or_else(|| "[name].[hash:8].[ext]".to_string()),
    ),
    inline_limit: raw_options.inline_limit.unwrap_or(INLINE_LIMIT_BYTES),
  }
}

#[test]
fn test_defaults() {
  let options = normalize_options(PolicyOptions::default());
  assert_eq!(options.mode, BuildMode::Development);
  assert_eq!(options.dir, "dist");
  assert_eq!(options.script_filenames.template(), "[name].[chunkhash:8].js");
  assert_eq!(options.style_filenames.template(), "[name].[chunkhash:8].css");
  assert_eq!(options.asset_filenames.template(), "[name].[hash:8].[ext]");
  assert_eq!(options.inline_limit, INLINE_LIMIT_BYTES);
}
