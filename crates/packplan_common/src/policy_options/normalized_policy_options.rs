use crate::{BuildMode, FilenameTemplate};

#[derive(Debug)]
pub struct NormalizedPolicyOptions {
  pub mode: BuildMode,

  // --- Output
  pub dir: String,
  pub script_filenames: FilenameTemplate,
  pub style_filenames: FilenameTemplate,
  pub asset_filenames: FilenameTemplate,
  pub inline_limit: usize,
}
