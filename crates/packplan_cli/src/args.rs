use clap::Args;

use crate::types::build_mode::BuildModeArg;

#[derive(Args)]
pub struct SelectionArgs {
  /// Project-relative paths to classify; a trailing `?query` is allowed.
  pub paths: Vec<String>,

  /// Overrides the BUILD_MODE environment variable.
  #[clap(long, value_enum)]
  pub mode: Option<BuildModeArg>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  #[clap(long)]
  pub script_filenames: Option<String>,

  #[clap(long)]
  pub style_filenames: Option<String>,

  #[clap(long)]
  pub asset_filenames: Option<String>,

  #[clap(long)]
  pub inline_limit: Option<usize>,
}

#[derive(Args)]
pub struct ReportArgs {
  /// Print the rule table as JSON instead of classifying paths.
  #[clap(long)]
  pub rules: bool,

  /// Print the lookup candidates for a module specifier.
  #[clap(long, value_name = "SPECIFIER")]
  pub resolve: Option<String>,
}
