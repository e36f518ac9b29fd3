use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum BuildModeArg {
  Development,
  Production,
}

impl From<BuildModeArg> for packplan::BuildMode {
  fn from(value: BuildModeArg) -> Self {
    match value {
      BuildModeArg::Development => packplan::BuildMode::Development,
      BuildModeArg::Production => packplan::BuildMode::Production,
    }
  }
}
