mod classifier;
mod emit_plan;
mod normalize_options;
mod rule_set;

pub use crate::{
  classifier::{Classifier, classify, expand},
  emit_plan::{EmitPlan, plan_asset_emit, plan_chunk_emit},
  normalize_options::normalize_options,
  rule_set::build_rule_set,
};
pub use packplan_common::*;
pub use packplan_error::{BuildError, BuildResult};
pub use packplan_resolver::ResolveHints;
