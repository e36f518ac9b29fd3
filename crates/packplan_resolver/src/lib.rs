mod hints;

pub use crate::hints::ResolveHints;
