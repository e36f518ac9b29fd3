use std::{
  fmt,
  ops::{Deref, DerefMut},
};

/// Every error produced while evaluating a policy run. Callers usually
/// surface all of them at once instead of stopping at the first.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn msg(message: impl Into<String>) -> Self {
    Self(vec![anyhow::anyhow!(message.into())])
  }

  pub fn push(&mut self, error: anyhow::Error) {
    self.0.push(error);
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_display_joins_errors() {
  let mut error = BuildError::msg("first");
  error.push(anyhow::anyhow!("second"));
  assert_eq!(error.to_string(), "first\nsecond");
}
