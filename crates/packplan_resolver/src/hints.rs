use itertools::Itertools;

use packplan_utils::indexmap::FxIndexMap;

/// Module-resolution policy as plain data: the extension probe order and an
/// ordered alias table. No filesystem probing happens here; the external
/// resolver owns that.
#[derive(Debug, Clone)]
pub struct ResolveHints {
  extensions: Vec<String>,
  aliases: FxIndexMap<String, String>,
}

impl Default for ResolveHints {
  fn default() -> Self {
    Self {
      extensions: vec!["js".to_string(), "vue".to_string(), "json".to_string()],
      aliases: FxIndexMap::default(),
    }
  }
}

impl ResolveHints {
  pub fn new<I>(extensions: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<String>,
  {
    Self {
      extensions: extensions.into_iter().map(Into::into).collect(),
      aliases: FxIndexMap::default(),
    }
  }

  /// Registers an alias. A key ending in `$` matches the whole specifier
  /// exactly; any other key matches the specifier itself or a
  /// `key/`-prefixed one. Aliases apply in registration order, first hit
  /// wins.
  pub fn alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
    self.aliases.insert(from.into(), to.into());
    self
  }

  pub fn extensions(&self) -> &[String] {
    &self.extensions
  }

  pub fn apply_alias(&self, specifier: &str) -> Option<String> {
    for (key, target) in &self.aliases {
      if let Some(exact) = key.strip_suffix('$') {
        if specifier == exact {
          return Some(target.clone());
        }
      } else if specifier == key {
        return Some(target.clone());
      } else if let Some(rest) = specifier.strip_prefix(key.as_str()) {
        if let Some(rest) = rest.strip_prefix('/') {
          return Some(format!("{target}/{rest}"));
        }
      }
    }
    None
  }

  /// Lookup candidates for a specifier, in probe order: the aliased (or
  /// literal) path first, then one candidate per configured extension.
  pub fn candidates(&self, specifier: &str) -> Vec<String> {
    let resolved = self.apply_alias(specifier).unwrap_or_else(|| specifier.to_string());
    std::iter::once(resolved.clone())
      .chain(self.extensions.iter().map(|extension| format!("{resolved}.{extension}")))
      .unique()
      .collect()
  }
}

#[cfg(test)]
fn scaffold_hints() -> ResolveHints {
  ResolveHints::default()
    .alias("vue$", "vue/dist/vue.common.js")
    .alias("assets", "src/assets")
    .alias("components", "src/components")
}

#[test]
fn test_exact_alias_only_matches_whole_specifier() {
  let hints = scaffold_hints();
  assert_eq!(hints.apply_alias("vue"), Some("vue/dist/vue.common.js".to_string()));
  assert_eq!(hints.apply_alias("vue/dist/vue.esm.js"), None);
}

#[test]
fn test_prefix_alias_rewrites_segment_boundaries() {
  let hints = scaffold_hints();
  assert_eq!(hints.apply_alias("components/Header"), Some("src/components/Header".to_string()));
  assert_eq!(hints.apply_alias("components"), Some("src/components".to_string()));
  // `componentsX` shares the prefix bytes but not the segment.
  assert_eq!(hints.apply_alias("componentsX/Header"), None);
}

#[test]
fn test_candidates_follow_probe_order() {
  let hints = scaffold_hints();
  assert_eq!(
    hints.candidates("components/Header"),
    vec![
      "src/components/Header".to_string(),
      "src/components/Header.js".to_string(),
      "src/components/Header.vue".to_string(),
      "src/components/Header.json".to_string(),
    ]
  );
}
