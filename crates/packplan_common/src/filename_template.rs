use serde::Serialize;

/// Values substituted into a template. Hash values are full hex digests;
/// the template's `:len` suffix decides how much of them survives.
#[derive(Debug, Default)]
pub struct FileNameRenderOptions<'a> {
  pub name: Option<&'a str>,
  pub hash: Option<&'a str>,
  pub chunk_hash: Option<&'a str>,
  pub ext: Option<&'a str>,
}

/// Output-name pattern over the tokens `[name]`, `[ext]`, `[hash]`,
/// `[hash:len]`, `[chunkhash]` and `[chunkhash:len]`. `[hash]` is a
/// single-file content fingerprint; `[chunkhash]` fingerprints the whole
/// chunk, so the two invalidate caches on different events and are never
/// interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  pub fn new(template: impl Into<String>) -> Self {
    Self { template: template.into() }
  }

  pub fn template(&self) -> &str {
    &self.template
  }

  pub fn has_hash_pattern(&self) -> bool {
    self.template.contains("[hash") || self.template.contains("[chunkhash")
  }

  /// Tokens with no value in `options` are kept literally, so a forgotten
  /// substitution is visible in the output instead of silently vanishing.
  pub fn render(&self, options: &FileNameRenderOptions) -> String {
    let mut out = String::with_capacity(self.template.len());
    let mut rest = self.template.as_str();
    while let Some(open) = rest.find('[') {
      out.push_str(&rest[..open]);
      let tail = &rest[open..];
      let Some(close) = tail.find(']') else {
        out.push_str(tail);
        return out;
      };
      match token_value(&tail[1..close], options) {
        Some(value) => out.push_str(value),
        None => out.push_str(&tail[..=close]),
      }
      rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
  }
}

fn token_value<'a>(token: &str, options: &FileNameRenderOptions<'a>) -> Option<&'a str> {
  let (kind, len) = match token.split_once(':') {
    Some((kind, len)) => (kind, Some(len.parse::<usize>().ok()?)),
    None => (token, None),
  };
  let value = match kind {
    "name" => options.name?,
    "ext" => options.ext?,
    "hash" => options.hash?,
    "chunkhash" => options.chunk_hash?,
    _ => return None,
  };
  match len {
    // Truncation only applies to the hash tokens.
    Some(len) if matches!(kind, "hash" | "chunkhash") => Some(&value[..len.min(value.len())]),
    Some(_) => None,
    None => Some(value),
  }
}

#[cfg(test)]
const DIGEST: &str = "0123456789abcdef0123456789abcdef";

#[test]
fn test_render_asset_template() {
  let template = FilenameTemplate::new("[name].[hash:8].[ext]");
  let rendered = template.render(&FileNameRenderOptions {
    name: Some("logo"),
    hash: Some(DIGEST),
    ext: Some("svg"),
    ..FileNameRenderOptions::default()
  });
  assert_eq!(rendered, "logo.01234567.svg");
}

#[test]
fn test_render_chunk_template() {
  let template = FilenameTemplate::new("[name].[chunkhash:8].js");
  let rendered = template.render(&FileNameRenderOptions {
    name: Some("index"),
    chunk_hash: Some(DIGEST),
    ..FileNameRenderOptions::default()
  });
  assert_eq!(rendered, "index.01234567.js");
}

#[test]
fn test_chunkhash_does_not_fall_back_to_hash() {
  let template = FilenameTemplate::new("[name].[chunkhash:8].js");
  let rendered = template.render(&FileNameRenderOptions {
    name: Some("index"),
    hash: Some(DIGEST),
    ..FileNameRenderOptions::default()
  });
  assert_eq!(rendered, "index.[chunkhash:8].js");
}

#[test]
fn test_unknown_tokens_stay_literal() {
  let template = FilenameTemplate::new("[name].[contenthash].[ext]");
  let rendered = template.render(&FileNameRenderOptions {
    name: Some("logo"),
    ext: Some("png"),
    ..FileNameRenderOptions::default()
  });
  assert_eq!(rendered, "logo.[contenthash].png");
}

#[test]
fn test_untruncated_hash_token() {
  let template = FilenameTemplate::new("[hash]");
  let rendered =
    template.render(&FileNameRenderOptions { hash: Some(DIGEST), ..FileNameRenderOptions::default() });
  assert_eq!(rendered, DIGEST);
}

#[test]
fn test_has_hash_pattern() {
  assert!(FilenameTemplate::new("[name].[hash:8].[ext]").has_hash_pattern());
  assert!(FilenameTemplate::new("[name].[chunkhash:8].css").has_hash_pattern());
  assert!(!FilenameTemplate::new("[name].[ext]").has_hash_pattern());
}
