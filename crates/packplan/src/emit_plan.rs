use std::path::Path;

use packplan_common::{FileNameRenderOptions, Pipeline, ResolvedDirective};
use packplan_utils::{
  dataurl::{encode_data_uri, guess_mime},
  path_ext::{self, PathExt},
  sanitize_file_name::sanitize_file_name,
  xxhash::{chunk_hash, content_hash},
};

/// Where a piece of output actually goes once real bytes are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitPlan {
  /// Write a file at this output-relative location.
  File { filename: String },
  /// Embed into the referencing bundle as a data URI; no file is written.
  InlineDataUri { data_uri: String },
  /// Development styles: injected through a runtime style tag, carried by
  /// the owning script bundle.
  InjectStyle,
}

/// Applies a per-file directive (binary asset or passthrough) to the asset's
/// bytes. The hash in the name is a content hash: it moves only when these
/// bytes move.
pub fn plan_asset_emit(directive: &ResolvedDirective, path: &str, bytes: &[u8]) -> EmitPlan {
  let stripped = path_ext::strip_query(path);
  match directive.pipeline {
    Pipeline::Passthrough => {
      EmitPlan::File { filename: Path::new(stripped).expect_to_slash() }
    }
    Pipeline::BinaryAsset(_) if directive.should_inline(bytes.len()) => {
      let mime = guess_mime(path_ext::extension(stripped), bytes);
      EmitPlan::InlineDataUri { data_uri: encode_data_uri(&mime, bytes) }
    }
    _ => {
      let hash = content_hash(bytes);
      let rendered = directive.filename_template.render(&FileNameRenderOptions {
        name: Some(path_ext::file_stem(stripped)),
        hash: Some(&hash),
        ext: path_ext::extension(stripped),
        ..FileNameRenderOptions::default()
      });
      EmitPlan::File { filename: format!("{}{rendered}", directive.output_subdir) }
    }
  }
}

/// Applies a bundle directive (script or style) to a chunk. The hash in the
/// name is a chunk hash over every member, so it moves when any member's
/// bytes move.
pub fn plan_chunk_emit(
  directive: &ResolvedDirective,
  chunk_name: &str,
  members: &[&[u8]],
) -> EmitPlan {
  if directive.pipeline == Pipeline::StyleInlineFallback {
    return EmitPlan::InjectStyle;
  }
  let hash = chunk_hash(members.iter().copied());
  let name = sanitize_file_name(chunk_name);
  let rendered = directive.filename_template.render(&FileNameRenderOptions {
    name: Some(&name),
    chunk_hash: Some(&hash),
    ..FileNameRenderOptions::default()
  });
  EmitPlan::File { filename: format!("{}{rendered}", directive.output_subdir) }
}

#[cfg(test)]
use crate::classifier::classify;
#[cfg(test)]
use packplan_common::BuildMode;

#[test]
fn test_small_assets_inline_regardless_of_mode() {
  let bytes = vec![0u8; 9999];
  for mode in [BuildMode::Development, BuildMode::Production] {
    let directive = classify("img/logo.png", mode);
    assert!(directive.should_inline(bytes.len()));
    let plan = plan_asset_emit(&directive, "img/logo.png", &bytes);
    assert!(matches!(plan, EmitPlan::InlineDataUri { ref data_uri } if data_uri.starts_with("data:image/png;base64,")));
  }
}

#[test]
fn test_assets_at_the_limit_become_files() {
  let bytes = vec![0u8; 10000];
  let directive = classify("img/logo.png", BuildMode::Production);
  let plan = plan_asset_emit(&directive, "img/logo.png", &bytes);
  match plan {
    EmitPlan::File { filename } => {
      assert!(filename.starts_with("images/logo."));
      assert!(filename.ends_with(".png"));
      // images/logo.<8 hex chars>.png
      let hash = filename.trim_start_matches("images/logo.").trim_end_matches(".png");
      assert_eq!(hash.len(), 8);
      assert!(hash.bytes().all(|b| b.is_ascii_hexdigit()));
    }
    _ => panic!("expected a file plan"),
  }
}

#[test]
fn test_content_hash_ignores_the_query_string() {
  let bytes = vec![1u8; 20000];
  let directive = classify("logo.svg?v=2", BuildMode::Production);
  let with_query = plan_asset_emit(&directive, "logo.svg?v=2", &bytes);
  let without = plan_asset_emit(&classify("logo.svg", BuildMode::Production), "logo.svg", &bytes);
  assert_eq!(with_query, without);
}

#[test]
fn test_passthrough_keeps_the_relative_path() {
  let directive = classify("externals/robots.txt", BuildMode::Production);
  let plan = plan_asset_emit(&directive, "externals/robots.txt", b"User-agent: *");
  assert_eq!(plan, EmitPlan::File { filename: "externals/robots.txt".to_string() });
}

#[test]
fn test_chunk_hash_moves_with_any_member() {
  let directive = classify("index.js", BuildMode::Production);
  let base = plan_chunk_emit(&directive, "index", &[b"const a = 1;".as_slice(), b"const b = 2;"]);
  let same = plan_chunk_emit(&directive, "index", &[b"const a = 1;".as_slice(), b"const b = 2;"]);
  let changed = plan_chunk_emit(&directive, "index", &[b"const a = 1;".as_slice(), b"const b = 3;"]);
  assert_eq!(base, same);
  assert_ne!(base, changed);
  match base {
    EmitPlan::File { filename } => {
      assert!(filename.starts_with("js/index."));
      assert!(filename.ends_with(".js"));
    }
    _ => panic!("expected a file plan"),
  }
}

#[test]
fn test_asset_and_chunk_hashes_are_independent() {
  // The same bytes routed through the two hash kinds must not produce the
  // same fingerprint: one hashes the file, the other hashes the chunk.
  let asset_directive = classify("logo.png", BuildMode::Production);
  let chunk_directive = classify("logo.js", BuildMode::Production);
  let bytes = vec![7u8; 20000];
  let asset = plan_asset_emit(&asset_directive, "logo.png", &bytes);
  let chunk = plan_chunk_emit(&chunk_directive, "logo", &[bytes.as_slice()]);
  let (EmitPlan::File { filename: asset_file }, EmitPlan::File { filename: chunk_file }) =
    (asset, chunk)
  else {
    panic!("expected file plans");
  };
  let asset_fingerprint = asset_file.trim_start_matches("images/logo.").trim_end_matches(".png");
  let chunk_fingerprint = chunk_file.trim_start_matches("js/logo.").trim_end_matches(".js");
  assert_ne!(asset_fingerprint, chunk_fingerprint);
}

#[test]
fn test_dev_styles_are_injected_not_emitted() {
  let directive = classify("app.css", BuildMode::Development);
  assert_eq!(plan_chunk_emit(&directive, "app", &[b"body {}".as_slice()]), EmitPlan::InjectStyle);

  let directive = classify("app.css", BuildMode::Production);
  let plan = plan_chunk_emit(&directive, "app", &[b"body {}".as_slice()]);
  assert!(matches!(plan, EmitPlan::File { ref filename } if filename.starts_with("css/app.")));
}

#[test]
fn test_chunk_names_are_sanitized() {
  let directive = classify("index.js", BuildMode::Production);
  let plan = plan_chunk_emit(&directive, "nav bar@2x", &[b"x".as_slice()]);
  assert!(matches!(plan, EmitPlan::File { ref filename } if filename.starts_with("js/nav_bar_2x.")));
}
