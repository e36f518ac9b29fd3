use std::hash::Hasher;

use xxhash_rust::xxh3::{Xxh3, xxh3_128};

fn to_hex(digest: u128) -> String {
  format!("{digest:032x}")
}

/// Fingerprint of a single file's bytes, rendered as 32 lowercase hex chars.
/// Filename templates truncate it to the requested length.
pub fn content_hash(bytes: &[u8]) -> String {
  to_hex(xxh3_128(bytes))
}

/// Fingerprint over a whole chunk. Each member contributes its standalone
/// content hash, so the result moves whenever any member's bytes move, while
/// the members' own content hashes stay untouched.
pub fn chunk_hash<'a>(members: impl IntoIterator<Item = &'a [u8]>) -> String {
  let mut hasher = Xxh3::default();
  for member in members {
    hasher.write(content_hash(member).as_bytes());
  }
  to_hex(hasher.digest128())
}

#[test]
fn test_content_hash_shape() {
  let hash = content_hash(b"hello");
  assert_eq!(hash.len(), 32);
  assert!(hash.bytes().all(|b| b.is_ascii_hexdigit()));
  assert_eq!(hash, content_hash(b"hello"));
  assert_ne!(hash, content_hash(b"hello!"));
}

#[test]
fn test_chunk_hash_tracks_every_member() {
  let base = chunk_hash([b"alpha".as_slice(), b"beta".as_slice()]);
  assert_eq!(base, chunk_hash([b"alpha".as_slice(), b"beta".as_slice()]));
  // Changing either member changes the chunk hash.
  assert_ne!(base, chunk_hash([b"alpha!".as_slice(), b"beta".as_slice()]));
  assert_ne!(base, chunk_hash([b"alpha".as_slice(), b"beta!".as_slice()]));
  // Member order is part of the fingerprint.
  assert_ne!(base, chunk_hash([b"beta".as_slice(), b"alpha".as_slice()]));
}

#[test]
fn test_chunk_hash_is_not_a_content_hash() {
  assert_ne!(chunk_hash([b"alpha".as_slice()]), content_hash(b"alpha"));
}
