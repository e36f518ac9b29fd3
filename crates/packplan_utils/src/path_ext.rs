use std::path::Path;

use sugar_path::SugarPath;

/// Splits a request like `logo.svg?v=2` into the path and the query it
/// carries. Bundler requests keep cache-buster queries on asset paths; the
/// query never participates in matching or naming.
pub fn split_query(request: &str) -> (&str, Option<&str>) {
  match memchr::memchr(b'?', request.as_bytes()) {
    Some(at) => (&request[..at], Some(&request[at..])),
    None => (request, None),
  }
}

pub fn strip_query(request: &str) -> &str {
  split_query(request).0
}

fn file_name(path: &str) -> &str {
  path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// The final `.`-separated segment of the file name. A name without a dot has
/// no extension; a leading-dot name like `.css` still yields `css`, matching
/// how suffix tests treat hidden files.
pub fn extension(path: &str) -> Option<&str> {
  let name = file_name(strip_query(path));
  name.rsplit('.').next().filter(|ext| *ext != name)
}

/// The file name with its extension removed. Leading-dot names keep the dot.
pub fn file_stem(path: &str) -> &str {
  let name = file_name(strip_query(path));
  match name.rfind('.') {
    Some(0) | None => name,
    Some(at) => &name[..at],
  }
}

pub trait PathExt {
  fn expect_to_slash(&self) -> String;
}

impl PathExt for Path {
  fn expect_to_slash(&self) -> String {
    self
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }
}

#[test]
fn test_split_query() {
  assert_eq!(split_query("logo.svg?v=2"), ("logo.svg", Some("?v=2")));
  assert_eq!(split_query("logo.svg"), ("logo.svg", None));
  assert_eq!(split_query("fonts/icon.woff2?#iefix"), ("fonts/icon.woff2", Some("?#iefix")));
}

#[test]
fn test_extension() {
  assert_eq!(extension("components/Header.vue"), Some("vue"));
  assert_eq!(extension("logo.svg?v=2"), Some("svg"));
  assert_eq!(extension("archive.tar.gz"), Some("gz"));
  assert_eq!(extension(".css"), Some("css"));
  assert_eq!(extension("LICENSE"), None);
  assert_eq!(extension("dir.v2/readme"), None);
}

#[test]
fn test_file_stem() {
  assert_eq!(file_stem("components/Header.vue"), "Header");
  assert_eq!(file_stem("logo.svg?v=2"), "logo");
  assert_eq!(file_stem(".css"), ".css");
  assert_eq!(file_stem("LICENSE"), "LICENSE");
}
