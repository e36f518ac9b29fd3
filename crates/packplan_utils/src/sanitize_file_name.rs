/// Chunk names come from arbitrary module paths and must stay safe to place
/// in an output filename on every platform.
pub fn sanitize_file_name(name: &str) -> String {
  name
    .chars()
    .map(|char| {
      if char.is_ascii_alphanumeric() || matches!(char, '-' | '_') {
        char
      } else {
        '_'
      }
    })
    .collect()
}

#[test]
fn test_sanitize_file_name() {
  assert_eq!(sanitize_file_name("Header"), "Header");
  assert_eq!(sanitize_file_name("nav bar@2x"), "nav_bar_2x");
  assert_eq!(sanitize_file_name("\0+a=Z_0-"), "__a_Z_0-");
}
