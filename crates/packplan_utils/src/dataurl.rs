use mime::Mime;

/// Media type for a file extension, covering the asset classes the rule
/// table knows about.
pub fn mime_for_extension(ext: &str) -> Option<Mime> {
  let essence = match ext.to_ascii_lowercase().as_str() {
    "png" => "image/png",
    "jpg" | "jpeg" => "image/jpeg",
    "gif" => "image/gif",
    "svg" => "image/svg+xml",
    "woff" => "font/woff",
    "woff2" => "font/woff2",
    "eot" => "application/vnd.ms-fontobject",
    "ttf" => "font/ttf",
    "otf" => "font/otf",
    "swf" => "application/x-shockwave-flash",
    "mp4" => "video/mp4",
    "webm" => "video/webm",
    "ogg" => "audio/ogg",
    "mp3" => "audio/mpeg",
    "wav" => "audio/wav",
    "flac" => "audio/flac",
    "aac" => "audio/aac",
    _ => return None,
  };
  essence.parse().ok()
}

/// Extension lookup first, byte sniffing second, octet-stream last.
pub fn guess_mime(ext: Option<&str>, bytes: &[u8]) -> Mime {
  ext
    .and_then(mime_for_extension)
    .or_else(|| infer::get(bytes).and_then(|kind| kind.mime_type().parse().ok()))
    .unwrap_or(mime::APPLICATION_OCTET_STREAM)
}

pub fn encode_data_uri(mime: &Mime, bytes: &[u8]) -> String {
  let payload = base64_simd::STANDARD.encode_to_string(bytes);
  format!("data:{mime};base64,{payload}")
}

#[test]
fn test_mime_for_extension() {
  assert_eq!(mime_for_extension("PNG").map(|m| m.to_string()), Some("image/png".to_string()));
  assert_eq!(mime_for_extension("woff2").map(|m| m.to_string()), Some("font/woff2".to_string()));
  assert_eq!(mime_for_extension("txt"), None);
}

#[test]
fn test_guess_mime_falls_back_to_sniffing() {
  // PNG magic bytes with an extension the table doesn't know.
  let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
  assert_eq!(guess_mime(Some("bin"), &png).to_string(), "image/png");
  assert_eq!(guess_mime(None, b"plain").to_string(), "application/octet-stream");
}

#[test]
fn test_encode_data_uri() {
  let mime = mime_for_extension("svg").unwrap();
  assert_eq!(
    encode_data_uri(&mime, b"<svg/>"),
    "data:image/svg+xml;base64,PHN2Zy8+"
  );
}
