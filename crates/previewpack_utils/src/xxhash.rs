use xxhash_rust::xxh3::xxh3_128;

/// Hashes `input` into a short URL-safe token. Used to mint load location
/// handles that are stable for identical content within one build.
pub fn xxhash_token(input: &[u8]) -> String {
  let hash = xxh3_128(input).to_le_bytes();
  base64_simd::URL_SAFE_NO_PAD.encode_to_string(hash)
}

#[test]
fn token_is_url_safe() {
  let token = xxhash_token(b"export default function App() {}");
  assert!(!token.is_empty());
  assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn token_differs_per_input() {
  assert_ne!(xxhash_token(b"a"), xxhash_token(b"b"));
}
