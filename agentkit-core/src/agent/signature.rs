/// Case-insensitive search for `token` in `agent`, requiring the match to sit
/// between non-alphanumeric characters (or the ends of the string).
///
/// An empty token never matches.
pub fn contains_token(agent: &str, token: &str) -> bool {
    if token.is_empty() || token.len() > agent.len() {
        return false;
    }

    let haystack = agent.to_ascii_lowercase();
    let needle = token.to_ascii_lowercase();
    let bytes = haystack.as_bytes();

    haystack.match_indices(&needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
        before_ok && after_ok
    })
}
