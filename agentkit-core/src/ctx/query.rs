use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Returns the value of `name` in a raw query string (no leading `?`).
///
/// Keys and values are percent-decoded and `+` reads as a space. When a key
/// repeats, the last occurrence wins. A bare key (`?flag`) yields an empty value.
pub fn query_param<'a>(query: &'a str, name: &str) -> Option<Cow<'a, str>> {
    query
        .split('&')
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            let (raw_key, raw_val) = part.split_once('=').unwrap_or((part, ""));
            (decode_component(raw_key) == name).then(|| decode_component(raw_val))
        })
        .last()
}

/// Loose numeric equality with 1, so "1", "01", "1.0" and " 1 " all match.
pub fn equals_one(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok_and(|n| n == 1.0)
}

fn decode_component(raw: &str) -> Cow<'_, str> {
    if raw.contains('+') {
        let spaced = raw.replace('+', " ");
        Cow::Owned(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
    } else {
        percent_decode_str(raw).decode_utf8_lossy()
    }
}
