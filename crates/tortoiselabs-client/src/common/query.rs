//! Parameter encoding for query strings and form bodies

/// Encode GET parameters as a query string (without the leading `?`)
///
/// Keys and values are percent-encoded, pairs are joined with `&`, and
/// pairs whose value is empty are left out entirely.
pub fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Encode POST parameters as an `application/x-www-form-urlencoded` body
///
/// Unlike [`encode_query`], empty values are kept as `key=`.
pub fn encode_form(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
