//! Canonical example values for string `format`s.

use std::borrow::Cow;

use chrono::{DateTime, SecondsFormat, Utc};

/// Example used for strings without a recognized `format`.
pub const GENERIC_STRING: &str = "string";

/// Canonical example for a string `format`, if the format is known.
pub fn format_example(format: &str) -> Option<Cow<'static, str>> {
    let example = match format {
        "email" => "user@example.com",
        "hostname" => "example.com",
        "ipv4" => "8.8.8.8",
        "ipv6" => "2001:4860:4860::8888",
        "uri" => "https://example.com/path",
        "uri-reference" => "/path#anchor",
        "uri-template" => "/path/{param}",
        "json-pointer" => "/foo/bar",
        "date-time" => return Some(Cow::Owned(epoch_timestamp())),
        _ => return None,
    };
    Some(Cow::Borrowed(example))
}

/// The Unix epoch as an RFC 3339 timestamp with millisecond precision.
fn epoch_timestamp() -> String {
    DateTime::<Utc>::UNIX_EPOCH.to_rfc3339_opts(SecondsFormat::Millis, true)
}
