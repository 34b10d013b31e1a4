//! Key composition.
//!
//! Keys nest with `.` (`APP.SERVER.PORT`); a transform then maps the
//! composed key onto whatever naming the backing store uses.

const NEST_SEPARATOR: char = '.';

/// Transform applied to a composed key right before lookup.
pub type KeyFn = dyn Fn(&str) -> String + Send + Sync;

/// Derive a lookup key from a field name.
///
/// A `_` is inserted wherever a lowercase letter or digit is followed by an
/// uppercase letter, then the whole name is uppercased: `TimeOut` becomes
/// `TIME_OUT`, `time_out` becomes `TIME_OUT`. A raw identifier prefix (`r#`)
/// is dropped.
pub fn field_key(name: &str) -> String {
    let name = name.strip_prefix("r#").unwrap_or(name);
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if let Some(p) = prev {
            if (p.is_ascii_lowercase() || p.is_ascii_digit()) && c.is_ascii_uppercase() {
                out.push('_');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out.to_uppercase()
}

/// Join a prefix and a key: `prefix.key`, or just `key` when there is no
/// prefix.
pub fn compose_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{NEST_SEPARATOR}{key}")
    }
}

/// Default transform: trim and replace every `.` with `_`.
pub fn default_key_transform(key: &str) -> String {
    key.trim().replace(NEST_SEPARATOR, "_")
}

/// Build a key provider that prepends `{prefix}_` to every name.
///
/// An empty prefix yields the name unchanged.
pub fn prefixed(prefix: &str) -> impl Fn(&str) -> String + Send + Sync + 'static {
    let prefix = prefix.to_string();
    move |name| {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}_{name}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_key_camel_case() {
        assert_eq!(field_key("TimeOut"), "TIME_OUT");
        assert_eq!(field_key("TestMap"), "TEST_MAP");
        assert_eq!(field_key("ParseVal"), "PARSE_VAL");
        assert_eq!(field_key("Ipv4Addr"), "IPV4_ADDR");
    }

    #[test]
    fn test_field_key_acronyms_stay_joined() {
        assert_eq!(field_key("TLS"), "TLS");
        assert_eq!(field_key("HTTPServer"), "HTTPSERVER");
    }

    #[test]
    fn test_field_key_snake_case() {
        assert_eq!(field_key("bad_key"), "BAD_KEY");
        assert_eq!(field_key("r#type"), "TYPE");
    }

    #[test]
    fn test_compose_key() {
        assert_eq!(compose_key("", "PORT"), "PORT");
        assert_eq!(compose_key("APP", "PORT"), "APP.PORT");
    }

    #[test]
    fn test_compose_key_is_associative() {
        let nested = compose_key(&compose_key(&compose_key("APP", "DB"), "POOL"), "SIZE");
        assert_eq!(nested, "APP.DB.POOL.SIZE");
        assert_eq!(default_key_transform(&nested), "APP_DB_POOL_SIZE");
    }

    #[test]
    fn test_default_key_transform() {
        assert_eq!(default_key_transform(" APP.SERVER.PORT "), "APP_SERVER_PORT");
        assert_eq!(default_key_transform("PLAIN"), "PLAIN");
    }

    #[test]
    fn test_prefixed() {
        let key = prefixed("TEST");
        assert_eq!(key("PORT"), "TEST_PORT");
        let bare = prefixed("");
        assert_eq!(bare("PORT"), "PORT");
    }
}
