const PROTOCOLS: [&str; 2] = ["https://", "http://"];

/// Canonical form of a LinkedIn profile URL used as the identity key
/// when matching attendees across bookings.
///
/// Lowercases, trims whitespace, and removes the protocol, a leading
/// `www.` and any trailing slashes. Anything that isn't a URL comes back
/// lowercased and trimmed. Stripping repeats until nothing changes so
/// the result is always a fixed point.
pub fn normalize_linkedin_url(url: &str) -> String {
    let mut current = url.trim().to_lowercase();
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(url: &str) -> String {
    let mut s = url.trim();
    for protocol in PROTOCOLS {
        if let Some(rest) = s.strip_prefix(protocol) {
            s = rest;
            break;
        }
    }
    let s = s.strip_prefix("www.").unwrap_or(s);
    s.trim_end_matches('/').trim().to_string()
}
