/// Known signatures for Boats Group properties. Matched case-insensitively
/// as plain substrings anywhere in the response body.
pub const BOATSGROUP_SIGNATURES: [&str; 10] = [
    "boatsgroup.com",
    "dealer spike",
    "dealer-spike",
    "app.boatwizard.com",
    "yachtcloser.com",
    "powered by boats group",
    "boatwizard",
    "marinegroupec",
    "ycwebservice",
    "boats-dns-test.com",
];

/// Naive substring scan over the built-in signature list plus any configured
/// extras. No word-boundary or HTML awareness: a signature inside a script
/// tag or comment still counts.
pub fn body_matches(body: &str, extra_signatures: &[String]) -> bool {
    let haystack = body.to_lowercase();
    BOATSGROUP_SIGNATURES.iter().any(|sig| haystack.contains(sig))
        || extra_signatures
            .iter()
            .filter(|sig| !sig.is_empty())
            .any(|sig| haystack.contains(&sig.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive() {
        assert!(body_matches("<footer>Powered By BOATS GROUP</footer>", &[]));
        assert!(body_matches("src=\"https://APP.BoatWizard.com/x.js\"", &[]));
    }

    #[test]
    fn unrelated_body_does_not_match() {
        assert!(!body_matches("<html><body>Welcome to our marina</body></html>", &[]));
        assert!(!body_matches("", &[]));
    }

    #[test]
    fn extra_signatures_are_merged_in() {
        let extra = vec!["acme-yachts-cdn.net".to_string()];
        assert!(body_matches("loaded from ACME-Yachts-CDN.net today", &extra));
        assert!(!body_matches("loaded from elsewhere", &extra));
    }

    #[test]
    fn empty_extra_signature_never_matches() {
        let extra = vec![String::new()];
        assert!(!body_matches("anything at all", &extra));
    }
}
