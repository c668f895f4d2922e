/// Compile a static pattern once and hand back the cached `Regex` on every
/// subsequent call. Patterns are literals in this crate, so a failure to
/// compile is a programming error.
#[macro_export]
macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
