//! Compile a pattern once and reuse it on every call. The fallback aligner
//! classifies every input line against several patterns, so each one is
//! cached in a static behind a OnceLock.

#[macro_export]
macro_rules! compile {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}
