#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a decoding rule. Two forms: `decode:` takes a closure over the
/// matched substring and may return `None` (the absence marker); `text:`
/// declares a fixed-phrase rule whose explanation never varies.
#[macro_export]
macro_rules! rule {
    (
        category: $cat:literal,
        matcher: $pat:literal,
        hint: $hint:expr,
        example: $example:literal,
        decode: |$m:ident| $body:expr
        $(,)?
    ) => {
        $crate::Rule {
            category: $cat,
            matcher: $crate::regex!($pat),
            hint: $hint,
            example: $example,
            decode: Box::new(move |$m: &str| $body),
        }
    };
    (
        category: $cat:literal,
        matcher: $pat:literal,
        hint: $hint:expr,
        example: $example:literal,
        text: $text:expr
        $(,)?
    ) => {
        $crate::Rule {
            category: $cat,
            matcher: $crate::regex!($pat),
            hint: $hint,
            example: $example,
            decode: Box::new(move |_: &str| Some(String::from($text))),
        }
    };
}
