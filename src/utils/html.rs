/// Escapes user-supplied text for safe inclusion in HTML.
///
/// Every character with meaning to the HTML parser is entity-encoded, so the
/// result is safe both as element text and inside a quoted attribute value.
/// Use this for survey answers; they are plain text and never markup.
pub fn escape(input: &str) -> String {
    ammonia::clean_text(input)
}
