//! Class-name escaping for CSS selectors.

/// Escape a class name so it can follow a `.` in a selector.
///
/// Variant separators and arbitrary-value punctuation are backslash-escaped
/// (`dark:bg-teal-500` becomes `dark\:bg-teal-500`). A leading digit is not
/// a valid identifier start and is written as a hex escape with the trailing
/// space CSS requires (`2xl` becomes `\32 xl`).
pub fn escape_class(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len() + 4);
    for (i, c) in class.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            escaped.push_str(&format!("\\{:x} ", c as u32));
            continue;
        }
        if needs_escape(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn needs_escape(c: char) -> bool {
    c.is_ascii() && !(c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_class() {
        assert_eq!(escape_class("bg-teal-500"), "bg-teal-500");
    }

    #[test]
    fn test_variants() {
        assert_eq!(
            escape_class("dark:hover:bg-teal-500"),
            "dark\\:hover\\:bg-teal-500"
        );
    }

    #[test]
    fn test_arbitrary_value() {
        assert_eq!(escape_class("bg-[#0f766e]"), "bg-\\[\\#0f766e\\]");
        assert_eq!(escape_class("w-[calc(100%,2px)]"), "w-\\[calc\\(100\\%\\,2px\\)\\]");
    }

    #[test]
    fn test_fraction_and_decimal() {
        assert_eq!(escape_class("w-1/2"), "w-1\\/2");
        assert_eq!(escape_class("h-0.5"), "h-0\\.5");
    }

    #[test]
    fn test_leading_digit() {
        assert_eq!(escape_class("2xl"), "\\32 xl");
    }
}
