/// Reverse a string by Unicode scalar value.
///
/// Combining marks and multi-codepoint emoji are not kept together.
pub fn reverse_string(input: &str) -> String {
    input.chars().rev().collect()
}
