/// Prefixes an enum member name with `_` when it would start with a digit.
pub fn sanitize_enum_name(name: String) -> String {
    match name.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("_{}", name),
        _ => name,
    }
}
