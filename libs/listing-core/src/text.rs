/// True when `target` occurs in `source`, ignoring case. An empty `target`
/// is found in every string.
pub fn includes_ignoring_case(source: &str, target: &str) -> bool {
    if target.is_empty() {
        return true;
    }
    source.to_lowercase().contains(&target.to_lowercase())
}
