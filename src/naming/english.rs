//! English pluralization for derived collection relations

/// Pluralize an English noun
///
/// # Examples
///
/// ```
/// use hypermedia::naming::english::pluralize;
///
/// assert_eq!(pluralize("order"), "orders");
/// assert_eq!(pluralize("company"), "companies");
/// assert_eq!(pluralize("address"), "addresses");
/// ```
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    // consonant + y -> ies
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.is_empty() && !stem.ends_with(['a', 'e', 'i', 'o', 'u']) {
            return format!("{stem}ies");
        }
    }

    // sibilant endings -> es
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
        return format!("{word}es");
    }

    // f / fe -> ves
    if let Some(stem) = word.strip_suffix("fe") {
        if !stem.is_empty() {
            return format!("{stem}ves");
        }
    }
    if let Some(stem) = word.strip_suffix('f') {
        if !stem.is_empty() {
            return format!("{stem}ves");
        }
    }

    // consonant + o -> es, with common exceptions
    if word.len() > 1 && word.ends_with('o') {
        let penultimate = word.as_bytes()[word.len() - 2] as char;
        if !matches!(penultimate, 'a' | 'e' | 'i' | 'o' | 'u')
            && !matches!(word, "photo" | "piano" | "halo")
        {
            return format!("{word}es");
        }
    }

    format!("{word}s")
}
