use anyhow::{anyhow, Result};

// "F11 - Samathi Udapotha" -> "F11"
fn code_of(name: &str) -> &str {
    name.split(" - ").next().unwrap_or(name).trim()
}

/// Resolves a typed worker or section name against the roster.
///
/// Tries an exact match, then the roster code before the first `" - "`
/// (case-insensitive), then a unique prefix.
pub fn expand_name(key: &str, candidates: &[String]) -> Result<String> {
    let key = key.trim();

    // 1. Exact match
    if let Some(found) = candidates.iter().find(|c| c.as_str() == key) {
        return Ok(found.clone());
    }

    // 2. Code match
    let by_code: Vec<&String> = candidates
        .iter()
        .filter(|c| code_of(c).eq_ignore_ascii_case(key))
        .collect();
    if by_code.len() == 1 {
        return Ok(by_code[0].clone());
    }

    // 3. Prefix match
    let matches: Vec<&String> = candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(&key.to_lowercase()))
        .collect();

    match matches.len() {
        1 => Ok(matches[0].clone()),
        0 => Err(anyhow!("Unknown name: '{}'", key)),
        _ => Err(anyhow!("Ambiguous name: '{}' matches {:?}", key, matches)),
    }
}

/// Expands every key, or returns all candidates when no key was given.
pub fn expand_names(keys: &[String], candidates: &[String]) -> Result<Vec<String>> {
    if keys.is_empty() {
        return Ok(candidates.to_vec());
    }
    keys.iter().map(|k| expand_name(k, candidates)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workers() -> Vec<String> {
        ["F1 - Seetha", "F11 - Samathi Udapotha", "M3 - Nimal - Podi", "M4 - Nimal - Loku"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_expand_name() {
        let candidates = workers();

        assert_eq!(expand_name("F1 - Seetha", &candidates).unwrap(), "F1 - Seetha");
        assert_eq!(expand_name("F1", &candidates).unwrap(), "F1 - Seetha");
        assert_eq!(expand_name("f11", &candidates).unwrap(), "F11 - Samathi Udapotha");
        assert_eq!(expand_name("M3 - Nimal", &candidates).unwrap(), "M3 - Nimal - Podi");

        // Ambiguous
        assert!(expand_name("M", &candidates).is_err());

        // Unknown
        assert!(expand_name("X9", &candidates).is_err());
    }

    #[test]
    fn test_expand_names_defaults_to_all() {
        let candidates = workers();
        assert_eq!(expand_names(&[], &candidates).unwrap(), candidates);
        assert_eq!(
            expand_names(&["M4".to_string()], &candidates).unwrap(),
            vec!["M4 - Nimal - Loku".to_string()]
        );
    }
}
