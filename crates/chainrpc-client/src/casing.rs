//! Method-name casing policies.

/// Rule for normalizing a method name's letter case before it goes on the
/// wire. Applies to the method name only, never to parameter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodCasing {
    /// Leave the method name exactly as given.
    Unchanged,
    /// Lowercase the method name (the daemon's own convention).
    #[default]
    Lower,
    /// Uppercase the method name.
    Upper,
}

impl MethodCasing {
    /// Apply the policy. Pure and total.
    pub fn apply(&self, method: &str) -> String {
        match self {
            MethodCasing::Unchanged => method.to_string(),
            MethodCasing::Lower => method.to_lowercase(),
            MethodCasing::Upper => method.to_uppercase(),
        }
    }

    /// Parse a policy string. Unknown values fall back to `Unchanged`
    /// instead of failing; a misconfigured policy must never take the
    /// client down.
    pub fn from_policy(policy: &str) -> Self {
        match policy.to_ascii_lowercase().as_str() {
            "lower" | "lowercase" => MethodCasing::Lower,
            "upper" | "uppercase" => MethodCasing::Upper,
            _ => MethodCasing::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(MethodCasing::Lower.apply("GetInfo"), "getinfo");
        assert_eq!(MethodCasing::Upper.apply("GetInfo"), "GETINFO");
        assert_eq!(MethodCasing::Unchanged.apply("GetInfo"), "GetInfo");
    }

    #[test]
    fn test_default_is_lower() {
        assert_eq!(MethodCasing::default(), MethodCasing::Lower);
    }

    #[test]
    fn test_from_policy() {
        assert_eq!(MethodCasing::from_policy("lower"), MethodCasing::Lower);
        assert_eq!(MethodCasing::from_policy("LOWERCASE"), MethodCasing::Lower);
        assert_eq!(MethodCasing::from_policy("upper"), MethodCasing::Upper);
        assert_eq!(MethodCasing::from_policy("uppercase"), MethodCasing::Upper);
        assert_eq!(
            MethodCasing::from_policy("unchanged"),
            MethodCasing::Unchanged
        );
    }

    #[test]
    fn test_from_policy_unknown_falls_back_to_unchanged() {
        assert_eq!(
            MethodCasing::from_policy("snake_case"),
            MethodCasing::Unchanged
        );
        assert_eq!(MethodCasing::from_policy(""), MethodCasing::Unchanged);
    }
}
