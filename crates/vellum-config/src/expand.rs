//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config field for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    expand_with(value, field, |name| std::env::var(name).ok())
}

fn expand_with(
    value: &str,
    field: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: "unterminated ${ reference".to_owned(),
            });
        };

        let reference = &after[..end];
        let (name, default) = match reference.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (reference, None),
        };

        match lookup(name) {
            Some(resolved) => out.push_str(&resolved),
            None => match default {
                Some(default) => out.push_str(default),
                None => {
                    return Err(ConfigError::EnvVar {
                        field: field.to_owned(),
                        message: format!("${{{name}}} not set"),
                    });
                }
            },
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "TOKEN" => Some("secret".to_owned()),
            _ => None,
        }
    }

    #[test]
    fn test_plain_string_passes_through() {
        assert_eq!(expand_with("no refs", "f", lookup).unwrap(), "no refs");
    }

    #[test]
    fn test_set_variable_expands() {
        assert_eq!(
            expand_with("Bearer ${TOKEN}", "f", lookup).unwrap(),
            "Bearer secret"
        );
    }

    #[test]
    fn test_unset_variable_uses_default() {
        assert_eq!(
            expand_with("${MISSING:-fallback}", "f", lookup).unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_set_variable_ignores_default() {
        assert_eq!(
            expand_with("${TOKEN:-fallback}", "f", lookup).unwrap(),
            "secret"
        );
    }

    #[test]
    fn test_unset_variable_without_default_errors() {
        let err = expand_with("${MISSING}", "content.access_token", lookup).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { field, message }
            if field == "content.access_token" && message == "${MISSING} not set"));
    }

    #[test]
    fn test_unterminated_reference_errors() {
        assert!(expand_with("${OOPS", "f", lookup).is_err());
    }

    #[test]
    fn test_multiple_references() {
        assert_eq!(
            expand_with("${TOKEN}-${MISSING:-x}-${TOKEN}", "f", lookup).unwrap(),
            "secret-x-secret"
        );
    }
}
