use thiserror::Error;

/// Longest synopsis the repository accepts, in characters.
pub const SYNOPSIS_MAX_LEN: usize = 80;

/// Errors raised by local checks before any request is sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("synopsis must be at most {max} characters, got {0}", max = SYNOPSIS_MAX_LEN)]
    SynopsisTooLong(usize),

    #[error("no endpoint specified; pass --configurations or --methods")]
    NoEndpoint,

    #[error("could not determine a namespace; pass --namespace or set LOGNAME or USER")]
    NoNamespace,
}

/// Check a synopsis against the repository's length limit.
///
/// Length is counted in Unicode scalar values, not bytes, so a synopsis of
/// 80 accented characters is accepted.
pub fn validate_synopsis(synopsis: &str) -> Result<(), ValidationError> {
    let len = synopsis.chars().count();
    if len > SYNOPSIS_MAX_LEN {
        return Err(ValidationError::SynopsisTooLong(len));
    }
    Ok(())
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_synopsis_is_within_limit() {
        assert_eq!(validate_synopsis(""), Ok(()));
    }

    #[test]
    fn synopsis_at_limit_is_accepted() {
        let s = "a".repeat(SYNOPSIS_MAX_LEN);
        assert_eq!(validate_synopsis(&s), Ok(()));
    }

    #[test]
    fn synopsis_over_limit_is_rejected() {
        let s = "a".repeat(SYNOPSIS_MAX_LEN + 1);
        assert_eq!(
            validate_synopsis(&s),
            Err(ValidationError::SynopsisTooLong(81))
        );
    }

    #[test]
    fn synopsis_length_counts_characters_not_bytes() {
        let s = "é".repeat(SYNOPSIS_MAX_LEN);
        assert!(s.len() > SYNOPSIS_MAX_LEN);
        assert_eq!(validate_synopsis(&s), Ok(()));
    }

    #[test]
    fn error_message_names_the_limit() {
        let msg = ValidationError::SynopsisTooLong(95).to_string();
        assert!(msg.contains("80"), "{msg}");
        assert!(msg.contains("95"), "{msg}");
    }
}
