use crate::error::ImportError;

pub fn extract_domain(email: &str) -> Result<&str, ImportError> {
    match email.find('@') {
        Some(separator) => Ok(&email[separator + 1..]),
        None => Err(ImportError::MalformedEmail {
            email: email.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_everything_after_the_separator() {
        assert_eq!(extract_domain("example@org.com").unwrap(), "org.com");
    }

    #[test]
    fn missing_separator_names_the_offending_email() {
        let err = extract_domain("exampleorg.com").unwrap_err();
        assert!(matches!(
            err,
            ImportError::MalformedEmail { email } if email == "exampleorg.com"
        ));
    }

    #[test]
    fn splits_at_the_first_separator_only() {
        assert_eq!(extract_domain("quoted@user@org.com").unwrap(), "user@org.com");
    }

    #[test]
    fn preserves_domain_case() {
        assert_eq!(extract_domain("example@Org.COM").unwrap(), "Org.COM");
    }

    #[test]
    fn empty_domain_after_separator_is_returned_verbatim() {
        assert_eq!(extract_domain("example@").unwrap(), "");
    }
}
