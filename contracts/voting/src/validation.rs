use soroban_sdk::String;

use crate::constants::MAX_DESCRIPTION_LEN;
use crate::errors::VotingError;

/// A description must be non-blank and at most `MAX_DESCRIPTION_LEN` bytes.
/// Blank means empty or Unicode whitespace only.
pub fn validate_description(description: &String) -> Result<(), VotingError> {
    let len = description.len() as usize;

    if len == 0 {
        return Err(VotingError::EmptyProposal);
    }
    if len > MAX_DESCRIPTION_LEN {
        return Err(VotingError::DescriptionTooLong);
    }

    let mut buf = [0u8; MAX_DESCRIPTION_LEN];
    let bytes = &mut buf[..len];
    description.copy_into_slice(bytes);

    let blank = core::str::from_utf8(bytes)
        .map(|text| text.trim().is_empty())
        .unwrap_or(false);
    if blank {
        return Err(VotingError::EmptyProposal);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn accepts_plain_text() {
        let env = Env::default();
        assert_eq!(validate_description(&String::from_str(&env, "Bob")), Ok(()));
    }

    #[test]
    fn rejects_empty_and_blank() {
        let env = Env::default();
        assert_eq!(
            validate_description(&String::from_str(&env, "")),
            Err(VotingError::EmptyProposal)
        );
        assert_eq!(
            validate_description(&String::from_str(&env, " \t\n ")),
            Err(VotingError::EmptyProposal)
        );
    }

    #[test]
    fn rejects_unicode_whitespace() {
        let env = Env::default();
        assert_eq!(
            validate_description(&String::from_str(&env, "\u{00a0}\u{3000}")),
            Err(VotingError::EmptyProposal)
        );
        assert_eq!(
            validate_description(&String::from_str(&env, "\u{3000}Bob")),
            Ok(())
        );
    }

    #[test]
    fn enforces_length_limit() {
        let env = Env::default();
        let at_limit = [b'a'; MAX_DESCRIPTION_LEN];
        let over_limit = [b'a'; MAX_DESCRIPTION_LEN + 1];

        assert_eq!(
            validate_description(&String::from_bytes(&env, &at_limit)),
            Ok(())
        );
        assert_eq!(
            validate_description(&String::from_bytes(&env, &over_limit)),
            Err(VotingError::DescriptionTooLong)
        );
    }
}
