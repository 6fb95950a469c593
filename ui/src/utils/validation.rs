use crate::registration::validation::PasswordMatch;

pub fn password_match_class(validation: &PasswordMatch) -> &'static str {
    match validation {
        PasswordMatch::Match => "input-field input-valid",
        PasswordMatch::NoMatch => "input-field input-invalid",
        PasswordMatch::None => "input-field",
    }
}

pub fn password_match_style(validation: &PasswordMatch) -> &'static str {
    match validation {
        PasswordMatch::Match => "border: 2px solid #10b981;",
        PasswordMatch::NoMatch => "border: 2px solid #ef4444;",
        PasswordMatch::None => "",
    }
}

/// Class for a required field once the user has tried to leave the step
pub fn required_field_class(value: &str, show_errors: bool) -> &'static str {
    if show_errors && value.is_empty() {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_match_styling() {
        assert_eq!(password_match_class(&PasswordMatch::None), "input-field");
        assert!(password_match_class(&PasswordMatch::NoMatch).contains("input-invalid"));
        assert_eq!(password_match_style(&PasswordMatch::None), "");
    }

    #[test]
    fn test_required_field_flags_only_after_attempt() {
        assert_eq!(required_field_class("", false), "input-field");
        assert_eq!(required_field_class("", true), "input-field input-invalid");
        assert_eq!(required_field_class("Ada", true), "input-field");
    }
}
