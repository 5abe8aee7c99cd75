use time::{Date, OffsetDateTime};
use tracing::debug;

use crate::users::{error::UserError, repo_types::NewUser};

pub(crate) fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Checks a create candidate against the current UTC date.
///
/// A blank name is replaced by the login in place; the caller sees the
/// defaulted value on success.
pub fn validate(candidate: &mut NewUser) -> Result<(), UserError> {
    validate_on(candidate, today())
}

/// Same as [`validate`] with an explicit reference date.
pub fn validate_on(candidate: &mut NewUser, today: Date) -> Result<(), UserError> {
    if !is_valid_email(&candidate.email) {
        return Err(UserError::validation("email invalid"));
    }
    if !is_valid_login(&candidate.login) {
        return Err(UserError::validation("login invalid"));
    }
    if candidate.name.trim().is_empty() {
        debug!(login = %candidate.login, "name defaulted to login");
        candidate.name = candidate.login.clone();
    }
    if candidate.birthday > today {
        return Err(UserError::validation("birthday invalid"));
    }
    Ok(())
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && email.contains('@')
}

pub(crate) fn is_valid_login(login: &str) -> bool {
    !login.is_empty() && !login.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod validator_tests {
    use super::*;
    use time::macros::date;

    const TODAY: Date = date!(2024 - 06 - 15);

    fn candidate() -> NewUser {
        NewUser {
            email: "a@b.com".into(),
            login: "alice".into(),
            name: "Alice".into(),
            birthday: date!(1990 - 01 - 01),
        }
    }

    #[test]
    fn accepts_valid_candidate_unchanged() {
        let mut c = candidate();
        validate_on(&mut c, TODAY).expect("valid candidate");
        assert_eq!(c, candidate());
    }

    #[test]
    fn rejects_email_without_at() {
        let mut c = NewUser { email: "no-at-sign.com".into(), ..candidate() };
        assert_eq!(validate_on(&mut c, TODAY), Err(UserError::validation("email invalid")));
    }

    #[test]
    fn rejects_empty_or_blank_email() {
        for email in ["", "   "] {
            let mut c = NewUser { email: email.into(), ..candidate() };
            assert_eq!(validate_on(&mut c, TODAY), Err(UserError::validation("email invalid")));
        }
    }

    #[test]
    fn rejects_login_with_whitespace() {
        for login in ["bad login", "tab\there", "", " "] {
            let mut c = NewUser { login: login.into(), ..candidate() };
            assert_eq!(
                validate_on(&mut c, TODAY),
                Err(UserError::validation("login invalid")),
                "login {login:?}"
            );
        }
    }

    #[test]
    fn blank_name_defaults_to_login() {
        for name in ["", "  "] {
            let mut c = NewUser { name: name.into(), ..candidate() };
            validate_on(&mut c, TODAY).unwrap();
            assert_eq!(c.name, "alice");
        }
    }

    #[test]
    fn birthday_today_is_allowed_tomorrow_is_not() {
        let mut c = NewUser { birthday: TODAY, ..candidate() };
        assert!(validate_on(&mut c, TODAY).is_ok());

        let mut c = NewUser { birthday: date!(2024 - 06 - 16), ..candidate() };
        assert_eq!(validate_on(&mut c, TODAY), Err(UserError::validation("birthday invalid")));
    }

    #[test]
    fn email_is_checked_before_login() {
        let mut c = NewUser { email: "x".into(), login: "bad login".into(), ..candidate() };
        assert_eq!(validate_on(&mut c, TODAY), Err(UserError::validation("email invalid")));
    }

    #[test]
    fn name_is_defaulted_even_when_birthday_fails() {
        let mut c = NewUser { name: "".into(), birthday: date!(2030 - 01 - 01), ..candidate() };
        assert!(validate_on(&mut c, TODAY).is_err());
        assert_eq!(c.name, "alice");
    }

    #[test]
    fn validate_uses_current_date() {
        let mut c = NewUser { birthday: today(), ..candidate() };
        assert!(validate(&mut c).is_ok());
    }
}
