use strum_macros::{AsRefStr, Display, EnumString};

#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[default]
    Employee,
    Manager,
    Admin,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Role::from_str("manager"), Ok(Role::Manager));
        assert_eq!(Role::from_str("ADMIN"), Ok(Role::Admin));
        assert_eq!(Role::from_str("Employee"), Ok(Role::Employee));
    }

    #[test]
    fn rejects_unknown_roles() {
        assert!(Role::from_str("boss").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn renders_lowercase() {
        assert_eq!(Role::Manager.as_ref(), "manager");
        assert_eq!(Role::Admin.to_string(), "admin");
    }
}
