use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const ADMIN_OR_STAFF: &[Role] = &[Role::Admin, Role::Staff];

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Staff, Role::Customer];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Customer => "customer",
        }
    }

    pub fn is_admin_or_staff(self) -> bool {
        matches!(self, Role::Admin | Role::Staff)
    }

    pub fn can_create(self) -> bool {
        self.is_admin_or_staff()
    }

    pub fn can_update(self) -> bool {
        self.is_admin_or_staff()
    }

    pub fn can_delete(self) -> bool {
        self == Role::Admin
    }

    /// Where a freshly signed-in user lands.
    pub fn landing_path(self) -> &'static str {
        match self {
            Role::Customer => "/profile",
            Role::Admin | Role::Staff => "/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == raw)
            .ok_or_else(|| ValidationError::UnknownRole(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn parses_known_roles_exactly() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("staff".parse::<Role>(), Ok(Role::Staff));
        assert_eq!("customer".parse::<Role>(), Ok(Role::Customer));
    }

    #[wasm_bindgen_test]
    fn rejects_unknown_or_differently_cased_roles() {
        assert_eq!(
            "Admin".parse::<Role>(),
            Err(ValidationError::UnknownRole("Admin".into()))
        );
        assert!("superuser".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn crud_permissions_follow_role() {
        assert!(Role::Admin.can_delete());
        assert!(!Role::Staff.can_delete());
        assert!(Role::Staff.can_create());
        assert!(!Role::Customer.can_create());
        assert!(!Role::Customer.can_update());
    }

    #[test]
    fn customers_land_on_profile() {
        assert_eq!(Role::Customer.landing_path(), "/profile");
        assert_eq!(Role::Staff.landing_path(), "/dashboard");
        assert_eq!(Role::Admin.landing_path(), "/dashboard");
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_value(Role::Staff).unwrap(), serde_json::json!("staff"));
        let parsed: Role = serde_json::from_value(serde_json::json!("customer")).unwrap();
        assert_eq!(parsed, Role::Customer);
        assert!(serde_json::from_value::<Role>(serde_json::json!("owner")).is_err());
    }
}
