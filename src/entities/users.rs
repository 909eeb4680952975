use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Intentionally carries no unique index; duplicate emails are not
    /// rejected anywhere in the exposed surface.
    pub email: String,

    /// Stores a hash, never plaintext. Creation writes an Argon2id hash while
    /// login compares an unsalted SHA-256 hex digest against this column.
    pub password: String,

    pub role: Role,
}

/// Closed set of account privilege levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Role {
    #[sea_orm(string_value = "Admin")]
    Admin,
    #[sea_orm(string_value = "User")]
    User,
    #[sea_orm(string_value = "SystemOperator")]
    SystemOperator,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "Admin"),
            Self::User => write!(f, "User"),
            Self::SystemOperator => write!(f, "SystemOperator"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognized role: {0}")]
pub struct InvalidRole(String);

impl FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "User" => Ok(Self::User),
            "SystemOperator" => Ok(Self::SystemOperator),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::prompts::Entity")]
    Prompts,
}

impl Related<super::prompts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prompts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_every_member() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("User".parse::<Role>().unwrap(), Role::User);
        assert_eq!(
            "SystemOperator".parse::<Role>().unwrap(),
            Role::SystemOperator
        );
    }

    #[test]
    fn role_rejects_unknown_and_wrong_case() {
        assert!("Superuser".parse::<Role>().is_err());
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn role_display_round_trips() {
        for role in [Role::Admin, Role::User, Role::SystemOperator] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
