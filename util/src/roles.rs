use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Account role, fixed when the user row is created.
///
/// Teachers own and manage courses; students discover and follow them.
/// The role lives on the `users` table and is copied into the session at
/// login, so route guards never have to hit the database to check it.
#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "teacher")]
    Teacher,

    #[sea_orm(string_value = "student")]
    Student,
}
