use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, Set};
use serde::Serialize;
use util::roles::Role;

/// Represents an account in the `users` table.
///
/// Accounts are created out-of-band (by the seeder or an operator);
/// there is no signup endpoint.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique login email. Also used as the session's display username.
    pub email: String,
    /// argon2 hash of the password; plaintext is never stored.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name shown next to courses the user owns.
    pub name: String,
    /// `teacher` or `student`, fixed at creation.
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Courses owned by this user (teachers only in practice).
    #[sea_orm(has_many = "super::course::Entity")]
    Course,

    /// Enrollments held by this user (students only in practice).
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a new user with a freshly hashed password.
    pub async fn create(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(format!("Failed to hash password: {e}")))?
            .to_string();

        let now = Utc::now();
        let user = ActiveModel {
            email: Set(email.to_owned()),
            password_hash: Set(password_hash),
            name: Set(name.to_owned()),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user.insert(db).await
    }

    /// Looks up a user by login email.
    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await
    }

    /// Verifies a candidate password against the stored hash.
    ///
    /// An unparsable stored hash counts as a failed verification rather
    /// than an error, so a corrupted row cannot be logged into.
    pub fn verify_password(&self, password: &str) -> bool {
        PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}
