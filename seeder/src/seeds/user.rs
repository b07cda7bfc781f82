use crate::seed::Seeder;
use db::models::user::Model;
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name};
use sea_orm::DatabaseConnection;
use util::roles::Role;

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Fixed demo teacher
        let _ = Model::create(db, "teacher@example.com", "password123", "Tamar Oren", Role::Teacher).await;

        // Fixed demo student
        let _ = Model::create(db, "student@example.com", "password123", "Sam Okafor", Role::Student).await;

        // Random students
        for _ in 0..8 {
            let email: String = SafeEmail().fake();
            let name: String = Name().fake();
            let _ = Model::create(db, &email, "password123", &name, Role::Student).await;
        }

        // A couple more teachers with courses to discover
        for _ in 0..2 {
            let email: String = SafeEmail().fake();
            let name: String = Name().fake();
            let _ = Model::create(db, &email, "password123", &name, Role::Teacher).await;
        }
    }
}
