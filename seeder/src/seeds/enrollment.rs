use crate::seed::Seeder;
use db::models::enrollment::Model as EnrollmentModel;
use db::models::{course, user};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use util::roles::Role;

pub struct EnrollmentSeeder;

#[async_trait::async_trait]
impl Seeder for EnrollmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let students = user::Entity::find()
            .filter(user::Column::Role.eq(Role::Student))
            .all(db)
            .await
            .unwrap_or_default();
        let courses = course::Entity::find().all(db).await.unwrap_or_default();

        if courses.is_empty() {
            return;
        }

        // Each student follows a random selection of courses
        for student in &students {
            for course in &courses {
                if fastrand::bool() {
                    let _ = EnrollmentModel::follow(db, student.id, course.id).await;
                }
            }
        }
    }
}
