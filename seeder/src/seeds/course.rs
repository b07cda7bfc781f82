use crate::seed::Seeder;
use db::models::course::Model as CourseModel;
use db::models::user;
use fake::{Fake, faker::lorem::en::Paragraph};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use util::roles::Role;

pub struct CourseSeeder;

const DEMO_TITLES: [&str; 4] = [
    "Algebra 101",
    "Biology 201",
    "Introduction to Programming",
    "World History",
];

#[async_trait::async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let teachers = user::Entity::find()
            .filter(user::Column::Role.eq(Role::Teacher))
            .all(db)
            .await
            .unwrap_or_default();

        if teachers.is_empty() {
            return;
        }

        for (i, title) in DEMO_TITLES.iter().enumerate() {
            let teacher = &teachers[i % teachers.len()];
            let description: String = Paragraph(1..3).fake();
            let _ = CourseModel::create(db, title, &description, "", "", teacher.id, &teacher.email)
                .await;
        }
    }
}
