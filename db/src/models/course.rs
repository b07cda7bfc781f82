use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, QueryOrder, Set};
use serde::Serialize;

use crate::models::enrollment;
use crate::models::user;

/// Represents a course in the `courses` table.
///
/// Every course has exactly one owning teacher, fixed at creation. Rows
/// are created and deleted, never updated in place.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Public `/uploads/...` path of the cover image, or `""` when none
    /// was supplied.
    pub image_url: String,
    /// Public `/uploads/...` path of the course document, or `""`.
    pub document_url: String,
    /// Owning teacher.
    pub teacher_id: i64,
    /// Owner's email, snapshotted at creation time.
    pub teacher_email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to the owning teacher.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TeacherId",
        to = "super::user::Column::Id"
    )]
    User,

    /// Enrollments pointing at this course.
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Persists a new course owned by `teacher_id`.
    ///
    /// `image_url` / `document_url` are empty strings when no file was
    /// uploaded for that slot.
    pub async fn create(
        db: &DatabaseConnection,
        title: &str,
        description: &str,
        image_url: &str,
        document_url: &str,
        teacher_id: i64,
        teacher_email: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let course = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            image_url: Set(image_url.to_owned()),
            document_url: Set(document_url.to_owned()),
            teacher_id: Set(teacher_id),
            teacher_email: Set(teacher_email.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        course.insert(db).await
    }

    /// Courses owned by `teacher_id`, oldest first.
    pub async fn owned_by(db: &DatabaseConnection, teacher_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Courses `student_id` follows, resolved through the enrollment join.
    pub async fn followed_by(db: &DatabaseConnection, student_id: i64) -> Result<Vec<Model>, DbErr> {
        let rows = enrollment::Entity::find()
            .filter(enrollment::Column::StudentId.eq(student_id))
            .find_also_related(Entity)
            .order_by_asc(enrollment::Column::CourseId)
            .all(db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, course)| course).collect())
    }

    /// The discoverable catalogue: every course paired with its owner,
    /// minus the ones `exclude_followed_for` already follows.
    ///
    /// Ordered by id so the listing is deterministic for a fixed data set.
    /// The `is_not_in` filter is only applied when the student follows at
    /// least one course; `NOT IN ()` is not valid SQL.
    pub async fn find_discoverable(
        db: &DatabaseConnection,
        exclude_followed_for: Option<i64>,
    ) -> Result<Vec<(Model, Option<user::Model>)>, DbErr> {
        let mut query = Entity::find()
            .find_also_related(user::Entity)
            .order_by_asc(Column::Id);

        if let Some(student_id) = exclude_followed_for {
            let followed = enrollment::Model::followed_course_ids(db, student_id).await?;
            if !followed.is_empty() {
                query = query.filter(Column::Id.is_not_in(followed));
            }
        }

        query.all(db).await
    }
}
