use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, Set};
use serde::Serialize;

/// A student following a course, one row per `(student_id, course_id)`
/// pair in the `student_courses` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "student_courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Belongs to the following student.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id"
    )]
    User,

    /// Belongs to the followed course.
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts the pair as-is. Duplicate follows are rejected by the
    /// table's composite primary key, not checked here.
    pub async fn follow(
        db: &DatabaseConnection,
        student_id: i64,
        course_id: i64,
    ) -> Result<Model, DbErr> {
        let enrollment = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
        };

        enrollment.insert(db).await
    }

    /// Deletes the pair if present and returns how many rows matched.
    /// Removing a pair that does not exist succeeds with zero deletions.
    pub async fn unfollow(
        db: &DatabaseConnection,
        student_id: i64,
        course_id: i64,
    ) -> Result<u64, DbErr> {
        Entity::delete_many()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .exec(db)
            .await
            .map(|res| res.rows_affected)
    }

    /// Ids of all courses `student_id` currently follows.
    pub async fn followed_course_ids(
        db: &DatabaseConnection,
        student_id: i64,
    ) -> Result<Vec<i64>, DbErr> {
        let rows = Entity::find()
            .filter(Column::StudentId.eq(student_id))
            .all(db)
            .await?;

        Ok(rows.iter().map(|row| row.course_id).collect())
    }
}
