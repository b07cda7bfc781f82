use crate::seed::{Seeder, run_seeder};
use crate::seeds::{course::CourseSeeder, enrollment::EnrollmentSeeder, user::UserSeeder};

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(CourseSeeder), "Course"),
        (Box::new(EnrollmentSeeder), "Enrollment"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
