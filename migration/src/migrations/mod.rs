pub mod m202608070001_create_users;
pub mod m202608070002_create_courses;
pub mod m202608070003_create_student_courses;
