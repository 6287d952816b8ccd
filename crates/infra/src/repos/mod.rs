pub mod courses;
pub mod enrollments;
pub mod students;

pub use courses::{CourseRepo, CreateCourseData, UpdateCourseData};
pub use enrollments::EnrollmentRepo;
pub use students::{CreateStudentData, StudentRepo, UpdateStudentData};
