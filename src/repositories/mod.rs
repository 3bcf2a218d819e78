pub mod course_repository;
pub mod enrollment_repository;

pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use enrollment_repository::{EnrollmentRepository, MongoEnrollmentRepository};

#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
