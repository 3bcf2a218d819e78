pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod quiz_attempt;

pub use course::{Course, Module};
pub use enrollment::Enrollment;
pub use lesson::{Lesson, LessonContent, QuizQuestion, TestCase};
pub use quiz_attempt::{AttemptState, QuizAttempt, QuizScore};
