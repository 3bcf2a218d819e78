pub mod access;
pub mod content_tree;
pub mod course_service;
pub mod enrollment_service;
pub mod leaderboard_service;
pub mod quiz_grading_service;

pub use content_tree::{ContentTree, FlatLesson};
pub use course_service::CourseService;
pub use enrollment_service::EnrollmentService;
pub use leaderboard_service::LeaderboardService;
pub use quiz_grading_service::QuizGradingService;
