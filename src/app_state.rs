use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoCourseRepository, MongoEnrollmentRepository},
    services::{CourseService, EnrollmentService, LeaderboardService, QuizGradingService},
};

#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<CourseService>,
    pub enrollment_service: Arc<EnrollmentService>,
    pub quiz_grading_service: Arc<QuizGradingService>,
    pub leaderboard_service: Arc<LeaderboardService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let course_repository = Arc::new(MongoCourseRepository::new(
            &db,
            &config.courses_collection,
        ));
        course_repository.ensure_indexes().await?;

        let enrollment_repository = Arc::new(MongoEnrollmentRepository::new(
            &db,
            &config.enrollments_collection,
        ));
        enrollment_repository.ensure_indexes().await?;

        let course_service = Arc::new(CourseService::new(course_repository.clone()));
        let enrollment_service = Arc::new(EnrollmentService::new(
            enrollment_repository.clone(),
            course_repository.clone(),
        ));
        let quiz_grading_service = Arc::new(QuizGradingService::new(
            course_repository.clone(),
            enrollment_service.clone(),
        ));
        let leaderboard_service = Arc::new(LeaderboardService::new(
            enrollment_repository,
            course_repository,
        ));

        Ok(Self {
            course_service,
            enrollment_service,
            quiz_grading_service,
            leaderboard_service,
            db,
            config: Arc::new(config),
        })
    }
}
