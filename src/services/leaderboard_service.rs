use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::response::LeaderboardEntryDto,
    repositories::{CourseRepository, EnrollmentRepository},
    services::content_tree::ContentTree,
};

/// Pure read over every enrollment of a course, recomputed per request.
pub struct LeaderboardService {
    enrollments: Arc<dyn EnrollmentRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl LeaderboardService {
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        courses: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            enrollments,
            courses,
        }
    }

    /// Learners ranked by derived progress, descending. The sort is stable
    /// over the enrolled_at-ascending feed, so equal progress ranks the
    /// earlier enrollment first.
    pub async fn rank(&self, course_id: &str) -> AppResult<Vec<LeaderboardEntryDto>> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Course with id '{}' not found", course_id))
            })?;

        let flat = ContentTree::flatten(&course);
        let feed = self.enrollments.list_by_course(course_id).await?;

        let mut entries: Vec<LeaderboardEntryDto> = feed
            .into_iter()
            .map(|enrollment| {
                let progress = enrollment.progress_percent(ContentTree::lesson_ids(&flat));
                LeaderboardEntryDto {
                    learner_id: enrollment.learner_id,
                    display_name: enrollment.learner_name,
                    progress,
                }
            })
            .collect();

        entries.sort_by(|a, b| b.progress.cmp(&a.progress));

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Enrollment;
    use crate::repositories::{MockCourseRepository, MockEnrollmentRepository};
    use crate::test_utils::fixtures::two_module_course;

    fn enrollment(learner: &str, name: &str, completed: &[&str]) -> Enrollment {
        let mut enrollment = Enrollment::new(learner, "course-1", name);
        enrollment.completed_lessons = completed.iter().map(|s| s.to_string()).collect();
        enrollment
    }

    fn service_with_feed(feed: Vec<Enrollment>) -> LeaderboardService {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_by_id()
            .returning(|_| Ok(Some(two_module_course())));

        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_list_by_course()
            .returning(move |_| Ok(feed.clone()));

        LeaderboardService::new(Arc::new(enrollments), Arc::new(courses))
    }

    #[actix_web::test]
    async fn ranks_by_progress_descending() {
        // 5 lessons total: 4/5 = 80, 5/5 = 100... use 4, 5 and 2 done.
        let service = service_with_feed(vec![
            enrollment("a", "Anna", &["l-1", "l-2", "l-3", "l-4"]),
            enrollment("b", "Ben", &["l-1", "l-2", "l-3", "l-4", "l-5"]),
            enrollment("c", "Cleo", &["l-1", "l-2"]),
        ]);

        let ranked = service.rank("course-1").await.expect("rank should succeed");

        let order: Vec<(&str, u8)> = ranked
            .iter()
            .map(|e| (e.learner_id.as_str(), e.progress))
            .collect();
        assert_eq!(order, vec![("b", 100), ("a", 80), ("c", 40)]);
    }

    #[actix_web::test]
    async fn ties_keep_first_enrolled_first() {
        let service = service_with_feed(vec![
            enrollment("early", "Early", &["l-1"]),
            enrollment("late", "Late", &["l-2"]),
        ]);

        let ranked = service.rank("course-1").await.expect("rank should succeed");

        assert_eq!(ranked[0].learner_id, "early");
        assert_eq!(ranked[1].learner_id, "late");
        assert_eq!(ranked[0].progress, ranked[1].progress);
    }

    #[actix_web::test]
    async fn unknown_course_is_not_found() {
        let mut courses = MockCourseRepository::new();
        courses.expect_find_by_id().returning(|_| Ok(None));

        let service =
            LeaderboardService::new(Arc::new(MockEnrollmentRepository::new()), Arc::new(courses));

        let result = service.rank("ghost").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
