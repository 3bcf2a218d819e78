use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Enrollment,
        dto::{request::EnrollRequest, response::EnrollmentDto},
    },
    repositories::{CourseRepository, EnrollmentRepository},
    services::content_tree::ContentTree,
};

/// The single authority for the done-set and the derived percentage. All
/// presentation paths read progress through here rather than re-deriving it.
pub struct EnrollmentService {
    enrollments: Arc<dyn EnrollmentRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl EnrollmentService {
    pub fn new(
        enrollments: Arc<dyn EnrollmentRepository>,
        courses: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            enrollments,
            courses,
        }
    }

    pub async fn enroll(
        &self,
        learner_id: &str,
        course_id: &str,
        request: EnrollRequest,
    ) -> AppResult<EnrollmentDto> {
        request.validate()?;

        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Course with id '{}' not found", course_id))
            })?;

        let enrollment = self
            .enrollments
            .create(Enrollment::new(learner_id, course_id, &request.display_name))
            .await?;

        let flat = ContentTree::flatten(&course);
        let progress = enrollment.progress_percent(ContentTree::lesson_ids(&flat));
        Ok(EnrollmentDto::from_enrollment(enrollment, progress))
    }

    /// The enrollment record if the learner holds one; used by the access gate.
    pub async fn find(
        &self,
        learner_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Enrollment>> {
        self.enrollments
            .find_by_learner_and_course(learner_id, course_id)
            .await
    }

    pub async fn get_enrollment(
        &self,
        learner_id: &str,
        course_id: &str,
    ) -> AppResult<EnrollmentDto> {
        let enrollment = self
            .find(learner_id, course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No enrollment for learner '{}' in course '{}'",
                    learner_id, course_id
                ))
            })?;

        let progress = self.progress_of(&enrollment).await?;
        Ok(EnrollmentDto::from_enrollment(enrollment, progress))
    }

    /// Insert a lesson into the done-set. Idempotent: a lesson already present
    /// leaves the set and the percentage unchanged. A lesson id that is not in
    /// the current tree is ignored with a warning rather than failed, since
    /// authored content can change between a client's tree fetch and its next
    /// action. The percentage is always recomputed from the done-set against
    /// the live tree, never taken from the client.
    pub async fn mark_complete(
        &self,
        learner_id: &str,
        course_id: &str,
        lesson_id: &str,
    ) -> AppResult<EnrollmentDto> {
        let enrollment = self
            .find(learner_id, course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No enrollment for learner '{}' in course '{}'",
                    learner_id, course_id
                ))
            })?;

        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Course with id '{}' not found", course_id))
            })?;

        let flat = ContentTree::flatten(&course);

        let updated = if ContentTree::locate(&flat, lesson_id).is_none() {
            log::warn!(
                "Ignoring completion of lesson '{}' not present in course '{}'",
                lesson_id,
                course_id
            );
            enrollment
        } else if enrollment.is_complete(lesson_id) {
            enrollment
        } else {
            match self
                .enrollments
                .add_completed_lesson(learner_id, course_id, lesson_id)
                .await?
            {
                Some(updated) => updated,
                None => enrollment,
            }
        };

        let progress = updated.progress_percent(ContentTree::lesson_ids(&flat));
        Ok(EnrollmentDto::from_enrollment(updated, progress))
    }

    /// Derived percentage against the live tree; a course that has vanished
    /// from the catalog yields 0 rather than an error.
    pub async fn progress_of(&self, enrollment: &Enrollment) -> AppResult<u8> {
        let course = self.courses.find_by_id(&enrollment.course_id).await?;

        let progress = match course {
            Some(course) => {
                let flat = ContentTree::flatten(&course);
                enrollment.progress_percent(ContentTree::lesson_ids(&flat))
            }
            None => 0,
        };

        Ok(progress)
    }
}
