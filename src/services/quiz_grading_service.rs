use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{LessonContent, QuizAttempt, QuizQuestion},
        dto::{
            request::SubmitQuizRequest,
            response::{QuestionReviewDto, QuizSubmissionDto},
        },
    },
    repositories::CourseRepository,
    services::{content_tree::ContentTree, enrollment_service::EnrollmentService},
};

/// Server-side grading of a full selection vector. A perfect score emits the
/// AllCorrect outcome, which is the only quiz-originated trigger allowed to
/// request a completion write; partial scores never touch the done-set.
pub struct QuizGradingService {
    courses: Arc<dyn CourseRepository>,
    enrollments: Arc<EnrollmentService>,
}

impl QuizGradingService {
    pub fn new(courses: Arc<dyn CourseRepository>, enrollments: Arc<EnrollmentService>) -> Self {
        Self {
            courses,
            enrollments,
        }
    }

    pub async fn submit(
        &self,
        learner_id: &str,
        course_id: &str,
        lesson_id: &str,
        request: SubmitQuizRequest,
    ) -> AppResult<QuizSubmissionDto> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Course with id '{}' not found", course_id))
            })?;

        let flat = ContentTree::flatten(&course);
        let position = ContentTree::locate(&flat, lesson_id).ok_or_else(|| {
            AppError::NotFound(format!("Lesson with id '{}' not found", lesson_id))
        })?;

        let questions: Vec<QuizQuestion> = match &flat[position].lesson.content {
            LessonContent::Quiz { questions } if !questions.is_empty() => questions.clone(),
            LessonContent::Quiz { .. } => {
                return Err(AppError::ValidationError(
                    "Quiz has no questions".to_string(),
                ))
            }
            _ => {
                return Err(AppError::ValidationError(
                    "Lesson is not a quiz".to_string(),
                ))
            }
        };

        if request.selections.len() != questions.len() {
            return Err(AppError::ValidationError(
                "Answer all questions before submitting".to_string(),
            ));
        }

        let mut attempt = QuizAttempt::start(questions.len());
        for (question_index, selection) in request.selections.iter().enumerate() {
            if let Some(option_index) = selection {
                attempt = attempt.select(question_index, *option_index);
            }
        }

        let (attempt, score) = attempt.submit(&questions);
        let score = score.ok_or_else(|| {
            AppError::ValidationError("Answer all questions before submitting".to_string())
        })?;

        let progress = if score.all_correct {
            match self
                .enrollments
                .mark_complete(learner_id, course_id, lesson_id)
                .await
            {
                Ok(enrollment) => Some(enrollment.progress),
                // A learner without an enrollment (free quiz lesson) still
                // gets the grade; there is just no done-set to update.
                Err(AppError::NotFound(reason)) => {
                    log::warn!("AllCorrect without completion write: {}", reason);
                    None
                }
                Err(other) => return Err(other),
            }
        } else {
            None
        };

        let reviews = questions
            .iter()
            .zip(attempt.selections().iter())
            .filter_map(|(question, selection)| {
                selection.map(|selected_index| QuestionReviewDto {
                    selected_index,
                    correct_index: question.correct_index,
                    is_correct: selected_index == question.correct_index,
                    explanation: question.explanation.clone(),
                })
            })
            .collect();

        Ok(QuizSubmissionDto {
            score: score.score,
            total: score.total,
            all_correct: score.all_correct,
            questions: reviews,
            progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Enrollment;
    use crate::repositories::{MockCourseRepository, MockEnrollmentRepository};
    use crate::test_utils::fixtures::two_module_course;

    fn service_with(enrollments: MockEnrollmentRepository) -> QuizGradingService {
        let mut courses = MockCourseRepository::new();
        courses
            .expect_find_by_id()
            .returning(|_| Ok(Some(two_module_course())));

        let mut gate_courses = MockCourseRepository::new();
        gate_courses
            .expect_find_by_id()
            .returning(|_| Ok(Some(two_module_course())));

        let enrollment_service =
            Arc::new(EnrollmentService::new(Arc::new(enrollments), Arc::new(gate_courses)));
        QuizGradingService::new(Arc::new(courses), enrollment_service)
    }

    fn enrolled(completed: &[&str]) -> Enrollment {
        let mut enrollment = Enrollment::new("learner-1", "course-1", "Ada");
        enrollment.completed_lessons = completed.iter().map(|s| s.to_string()).collect();
        enrollment
    }

    // l-4 in the fixture course is a quiz with three questions whose correct
    // indices are 1, 0, 3.

    #[actix_web::test]
    async fn partial_score_never_completes_the_lesson() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find_by_learner_and_course()
            .returning(|_, _| Ok(Some(enrolled(&[]))));
        // no add_completed_lesson expectation: completion must not be requested

        let service = service_with(enrollments);
        let request = SubmitQuizRequest {
            selections: vec![Some(1), Some(0), Some(0)],
        };

        let result = service
            .submit("learner-1", "course-1", "l-4", request)
            .await
            .expect("submission should grade");

        assert_eq!(result.score, 2);
        assert_eq!(result.total, 3);
        assert!(!result.all_correct);
        assert!(result.progress.is_none());
    }

    #[actix_web::test]
    async fn perfect_score_marks_the_lesson_complete() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find_by_learner_and_course()
            .returning(|_, _| Ok(Some(enrolled(&[]))));
        enrollments
            .expect_add_completed_lesson()
            .times(1)
            .returning(|_, _, _| Ok(Some(enrolled(&["l-4"]))));

        let service = service_with(enrollments);
        let request = SubmitQuizRequest {
            selections: vec![Some(1), Some(0), Some(3)],
        };

        let result = service
            .submit("learner-1", "course-1", "l-4", request)
            .await
            .expect("submission should grade");

        assert_eq!(result.score, 3);
        assert!(result.all_correct);
        assert_eq!(result.progress, Some(20)); // 1 of 5 lessons
        assert!(result.questions.iter().all(|q| q.is_correct));
    }

    #[actix_web::test]
    async fn unanswered_submission_is_rejected() {
        let service = service_with(MockEnrollmentRepository::new());
        let request = SubmitQuizRequest {
            selections: vec![Some(1), None, Some(3)],
        };

        let result = service.submit("learner-1", "course-1", "l-4", request).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn submitting_against_a_non_quiz_lesson_is_rejected() {
        let service = service_with(MockEnrollmentRepository::new());
        let request = SubmitQuizRequest {
            selections: vec![Some(0)],
        };

        let result = service.submit("learner-1", "course-1", "l-1", request).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn perfect_score_without_enrollment_still_returns_the_grade() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find_by_learner_and_course()
            .returning(|_, _| Ok(None));

        let service = service_with(enrollments);
        let request = SubmitQuizRequest {
            selections: vec![Some(1), Some(0), Some(3)],
        };

        let result = service
            .submit("learner-1", "course-1", "l-4", request)
            .await
            .expect("grading should not require an enrollment");

        assert!(result.all_correct);
        assert!(result.progress.is_none());
    }
}
