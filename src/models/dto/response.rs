use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Course, Enrollment, Lesson};

#[derive(Debug, Clone, Serialize)]
pub struct CourseTreeDto {
    #[serde(flatten)]
    pub course: Course,
    pub total_lessons: usize,
}

impl From<Course> for CourseTreeDto {
    fn from(course: Course) -> Self {
        let total_lessons = course.total_lessons();
        CourseTreeDto {
            course,
            total_lessons,
        }
    }
}

/// A lesson as opened by a learner, with its neighbors in the flattened tree
/// for previous/next navigation. Terminal boundaries serialize as absent.
#[derive(Debug, Clone, Serialize)]
pub struct LessonViewDto {
    pub module_id: String,
    pub module_title: String,
    #[serde(flatten)]
    pub lesson: Lesson,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_lesson_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_lesson_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentDto {
    pub learner_id: String,
    pub course_id: String,
    pub completed_lessons: Vec<String>,
    pub enrolled_at: DateTime<Utc>,
    pub progress: u8, // derived, never stored
}

impl EnrollmentDto {
    pub fn from_enrollment(enrollment: Enrollment, progress: u8) -> Self {
        EnrollmentDto {
            learner_id: enrollment.learner_id,
            course_id: enrollment.course_id,
            completed_lessons: enrollment.completed_lessons,
            enrolled_at: enrollment.enrolled_at,
            progress,
        }
    }
}

/// Grading is client-visible by design: the response carries the correct
/// indices and explanations alongside the learner's selections.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSubmissionDto {
    pub score: usize,
    pub total: usize,
    pub all_correct: bool,
    pub questions: Vec<QuestionReviewDto>,
    /// Present when the perfect score auto-completed the lesson.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionReviewDto {
    pub selected_index: u32,
    pub correct_index: u32,
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntryDto {
    pub learner_id: String,
    pub display_name: String,
    pub progress: u8,
}
