use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-learner, per-course progress record. `completed_lessons` is a grow-only
/// set of lesson ids; the percentage is always derived from it against the live
/// tree, never stored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Enrollment {
    pub learner_id: String,
    pub course_id: String,
    pub learner_name: String, // display name captured at enroll time
    pub completed_lessons: Vec<String>,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(learner_id: &str, course_id: &str, learner_name: &str) -> Self {
        Enrollment {
            learner_id: learner_id.to_string(),
            course_id: course_id.to_string(),
            learner_name: learner_name.to_string(),
            completed_lessons: Vec::new(),
            enrolled_at: Utc::now(),
        }
    }

    pub fn is_complete(&self, lesson_id: &str) -> bool {
        self.completed_lessons.iter().any(|id| id == lesson_id)
    }

    /// Completion percentage against the lesson ids currently in the tree.
    /// Completed ids that no longer exist in the tree do not count; an empty
    /// tree yields 0. Result is rounded and clamped to [0, 100].
    pub fn progress_percent<'a, I>(&self, current_lesson_ids: I) -> u8
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut total = 0usize;
        let mut done = 0usize;
        for lesson_id in current_lesson_ids {
            total += 1;
            if self.is_complete(lesson_id) {
                done += 1;
            }
        }

        if total == 0 {
            return 0;
        }

        let percent = (done as f64 / total as f64 * 100.0).round();
        percent.clamp(0.0, 100.0) as u8
    }
}
