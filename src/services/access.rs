use crate::models::domain::{Enrollment, Lesson};

/// The only authorization rule in the core: a lesson is open to a learner who
/// holds an enrollment for the course, or when the lesson is marked free.
/// Evaluated per lesson and never cached, so enrolling mid-session unlocks
/// everything on the next check. A boolean decision, not an error path.
pub fn can_open(enrollment: Option<&Enrollment>, lesson: &Lesson) -> bool {
    enrollment.is_some() || lesson.free
}
