use crate::models::domain::{Course, Lesson};

/// One entry of the flattened course: a lesson with its position in the
/// module -> lesson hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatLesson {
    pub module_id: String,
    pub module_title: String,
    pub module_index: usize,
    pub lesson_index: usize,
    pub lesson: Lesson,
}

/// Read-only traversal over a course's current shape. All functions are pure;
/// the flattened order is module order then lesson order within the module.
pub struct ContentTree;

impl ContentTree {
    pub fn flatten(course: &Course) -> Vec<FlatLesson> {
        let mut flat = Vec::with_capacity(course.total_lessons());
        for (module_index, module) in course.modules.iter().enumerate() {
            for (lesson_index, lesson) in module.lessons.iter().enumerate() {
                flat.push(FlatLesson {
                    module_id: module.id.clone(),
                    module_title: module.title.clone(),
                    module_index,
                    lesson_index,
                    lesson: lesson.clone(),
                });
            }
        }
        flat
    }

    /// Position of a lesson in the flattened sequence. An id that is no longer
    /// in the tree is simply not found, never an error.
    pub fn locate(flat: &[FlatLesson], lesson_id: &str) -> Option<usize> {
        flat.iter().position(|entry| entry.lesson.id == lesson_id)
    }

    /// Adjacent entry after `position`, or None at the end. No wraparound.
    pub fn next(flat: &[FlatLesson], position: usize) -> Option<&FlatLesson> {
        flat.get(position + 1)
    }

    /// Adjacent entry before `position`, or None at the start. No wraparound.
    pub fn previous(flat: &[FlatLesson], position: usize) -> Option<&FlatLesson> {
        position.checked_sub(1).and_then(|p| flat.get(p))
    }

    pub fn lesson_ids(flat: &[FlatLesson]) -> impl Iterator<Item = &str> + '_ {
        flat.iter().map(|entry| entry.lesson.id.as_str())
    }
}
