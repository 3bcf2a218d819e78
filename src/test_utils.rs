#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{
        Course, Enrollment, Lesson, LessonContent, Module, QuizQuestion, TestCase,
    };

    pub fn article_lesson(id: &str, title: &str, free: bool) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: title.to_string(),
            duration: "10 min".to_string(),
            free,
            content: LessonContent::Article {
                body: format!("Body of {}", title),
            },
        }
    }

    /// Three questions; correct option indices are 1, 0, 3.
    pub fn quiz_lesson(id: &str) -> Lesson {
        let questions = [1u32, 0, 3]
            .into_iter()
            .enumerate()
            .map(|(i, correct_index)| QuizQuestion {
                prompt: format!("Question {}", i + 1),
                options: vec![
                    "Option A".to_string(),
                    "Option B".to_string(),
                    "Option C".to_string(),
                    "Option D".to_string(),
                ],
                correct_index,
                explanation: Some(format!("Explanation {}", i + 1)),
            })
            .collect();

        Lesson {
            id: id.to_string(),
            title: "Checkpoint quiz".to_string(),
            duration: "5 min".to_string(),
            free: false,
            content: LessonContent::Quiz { questions },
        }
    }

    pub fn coding_lesson(id: &str) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: "FizzBuzz".to_string(),
            duration: "20 min".to_string(),
            free: false,
            content: LessonContent::Coding {
                problem_statement: "Print fizzbuzz up to n".to_string(),
                starter_code: "fn main() {}".to_string(),
                language: "rust".to_string(),
                test_cases: vec![TestCase {
                    input: "3".to_string(),
                    expected_output: "1\n2\nFizz".to_string(),
                }],
            },
        }
    }

    pub fn assignment_lesson(id: &str) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: "Build a CLI".to_string(),
            duration: "2 h".to_string(),
            free: false,
            content: LessonContent::Assignment {
                brief: "Ship a small command line tool".to_string(),
                requirements: vec!["argument parsing".to_string(), "tests".to_string()],
                deadline_days: 7,
            },
        }
    }

    /// The standard test course: id "course-1", two modules, five lessons
    /// l-1..l-5. l-1 is the only free lesson; l-4 is the quiz.
    pub fn two_module_course() -> Course {
        let mut course = Course::new(
            "Practical Rust",
            "Ada Lovelace",
            "programming",
            "beginner",
            49.0,
            None,
        );
        course.id = "course-1".to_string();
        course.modules = vec![
            Module {
                id: "m-1".to_string(),
                title: "Getting started".to_string(),
                order: 0,
                lessons: vec![
                    article_lesson("l-1", "Welcome", true),
                    article_lesson("l-2", "Toolchain setup", false),
                    coding_lesson("l-3"),
                ],
            },
            Module {
                id: "m-2".to_string(),
                title: "First project".to_string(),
                order: 1,
                lessons: vec![quiz_lesson("l-4"), assignment_lesson("l-5")],
            },
        ];
        course
    }

    pub fn enrollment_with(learner_id: &str, name: &str, completed: &[&str]) -> Enrollment {
        let mut enrollment = Enrollment::new(learner_id, "course-1", name);
        enrollment.completed_lessons = completed.iter().map(|s| s.to_string()).collect();
        enrollment
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_course_shape() {
        let course = two_module_course();

        assert_eq!(course.modules.len(), 2);
        assert_eq!(course.total_lessons(), 5);
        assert!(course.modules[0].lessons[0].free);
        assert_eq!(course.modules[1].lessons[0].content.kind(), "quiz");
    }

    #[test]
    fn test_fixture_enrollment() {
        let enrollment = enrollment_with("learner-1", "Ada", &["l-1", "l-2"]);

        assert_eq!(enrollment.completed_lessons.len(), 2);
        assert!(enrollment.is_complete("l-1"));
        assert!(!enrollment.is_complete("l-3"));
    }
}
