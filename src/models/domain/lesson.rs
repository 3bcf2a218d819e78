use serde::{Deserialize, Serialize};

/// A single lesson inside a module. Exactly one content variant per lesson;
/// the variant tag is fixed at authoring time.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Lesson {
    pub id: String,       // canonical id, normalized at the authoring boundary
    pub title: String,
    pub duration: String, // display label, e.g. "12 min"
    pub free: bool,       // free lessons are visible without an enrollment
    pub content: LessonContent,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LessonContent {
    Article {
        body: String,
    },
    Quiz {
        questions: Vec<QuizQuestion>,
    },
    Assignment {
        brief: String,
        requirements: Vec<String>,
        deadline_days: u32,
    },
    Coding {
        problem_statement: String,
        starter_code: String,
        language: String,
        test_cases: Vec<TestCase>,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>, // four choices by convention
    pub correct_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
}

impl LessonContent {
    pub fn kind(&self) -> &'static str {
        match self {
            LessonContent::Article { .. } => "article",
            LessonContent::Quiz { .. } => "quiz",
            LessonContent::Assignment { .. } => "assignment",
            LessonContent::Coding { .. } => "coding",
        }
    }

    /// A valid-but-empty lesson: present in the tree but with nothing to show.
    /// Not an error state; consumers render a placeholder instead.
    pub fn is_empty(&self) -> bool {
        match self {
            LessonContent::Article { body } => body.trim().is_empty(),
            LessonContent::Quiz { questions } => questions.is_empty(),
            LessonContent::Assignment { brief, .. } => brief.trim().is_empty(),
            LessonContent::Coding {
                problem_statement, ..
            } => problem_statement.trim().is_empty(),
        }
    }
}
