use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::domain::{Course, Lesson, LessonContent, QuizQuestion, TestCase};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 100))]
    pub instructor: String,

    #[validate(length(min = 1, max = 50))]
    pub category: String,

    #[validate(length(min = 1, max = 50))]
    pub level: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(url)]
    pub image_url: Option<String>,
}

impl From<CreateCourseRequest> for Course {
    fn from(request: CreateCourseRequest) -> Self {
        Course::new(
            &request.title,
            &request.instructor,
            &request.category,
            &request.level,
            request.price,
            request.image_url,
        )
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateModuleRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub lessons: Vec<RawLessonInput>,
}

/// The authored lesson payload as clients send it: a loose record with a free-
/// form variant tag and one optional field group per variant. Normalized into
/// the typed `LessonContent` union on write; fields that do not belong to the
/// chosen variant are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLessonInput {
    pub id: Option<String>,  // storage-assigned id
    pub uid: Option<String>, // client-side alias used before first save
    pub title: String,
    pub duration: Option<String>,
    pub free: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    // article
    pub body: Option<String>,
    // quiz
    pub questions: Option<Vec<RawQuizQuestion>>,
    // assignment
    pub brief: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub deadline_days: Option<u32>,
    // coding
    pub problem_statement: Option<String>,
    pub starter_code: Option<String>,
    pub language: Option<String>,
    pub test_cases: Option<Vec<RawTestCase>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawQuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: Option<u32>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTestCase {
    pub input: Option<String>,
    pub expected_output: Option<String>,
}

impl From<RawLessonInput> for Lesson {
    fn from(raw: RawLessonInput) -> Self {
        let content = normalize_content(&raw);

        // Storage id wins over the client alias; a lesson with neither gets a
        // fresh id. Only the canonical id survives past this boundary.
        let id = none_if_empty(raw.id)
            .or_else(|| none_if_empty(raw.uid))
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Lesson {
            id,
            title: raw.title,
            duration: raw.duration.unwrap_or_default(),
            free: raw.free.unwrap_or(false),
            content,
        }
    }
}

fn normalize_content(raw: &RawLessonInput) -> LessonContent {
    let kind = raw
        .kind
        .as_deref()
        .map(|k| k.trim().to_lowercase())
        .unwrap_or_default();

    match kind.as_str() {
        "quiz" => LessonContent::Quiz {
            questions: raw
                .questions
                .clone()
                .unwrap_or_default()
                .into_iter()
                .map(QuizQuestion::from)
                .collect(),
        },
        "assignment" => LessonContent::Assignment {
            brief: raw.brief.clone().unwrap_or_default(),
            requirements: raw.requirements.clone().unwrap_or_default(),
            deadline_days: raw.deadline_days.unwrap_or(7).max(1),
        },
        "coding" => LessonContent::Coding {
            problem_statement: raw.problem_statement.clone().unwrap_or_default(),
            starter_code: raw.starter_code.clone().unwrap_or_default(),
            language: raw.language.clone().unwrap_or_default(),
            test_cases: raw
                .test_cases
                .clone()
                .unwrap_or_default()
                .into_iter()
                .map(TestCase::from)
                .collect(),
        },
        // Unknown or missing tag defaults to an article.
        _ => LessonContent::Article {
            body: raw.body.clone().unwrap_or_default(),
        },
    }
}

impl From<RawQuizQuestion> for QuizQuestion {
    fn from(raw: RawQuizQuestion) -> Self {
        QuizQuestion {
            prompt: raw.prompt,
            options: raw.options,
            correct_index: raw.correct_index.unwrap_or(0),
            explanation: raw.explanation.and_then(none_if_empty_owned),
        }
    }
}

impl From<RawTestCase> for TestCase {
    fn from(raw: RawTestCase) -> Self {
        TestCase {
            input: raw.input.unwrap_or_default(),
            expected_output: raw.expected_output.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EnrollRequest {
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuizRequest {
    /// Selected option index per question, in question order; `null` marks an
    /// unanswered question (the submission will be rejected).
    pub selections: Vec<Option<u32>>,
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.and_then(none_if_empty_owned)
}

fn none_if_empty_owned(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
