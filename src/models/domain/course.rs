use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::lesson::Lesson;

/// An authored course: metadata plus the ordered module -> lesson hierarchy.
/// Read-only to learner flows; only the authoring endpoints write it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub category: String,
    pub level: String, // e.g. "beginner", "intermediate", "advanced"
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub modules: Vec<Module>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub order: u32, // dense 0-based, mirrors array position
    pub lessons: Vec<Lesson>,
}

impl Course {
    pub fn new(
        title: &str,
        instructor: &str,
        category: &str,
        level: &str,
        price: f64,
        image_url: Option<String>,
    ) -> Self {
        Course {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            instructor: instructor.to_string(),
            category: category.to_string(),
            level: level.to_string(),
            price,
            image_url,
            modules: Vec::new(),
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    pub fn total_lessons(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    pub fn find_module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }
}
