use async_trait::async_trait;
use chrono::Utc;
use mongodb::{
    bson::{doc, to_bson},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Course, Module},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: Course) -> AppResult<Course>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>>;
    /// Replace the whole module list of a course. Returns the updated course,
    /// or None when the course does not exist.
    async fn update_modules(
        &self,
        course_id: &str,
        modules: Vec<Module>,
    ) -> AppResult<Option<Course>>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for courses collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1 })
            .options(IndexOptions::builder().name("category".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(category_index).await?;

        log::info!("Successfully created indexes for courses collection");
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn create(&self, course: Course) -> AppResult<Course> {
        let existing = self.collection.find_one(doc! { "id": &course.id }).await?;
        if existing.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "Course with id '{}' already exists",
                course.id
            )));
        }

        self.collection.insert_one(&course).await?;
        Ok(course)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Course>> {
        let course = self.collection.find_one(doc! { "id": id }).await?;
        Ok(course)
    }

    async fn update_modules(
        &self,
        course_id: &str,
        modules: Vec<Module>,
    ) -> AppResult<Option<Course>> {
        let modules_bson = to_bson(&modules)
            .map_err(|e| AppError::InternalError(format!("BSON serialization error: {}", e)))?;
        let modified_at_bson = to_bson(&Utc::now())
            .map_err(|e| AppError::InternalError(format!("BSON serialization error: {}", e)))?;

        let updated = self
            .collection
            .find_one_and_update(
                doc! { "id": course_id },
                doc! {
                    "$set": {
                        "modules": modules_bson,
                        "modified_at": modified_at_bson,
                    }
                },
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }
}
