use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Enrollment,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment>;
    async fn find_by_learner_and_course(
        &self,
        learner_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Enrollment>>;
    /// Atomic set insert at the persistence boundary; concurrent calls for the
    /// same or different lessons commute. Returns the updated enrollment, or
    /// None when no enrollment exists.
    async fn add_completed_lesson(
        &self,
        learner_id: &str,
        course_id: &str,
        lesson_id: &str,
    ) -> AppResult<Option<Enrollment>>;
    /// All enrollments of a course, ordered by enrollment time ascending.
    async fn list_by_course(&self, course_id: &str) -> AppResult<Vec<Enrollment>>;
}

pub struct MongoEnrollmentRepository {
    collection: Collection<Enrollment>,
}

impl MongoEnrollmentRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for enrollments collection");

        let learner_course_index = IndexModel::builder()
            .keys(doc! { "learner_id": 1, "course_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("learner_course_unique".to_string())
                    .build(),
            )
            .build();

        let course_id_index = IndexModel::builder()
            .keys(doc! { "course_id": 1, "enrolled_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("course_enrolled_at".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(learner_course_index).await?;
        self.collection.create_index(course_id_index).await?;

        log::info!("Successfully created indexes for enrollments collection");
        Ok(())
    }
}

#[async_trait]
impl EnrollmentRepository for MongoEnrollmentRepository {
    async fn create(&self, enrollment: Enrollment) -> AppResult<Enrollment> {
        let existing = self
            .find_by_learner_and_course(&enrollment.learner_id, &enrollment.course_id)
            .await?;
        if existing.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "Learner '{}' is already enrolled in course '{}'",
                enrollment.learner_id, enrollment.course_id
            )));
        }

        self.collection.insert_one(&enrollment).await?;
        Ok(enrollment)
    }

    async fn find_by_learner_and_course(
        &self,
        learner_id: &str,
        course_id: &str,
    ) -> AppResult<Option<Enrollment>> {
        let enrollment = self
            .collection
            .find_one(doc! {
                "learner_id": learner_id,
                "course_id": course_id
            })
            .await?;
        Ok(enrollment)
    }

    async fn add_completed_lesson(
        &self,
        learner_id: &str,
        course_id: &str,
        lesson_id: &str,
    ) -> AppResult<Option<Enrollment>> {
        let updated = self
            .collection
            .find_one_and_update(
                doc! {
                    "learner_id": learner_id,
                    "course_id": course_id
                },
                doc! { "$addToSet": { "completed_lessons": lesson_id } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    async fn list_by_course(&self, course_id: &str) -> AppResult<Vec<Enrollment>> {
        let enrollments = self
            .collection
            .find(doc! { "course_id": course_id })
            .sort(doc! { "enrolled_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(enrollments)
    }
}
