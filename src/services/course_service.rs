use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Course, Lesson, Module},
        dto::{
            request::{CreateCourseRequest, UpdateModuleRequest},
            response::LessonViewDto,
        },
    },
    repositories::CourseRepository,
    services::content_tree::ContentTree,
};

pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_course(&self, request: CreateCourseRequest) -> AppResult<Course> {
        request.validate()?;
        self.repository.create(request.into()).await
    }

    pub async fn get_course(&self, id: &str) -> AppResult<Course> {
        let course = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", id)))?;

        Ok(course)
    }

    /// Authoring write: replace one module's title and lessons, creating the
    /// module at the end of the course if it does not exist yet. Raw lesson
    /// payloads are normalized into the typed content variants here; learner
    /// flows only ever see the normalized tree.
    pub async fn put_module_content(
        &self,
        course_id: &str,
        module_id: &str,
        request: UpdateModuleRequest,
    ) -> AppResult<Course> {
        request.validate()?;

        let mut course = self.get_course(course_id).await?;
        let lessons: Vec<Lesson> = request.lessons.into_iter().map(Lesson::from).collect();

        match course.modules.iter_mut().find(|m| m.id == module_id) {
            Some(module) => {
                module.title = request.title;
                module.lessons = lessons;
            }
            None => {
                let order = course.modules.len() as u32;
                course.modules.push(Module {
                    id: module_id.to_string(),
                    title: request.title,
                    order,
                    lessons,
                });
            }
        }

        // order stays dense and 0-based, mirroring array position
        for (index, module) in course.modules.iter_mut().enumerate() {
            module.order = index as u32;
        }

        self.repository
            .update_modules(course_id, course.modules)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", course_id)))
    }

    /// A lesson plus its neighbors in the flattened tree, for previous/next
    /// navigation. None when the lesson id is not in the current tree.
    pub fn lesson_view(course: &Course, lesson_id: &str) -> Option<LessonViewDto> {
        let flat = ContentTree::flatten(course);
        let position = ContentTree::locate(&flat, lesson_id)?;
        let entry = &flat[position];

        Some(LessonViewDto {
            module_id: entry.module_id.clone(),
            module_title: entry.module_title.clone(),
            lesson: entry.lesson.clone(),
            previous_lesson_id: ContentTree::previous(&flat, position).map(|e| e.lesson.id.clone()),
            next_lesson_id: ContentTree::next(&flat, position).map(|e| e.lesson.id.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dto::request::RawLessonInput;
    use crate::repositories::MockCourseRepository;
    use crate::test_utils::fixtures::two_module_course;

    #[actix_web::test]
    async fn get_course_maps_missing_course_to_not_found() {
        let mut repository = MockCourseRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(None));

        let service = CourseService::new(Arc::new(repository));
        let result = service.get_course("ghost").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn put_module_content_appends_new_module_with_dense_order() {
        let course = two_module_course();
        let course_for_find = course.clone();
        let mut repository = MockCourseRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(course_for_find.clone())));
        repository
            .expect_update_modules()
            .withf(|_, modules| {
                modules.len() == 3
                    && modules[2].id == "m-3"
                    && modules.iter().enumerate().all(|(i, m)| m.order == i as u32)
            })
            .returning(move |course_id, modules| {
                let mut updated = course.clone();
                assert_eq!(course_id, updated.id);
                updated.modules = modules;
                Ok(Some(updated))
            });

        let service = CourseService::new(Arc::new(repository));
        let request = UpdateModuleRequest {
            title: "Advanced".to_string(),
            lessons: vec![RawLessonInput {
                title: "Closures".to_string(),
                kind: Some("article".to_string()),
                body: Some("text".to_string()),
                ..Default::default()
            }],
        };

        let updated = service
            .put_module_content("course-1", "m-3", request)
            .await
            .expect("module write should succeed");

        assert_eq!(updated.modules.len(), 3);
        assert_eq!(updated.modules[2].title, "Advanced");
    }

    #[test]
    fn lesson_view_links_previous_and_next() {
        let course = two_module_course();

        let view = CourseService::lesson_view(&course, "l-3").expect("l-3 exists");
        assert_eq!(view.previous_lesson_id.as_deref(), Some("l-2"));
        assert_eq!(view.next_lesson_id.as_deref(), Some("l-4"));

        let first = CourseService::lesson_view(&course, "l-1").expect("l-1 exists");
        assert!(first.previous_lesson_id.is_none());

        assert!(CourseService::lesson_view(&course, "ghost").is_none());
    }
}
