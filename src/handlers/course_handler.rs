use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    learner::LearnerId,
    models::dto::{
        request::{CreateCourseRequest, UpdateModuleRequest},
        response::CourseTreeDto,
    },
    services::{access, CourseService},
};

#[post("/api/courses")]
pub async fn create_course(
    state: web::Data<AppState>,
    request: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .create_course(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(CourseTreeDto::from(course)))
}

#[get("/api/courses/{course_id}")]
pub async fn get_course_tree(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(&course_id).await?;
    Ok(HttpResponse::Ok().json(CourseTreeDto::from(course)))
}

#[put("/api/courses/{course_id}/modules/{module_id}")]
pub async fn put_module_content(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateModuleRequest>,
) -> Result<HttpResponse, AppError> {
    let (course_id, module_id) = path.into_inner();
    let course = state
        .course_service
        .put_module_content(&course_id, &module_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(CourseTreeDto::from(course)))
}

/// Lesson read through the access gate: enrolled learners open everything,
/// everyone opens free lessons. The gate is re-evaluated on every request, so
/// enrolling mid-session unlocks lessons without a tree reload.
#[get("/api/courses/{course_id}/lessons/{lesson_id}")]
pub async fn open_lesson(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    learner: LearnerId,
) -> Result<HttpResponse, AppError> {
    let (course_id, lesson_id) = path.into_inner();

    let course = state.course_service.get_course(&course_id).await?;
    let view = CourseService::lesson_view(&course, &lesson_id).ok_or_else(|| {
        AppError::NotFound(format!("Lesson with id '{}' not found", lesson_id))
    })?;

    let enrollment = state
        .enrollment_service
        .find(learner.as_str(), &course_id)
        .await?;

    if !access::can_open(enrollment.as_ref(), &view.lesson) {
        return Err(AppError::Unauthorized(
            "Enroll in the course to open this lesson".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(view))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;

    fn assert_error_status(status: actix_web::http::StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    #[actix_web::test]
    async fn open_lesson_rejects_requests_without_app_context_or_identity() {
        let app = test::init_service(App::new().service(open_lesson)).await;

        let req = test::TestRequest::get()
            .uri("/api/courses/course-1/lessons/l-1")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_error_status(resp.status());
    }
}
