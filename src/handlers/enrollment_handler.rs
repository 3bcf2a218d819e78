use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    learner::LearnerId,
    models::dto::request::{EnrollRequest, SubmitQuizRequest},
};

#[post("/api/courses/{course_id}/enrollments")]
pub async fn enroll(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    request: web::Json<EnrollRequest>,
    learner: LearnerId,
) -> Result<HttpResponse, AppError> {
    let enrollment = state
        .enrollment_service
        .enroll(learner.as_str(), &course_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(enrollment))
}

#[get("/api/courses/{course_id}/enrollments/me")]
pub async fn my_enrollment(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    learner: LearnerId,
) -> Result<HttpResponse, AppError> {
    let enrollment = state
        .enrollment_service
        .get_enrollment(learner.as_str(), &course_id)
        .await?;
    Ok(HttpResponse::Ok().json(enrollment))
}

/// Explicit completion for article/assignment/coding lessons. Quiz lessons
/// complete through the grading endpoint instead. Idempotent and safe to
/// retry after a transient write failure.
#[post("/api/courses/{course_id}/lessons/{lesson_id}/complete")]
pub async fn mark_complete(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    learner: LearnerId,
) -> Result<HttpResponse, AppError> {
    let (course_id, lesson_id) = path.into_inner();
    let enrollment = state
        .enrollment_service
        .mark_complete(learner.as_str(), &course_id, &lesson_id)
        .await?;
    Ok(HttpResponse::Ok().json(enrollment))
}

#[post("/api/courses/{course_id}/lessons/{lesson_id}/quiz/submissions")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<SubmitQuizRequest>,
    learner: LearnerId,
) -> Result<HttpResponse, AppError> {
    let (course_id, lesson_id) = path.into_inner();
    let result = state
        .quiz_grading_service
        .submit(learner.as_str(), &course_id, &lesson_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/api/courses/{course_id}/leaderboard")]
pub async fn leaderboard(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let ranked = state.leaderboard_service.rank(&course_id).await?;
    Ok(HttpResponse::Ok().json(ranked))
}
