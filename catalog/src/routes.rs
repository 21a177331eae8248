//! Client route paths.

pub const HOME: &str = "/";
pub const AUTH: &str = "/auth";
pub const ADMIN: &str = "/admin";

/// Route parameter carrying the course id.
pub const COURSE_ID_PARAM: &str = "courseId";

#[must_use]
pub fn course_test_series(course_id: &str) -> String {
    format!("/course/{course_id}/test-series")
}

#[must_use]
pub fn course_syllabus(course_id: &str) -> String {
    format!("/course/{course_id}/syllabus")
}
