//! Admin management flows for courses and test series.
//!
//! DESIGN
//! ======
//! Each form validates locally first; a validation failure never reaches the
//! store. Successful mutations are followed by a full re-read of both tables
//! (`fetch_snapshot`) rather than a local patch, so the displayed lists are
//! whatever the backend holds after the write. Failed mutations return the
//! error and leave the caller's form untouched. A write that succeeded stays
//! a success even if the re-read after it fails; that error travels in
//! `Refreshed::snapshot`.
//!
//! Deleting a course does not touch its test series rows.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::course::{self, Course, CourseIcon, NewCourse};
use crate::query::Table;
use crate::store::{StoreError, TableStore, fetch_rows, insert_record};
use crate::test_series::{self, NewTestSeries, TestSeries, coerce_duration, coerce_question_count};

/// Local form validation failure. Display text is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter course title")]
    MissingCourseTitle,
    #[error("Select a course")]
    MissingCourse,
    #[error("Enter test series title")]
    MissingSeriesTitle,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Submission phase of an admin form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Successful admin mutation, for the confirmation toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    AddCourse,
    DeleteCourse,
    AddTestSeries,
    DeleteTestSeries,
}

impl Mutation {
    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::AddCourse => "Course added!",
            Self::DeleteCourse => "Course deleted!",
            Self::AddTestSeries => "Test series added!",
            Self::DeleteTestSeries => "Test series deleted!",
        }
    }
}

/// Both tables as last read by the admin page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSnapshot {
    pub courses: Vec<Course>,
    /// All series, active or not, across all courses.
    pub test_series: Vec<TestSeries>,
}

impl AdminSnapshot {
    /// Series shown in the admin list for the current course selection.
    #[must_use]
    pub fn series_for(&self, selected_course: Option<&str>) -> Vec<&TestSeries> {
        test_series::filter_by_course(&self.test_series, selected_course)
    }

    /// The selection if it still names a listed course, e.g. after a delete.
    #[must_use]
    pub fn retained_selection(&self, selected_course: Option<&str>) -> Option<String> {
        selected_course
            .filter(|id| self.courses.iter().any(|c| c.id == *id))
            .map(str::to_owned)
    }
}

/// Read both tables concurrently.
///
/// # Errors
///
/// The first store or decode error among the two reads.
pub async fn fetch_snapshot<S: TableStore + ?Sized>(store: &S) -> Result<AdminSnapshot, StoreError> {
    let courses_query = course::all_courses_query();
    let series_query = test_series::all_series_query();
    let (courses, test_series) = futures::join!(
        fetch_rows::<Course, _>(store, &courses_query),
        fetch_rows::<TestSeries, _>(store, &series_query),
    );
    Ok(AdminSnapshot { courses: courses?, test_series: test_series? })
}

/// Course creation form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseForm {
    pub title: String,
    pub description: String,
    pub icon: CourseIcon,
}

impl CourseForm {
    /// # Errors
    ///
    /// [`ValidationError::MissingCourseTitle`] for a blank title.
    pub fn validate(&self) -> Result<NewCourse, ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingCourseTitle);
        }
        Ok(NewCourse {
            title: self.title.clone(),
            description: optional_text(&self.description),
            icon: self.icon,
        })
    }

    /// Reset text fields after a successful insert. The icon choice is kept.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }
}

/// Test series creation form fields. Numeric fields hold raw input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSeriesForm {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub questions: String,
    pub is_active: bool,
}

impl Default for TestSeriesForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            duration: test_series::DEFAULT_DURATION_MINUTES.to_string(),
            questions: test_series::DEFAULT_TOTAL_QUESTIONS.to_string(),
            is_active: true,
        }
    }
}

impl TestSeriesForm {
    /// Course selection is checked before the title.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingCourse`] or [`ValidationError::MissingSeriesTitle`].
    pub fn validate(&self, selected_course: Option<&str>) -> Result<NewTestSeries, ValidationError> {
        let course_id = selected_course
            .filter(|id| !id.is_empty())
            .ok_or(ValidationError::MissingCourse)?;
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingSeriesTitle);
        }
        Ok(NewTestSeries {
            course_id: course_id.to_owned(),
            title: self.title.clone(),
            description: optional_text(&self.description),
            duration_minutes: coerce_duration(&self.duration),
            total_questions: coerce_question_count(&self.questions),
            is_active: self.is_active,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn optional_text(raw: &str) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw.to_owned()) }
}

/// A write that reached the store, and the re-read issued after it.
///
/// The write's success stands even when the refresh fails, so callers clear
/// their form and confirm on `Ok` and report `snapshot` errors separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refreshed<T> {
    /// Whatever `before_refresh` returned, taken just before the re-read.
    pub ticket: T,
    pub snapshot: Result<AdminSnapshot, StoreError>,
}

async fn refresh<S, T>(store: &S, before_refresh: impl FnOnce() -> T) -> Refreshed<T>
where
    S: TableStore + ?Sized,
{
    let ticket = before_refresh();
    Refreshed { ticket, snapshot: fetch_snapshot(store).await }
}

/// Validate, insert and refresh.
///
/// `before_refresh` runs after the insert and right before the re-read.
///
/// # Errors
///
/// Validation errors (no store call made) or the insert's store error.
pub async fn add_course<S, T>(
    store: &S,
    form: &CourseForm,
    before_refresh: impl FnOnce() -> T,
) -> Result<Refreshed<T>, AdminError>
where
    S: TableStore + ?Sized,
{
    let record = form.validate()?;
    insert_record(store, Table::Courses, &record).await?;
    Ok(refresh(store, before_refresh).await)
}

/// Validate, insert and refresh.
///
/// # Errors
///
/// Validation errors (no store call made) or the insert's store error.
pub async fn add_test_series<S, T>(
    store: &S,
    form: &TestSeriesForm,
    selected_course: Option<&str>,
    before_refresh: impl FnOnce() -> T,
) -> Result<Refreshed<T>, AdminError>
where
    S: TableStore + ?Sized,
{
    let record = form.validate(selected_course)?;
    insert_record(store, Table::TestSeries, &record).await?;
    Ok(refresh(store, before_refresh).await)
}

/// Delete a course by id and refresh. Its test series are left in place.
///
/// # Errors
///
/// The delete's store error.
pub async fn delete_course<S, T>(
    store: &S,
    id: &str,
    before_refresh: impl FnOnce() -> T,
) -> Result<Refreshed<T>, StoreError>
where
    S: TableStore + ?Sized,
{
    store.delete(Table::Courses, id).await?;
    Ok(refresh(store, before_refresh).await)
}

/// Delete a test series by id and refresh.
///
/// # Errors
///
/// The delete's store error.
pub async fn delete_test_series<S, T>(
    store: &S,
    id: &str,
    before_refresh: impl FnOnce() -> T,
) -> Result<Refreshed<T>, StoreError>
where
    S: TableStore + ?Sized,
{
    store.delete(Table::TestSeries, id).await?;
    Ok(refresh(store, before_refresh).await)
}
