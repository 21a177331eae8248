//! Reads behind the public pages: course list, syllabus, test series.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::course::{self, Course, CourseHeading, SyllabusRow};
use crate::store::{StoreError, TableStore, fetch_rows, fetch_single};
use crate::test_series::{self, TestSeries};

/// Shown when a course has no syllabus text or does not exist.
pub const SYLLABUS_PLACEHOLDER: &str = "Syllabus details will be added soon. Please check back later.";

/// Every course, oldest first.
///
/// # Errors
///
/// Propagates store and decode errors.
pub async fn load_courses<S: TableStore + ?Sized>(store: &S) -> Result<Vec<Course>, StoreError> {
    fetch_rows(store, &course::all_courses_query()).await
}

/// Syllabus page content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Syllabus {
    /// `None` when the course does not exist.
    pub title: Option<String>,
    pub body: String,
}

impl Syllabus {
    fn placeholder() -> Self {
        Self { title: None, body: SYLLABUS_PLACEHOLDER.to_owned() }
    }
}

/// Load the syllabus for `course_id`. A missing course is not an error.
///
/// # Errors
///
/// Store errors other than not-found.
pub async fn load_syllabus<S: TableStore + ?Sized>(store: &S, course_id: &str) -> Result<Syllabus, StoreError> {
    match fetch_single::<SyllabusRow, _>(store, &course::syllabus_query(course_id)).await {
        Ok(row) => Ok(Syllabus {
            title: Some(row.title),
            body: row
                .description
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| SYLLABUS_PLACEHOLDER.to_owned()),
        }),
        Err(StoreError::NotFound) => Ok(Syllabus::placeholder()),
        Err(err) => Err(err),
    }
}

/// Test-series page content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestSeriesListing {
    /// `None` when the course does not exist.
    pub course: Option<CourseHeading>,
    /// Active series of the course only.
    pub series: Vec<TestSeries>,
}

/// Load the course heading and its active series concurrently.
///
/// # Errors
///
/// The first store error among the two reads, excluding a not-found course.
pub async fn load_test_series<S: TableStore + ?Sized>(
    store: &S,
    course_id: &str,
) -> Result<TestSeriesListing, StoreError> {
    let heading_query = course::heading_query(course_id);
    let series_query = test_series::public_listing_query(course_id);
    let (heading, series) = futures::join!(
        fetch_single::<CourseHeading, _>(store, &heading_query),
        fetch_rows::<TestSeries, _>(store, &series_query),
    );
    let course = match heading {
        Ok(heading) => Some(heading),
        Err(StoreError::NotFound) => None,
        Err(err) => return Err(err),
    };
    Ok(TestSeriesListing { course, series: series? })
}
