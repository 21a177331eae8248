//! Test series records, input coercion and list filtering.

#[cfg(test)]
#[path = "test_series_test.rs"]
mod test_series_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::query::{Select, Table};

pub const DEFAULT_DURATION_MINUTES: i32 = 60;
pub const DEFAULT_TOTAL_QUESTIONS: i32 = 0;

/// A test series row.
///
/// Nullable numeric columns decode to their defaults; a null active flag
/// decodes as inactive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSeries {
    pub id: String,
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_duration", deserialize_with = "duration_or_default")]
    pub duration_minutes: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_questions: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

impl TestSeries {
    #[must_use]
    pub fn duration_label(&self) -> String {
        format!("{} min", self.duration_minutes)
    }

    #[must_use]
    pub fn questions_label(&self) -> String {
        format!("{} questions", self.total_questions)
    }

    /// Compact `"90min · 50Q"` form used in the admin list.
    #[must_use]
    pub fn admin_summary(&self) -> String {
        format!("{}min · {}Q", self.duration_minutes, self.total_questions)
    }
}

/// Insert payload for a new test series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTestSeries {
    pub course_id: String,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub total_questions: i32,
    pub is_active: bool,
}

fn default_duration() -> i32 {
    DEFAULT_DURATION_MINUTES
}

fn duration_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(DEFAULT_DURATION_MINUTES))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Leading integer of a form field: optional sign then digits, anything
/// after them ignored ("90.5" reads as 90, "45abc" as 45).
fn leading_int(raw: &str) -> Option<i32> {
    let text = raw.trim_start();
    let digits_from = usize::from(text.starts_with(['-', '+']));
    let digits_to = text[digits_from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |end| digits_from + end);
    text[..digits_to].parse().ok()
}

/// Parse a duration field. Empty, unparsable or non-positive input yields 60.
#[must_use]
pub fn coerce_duration(raw: &str) -> i32 {
    leading_int(raw)
        .filter(|minutes| *minutes > 0)
        .unwrap_or(DEFAULT_DURATION_MINUTES)
}

/// Parse a question-count field. Empty, unparsable or negative input yields 0.
#[must_use]
pub fn coerce_question_count(raw: &str) -> i32 {
    leading_int(raw)
        .filter(|count| *count >= 0)
        .unwrap_or(DEFAULT_TOTAL_QUESTIONS)
}

/// Active series of one course, oldest first. The only read the public
/// listing issues for series.
#[must_use]
pub fn public_listing_query(course_id: &str) -> Select {
    Select::from_table(Table::TestSeries)
        .eq("course_id", course_id)
        .eq("is_active", true)
        .order_by_creation()
}

/// Every series regardless of course or active flag.
#[must_use]
pub fn all_series_query() -> Select {
    Select::from_table(Table::TestSeries).order_by_creation()
}

/// Narrow `series` to `course_id`, or keep everything when none is selected.
#[must_use]
pub fn filter_by_course<'a>(series: &'a [TestSeries], course_id: Option<&str>) -> Vec<&'a TestSeries> {
    match course_id {
        Some(id) => series.iter().filter(|s| s.course_id == id).collect(),
        None => series.iter().collect(),
    }
}
