//! Course records and the closed icon mapping.

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::query::{Select, Table};
use crate::routes;

/// Presentation icon for a course card.
///
/// Stored as its symbolic name. Anything the backend returns outside this
/// set (including null) decodes to [`CourseIcon::BookOpen`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CourseIcon {
    Trophy,
    Users,
    GraduationCap,
    #[default]
    BookOpen,
}

impl CourseIcon {
    /// Admin picker order.
    pub const ALL: [Self; 4] = [Self::BookOpen, Self::Trophy, Self::Users, Self::GraduationCap];

    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("Trophy") => Self::Trophy,
            Some("Users") => Self::Users,
            Some("GraduationCap") => Self::GraduationCap,
            _ => Self::BookOpen,
        }
    }

    /// Symbolic name as stored in the `icon` column.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Trophy => "Trophy",
            Self::Users => "Users",
            Self::GraduationCap => "GraduationCap",
            Self::BookOpen => "BookOpen",
        }
    }

    /// Human label for the admin picker.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Trophy => "Trophy",
            Self::Users => "Users",
            Self::GraduationCap => "Graduation",
            Self::BookOpen => "Book",
        }
    }
}

impl Serialize for CourseIcon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for CourseIcon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Self::from_name(raw.as_deref()))
    }
}

/// A course row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: CourseIcon,
}

impl Course {
    #[must_use]
    pub fn test_series_path(&self) -> String {
        routes::course_test_series(&self.id)
    }

    #[must_use]
    pub fn syllabus_path(&self) -> String {
        routes::course_syllabus(&self.id)
    }
}

/// `id, title` projection used as the test-series page heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseHeading {
    pub id: String,
    pub title: String,
}

/// `title, description` projection used by the syllabus page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllabusRow {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Insert payload for a new course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewCourse {
    pub title: String,
    pub description: Option<String>,
    pub icon: CourseIcon,
}

/// Every course, oldest first.
#[must_use]
pub fn all_courses_query() -> Select {
    Select::from_table(Table::Courses).order_by_creation()
}

#[must_use]
pub fn heading_query(course_id: &str) -> Select {
    Select::from_table(Table::Courses).columns(&["id", "title"]).eq("id", course_id)
}

#[must_use]
pub fn syllabus_query(course_id: &str) -> Select {
    Select::from_table(Table::Courses).columns(&["title", "description"]).eq("id", course_id)
}
