//! Course card for the home page grid.

use catalog::Course;
use leptos::prelude::*;

use crate::components::icon::CourseIconSvg;

/// Card with the course icon, title, optional description and its links.
#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let test_series_href = course.test_series_path();
    let syllabus_href = course.syllabus_path();
    view! {
        <article class="course-card">
            <div class="course-card__icon">
                <CourseIconSvg icon=course.icon class="course-card__glyph"/>
            </div>
            <h3 class="course-card__title">{course.title}</h3>
            {course.description.map(|text| view! { <p class="course-card__description">{text}</p> })}
            <div class="course-card__actions">
                <a class="btn btn--primary" href=test_series_href.clone()>"View"</a>
                <a class="btn btn--outline" href=syllabus_href>"Syllabus"</a>
                <a class="btn btn--secondary" href=test_series_href>"View Test Series"</a>
            </div>
        </article>
    }
}
