//! Inline SVG glyphs for course icons.
//!
//! Each `CourseIcon` maps to a fixed set of stroke paths (24x24 viewbox, the
//! lucide outline set), so no icon font or sprite sheet is needed.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use catalog::CourseIcon;
use leptos::prelude::*;

const BOOK_OPEN: &[&str] = &[
    "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
    "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
];

const TROPHY: &[&str] = &[
    "M6 9H4.5a2.5 2.5 0 0 1 0-5H6",
    "M18 9h1.5a2.5 2.5 0 0 0 0-5H18",
    "M4 22h16",
    "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22",
    "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22",
    "M18 2H6v7a6 6 0 0 0 12 0V2Z",
];

const USERS: &[&str] = &[
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75",
];

const GRADUATION_CAP: &[&str] = &["M22 10v6M2 10l10-5 10 5-10 5z", "M6 12v5c3 3 9 3 12 0v-5"];

/// Stroke paths for `icon`.
pub fn icon_paths(icon: CourseIcon) -> &'static [&'static str] {
    match icon {
        CourseIcon::Trophy => TROPHY,
        CourseIcon::Users => USERS,
        CourseIcon::GraduationCap => GRADUATION_CAP,
        CourseIcon::BookOpen => BOOK_OPEN,
    }
}

#[component]
pub fn CourseIconSvg(icon: CourseIcon, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-label=icon.name()
            role="img"
        >
            {icon_paths(icon).iter().map(|d| view! { <path d=*d></path> }).collect::<Vec<_>>()}
        </svg>
    }
}
