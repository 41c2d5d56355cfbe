// Read-only projections and aggregations over a student roster. None of
// these operations mutate or print; rendering belongs to the display module.

use crate::model::Student;
use std::collections::{HashMap, HashSet};

/// Default used when a student has no usable bike model.
const NO_BIKE: &str = "No Bike";

/// Gpa above which a student counts as high-achieving (strict).
const HIGH_GPA: f64 = 3.5;

/// Notebook count above which a student is reported (strict).
const NOTEBOOK_THRESHOLD: u32 = 2;

/// One `"<name> - <gpa>"` entry per student, in input order. The gpa keeps
/// its natural decimal form.
pub fn names_with_gpa(students: &[Student]) -> Vec<String> {
    students
        .iter()
        .map(|student| format!("{} - {}", student.name, student.gpa))
        .collect()
}

/// Every activity practiced by at least one student, deduplicated.
pub fn unique_activities(students: &[Student]) -> HashSet<String> {
    students
        .iter()
        .flat_map(|student| student.activities.iter().cloned())
        .collect()
}

/// Number of activities per student name. Duplicate names collapse to a
/// single entry, keeping the count of the student seen last in input order.
pub fn name_to_activity_count(students: &[Student]) -> HashMap<String, usize> {
    students
        .iter()
        .map(|student| (student.name.clone(), student.activity_count()))
        .collect()
}

/// Names of students owning strictly more than two notebooks, in input
/// order.
pub fn names_with_more_than_two_notebooks(students: &[Student]) -> Vec<String> {
    students
        .iter()
        .filter(|student| student.notebooks > NOTEBOOK_THRESHOLD)
        .map(|student| student.name.clone())
        .collect()
}

/// Bike model per student name, defaulting to `"No Bike"` when the student
/// owns no bike or the model is unknown. Duplicate names collapse as in
/// [`name_to_activity_count`].
pub fn name_to_bike_model(students: &[Student]) -> HashMap<String, String> {
    students
        .iter()
        .map(|student| {
            let model = student
                .bike_model()
                .map_or_else(|| NO_BIKE.to_owned(), str::to_owned);
            (student.name.clone(), model)
        })
        .collect()
}

/// Names of students with a gpa strictly above 3.5, in input order.
pub fn names_with_high_gpa(students: &[Student]) -> Vec<String> {
    students
        .iter()
        .filter(|student| student.gpa > HIGH_GPA)
        .map(|student| student.name.clone())
        .collect()
}
