// Hard-coded sample datasets standing in for an external data source.

use crate::model::{Bike, Genre, Movie, Student};
use eyre::Result;

fn student(
    name: &str,
    gpa: f64,
    notebooks: u32,
    activities: &[&str],
    bike: Option<Bike>,
) -> Student {
    Student {
        name: name.to_owned(),
        gpa,
        notebooks,
        activities: activities.iter().map(|&a| a.to_owned()).collect(),
        bike,
    }
}

fn bike(model: &str) -> Option<Bike> {
    Some(Bike {
        model: Some(model.to_owned()),
    })
}

pub fn students() -> Vec<Student> {
    vec![
        student(
            "Adam",
            2.1,
            4,
            &["swimming", "basketball", "volleyball"],
            None,
        ),
        student("Jenny", 3.8, 3, &["swimming", "dancing"], bike("BMX")),
        student(
            "Emily",
            4.0,
            2,
            &["swimming", "gymnastics", "aerobics"],
            bike("Canyon"),
        ),
        student(
            "Dave",
            3.9,
            1,
            &["swimming", "football"],
            Some(Bike { model: None }),
        ),
        student("Mike", 3.2, 2, &["basketball"], None),
    ]
}

pub fn movies() -> Result<Vec<Movie>> {
    Ok(vec![
        Movie::new("The Godfather", Genre::Drama, 1972, 9.2, 175)?,
        Movie::new("The Shawshank Redemption", Genre::Drama, 1994, 9.3, 142)?,
        Movie::new("Pulp Fiction", Genre::Drama, 1994, 8.9, 154)?,
        Movie::new("The Dark Knight", Genre::Action, 2008, 9.0, 152)?,
        Movie::new("Schindler's List", Genre::Drama, 1993, 9.0, 195)?,
        Movie::new("Forrest Gump", Genre::Drama, 1994, 8.8, 142)?,
        Movie::new("Inception", Genre::ScienceFiction, 2010, 8.8, 148)?,
        Movie::new("The Matrix", Genre::ScienceFiction, 1999, 8.7, 136)?,
        Movie::new("Goodfellas", Genre::Drama, 1990, 8.7, 146)?,
        Movie::new("Star Wars: A New Hope", Genre::ScienceFiction, 1977, 8.6, 121)?,
        Movie::new("Casablanca", Genre::Romance, 1942, 8.5, 102)?,
        Movie::new("Citizen Kane", Genre::Drama, 1941, 8.3, 119)?,
    ])
}
