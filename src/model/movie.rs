use eyre::{Result, ensure};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    Horror,
    Romance,
    ScienceFiction,
    Thriller,
    Documentary,
    Animation,
    Fantasy,
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Thriller => "Thriller",
            Genre::Documentary => "Documentary",
            Genre::Animation => "Animation",
            Genre::Fantasy => "Fantasy",
        })
    }
}

#[derive(Clone, Debug)]
pub struct Movie {
    pub title: String,
    pub genre: Genre,
    pub release_year: u16,
    pub rating: f64,
    pub duration: u32,
}

impl Movie {
    pub fn new(
        title: &str,
        genre: Genre,
        release_year: u16,
        rating: f64,
        duration: u32,
    ) -> Result<Movie> {
        ensure!(!title.trim().is_empty(), "movie title cannot be blank");
        ensure!(
            (0.0..=10.0).contains(&rating),
            "rating {rating} of {title} is outside the 0-10 scale"
        );
        ensure!(duration > 0, "duration of {title} must be positive");
        Ok(Movie {
            title: title.to_owned(),
            genre,
            release_year,
            rating,
            duration,
        })
    }

    /// Release year rounded down to its decade.
    pub fn release_decade(&self) -> u16 {
        self.release_year / 10 * 10
    }

    pub fn is_classic(&self) -> bool {
        self.release_year < 1980
    }

    pub fn is_high_rated(&self) -> bool {
        self.rating >= 8.0
    }
}

#[test]
fn test_validation() {
    assert!(Movie::new("", Genre::Horror, 1979, 8.5, 117).is_err());
    assert!(Movie::new("  ", Genre::Horror, 1979, 8.5, 117).is_err());
    assert!(Movie::new("Alien", Genre::Horror, 1979, 10.5, 117).is_err());
    assert!(Movie::new("Alien", Genre::Horror, 1979, -0.5, 117).is_err());
    assert!(Movie::new("Alien", Genre::Horror, 1979, 8.5, 0).is_err());
    assert!(Movie::new("Alien", Genre::Horror, 1979, 8.5, 117).is_ok());
}

#[test]
fn test_derived_predicates() {
    let movie = Movie::new("Alien", Genre::Horror, 1979, 8.5, 117).unwrap();
    assert_eq!(movie.release_decade(), 1970);
    assert!(movie.is_classic());
    assert!(movie.is_high_rated());
    let movie = Movie::new("Gravity", Genre::ScienceFiction, 2013, 7.7, 91).unwrap();
    assert_eq!(movie.release_decade(), 2010);
    assert!(!movie.is_classic());
    assert!(!movie.is_high_rated());
}

#[test]
fn test_genre_display() {
    assert_eq!(Genre::ScienceFiction.to_string(), "Science Fiction");
    assert_eq!(Genre::Drama.to_string(), "Drama");
}
