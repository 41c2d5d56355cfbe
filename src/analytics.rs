// Catalog-level aggregations over a movie collection. Window sizes must be
// non-zero; this is enforced at the configuration boundary.

use crate::model::Movie;
use std::collections::BTreeMap;

/// Non-overlapping windows of `size` movies; the last window may be
/// shorter.
pub fn fixed_windows(movies: &[Movie], size: usize) -> Vec<&[Movie]> {
    movies.chunks(size).collect()
}

/// Overlapping windows of `size` movies. A non-empty catalog shorter than
/// `size` yields a single window holding the whole catalog.
pub fn sliding_windows(movies: &[Movie], size: usize) -> Vec<&[Movie]> {
    if movies.is_empty() {
        Vec::new()
    } else if movies.len() < size {
        vec![movies]
    } else {
        movies.windows(size).collect()
    }
}

pub fn total_duration(movies: &[Movie]) -> u32 {
    movies.iter().map(|movie| movie.duration).sum()
}

/// Mean rating of the catalog, or `None` when it is empty.
pub fn average_rating(movies: &[Movie]) -> Option<f64> {
    if movies.is_empty() {
        None
    } else {
        let total = movies.iter().map(|movie| movie.rating).sum::<f64>();
        Some(total / movies.len() as f64)
    }
}

/// Cumulative watch time after each movie.
pub fn running_durations(movies: &[Movie]) -> Vec<u32> {
    movies
        .iter()
        .scan(0, |total, movie| {
            *total += movie.duration;
            Some(*total)
        })
        .collect()
}

/// Mean rating of the catalog prefix ending at each movie.
pub fn running_average_ratings(movies: &[Movie]) -> Vec<f64> {
    movies
        .iter()
        .enumerate()
        .scan(0.0, |total, (seen, movie)| {
            *total += movie.rating;
            Some(*total / (seen + 1) as f64)
        })
        .collect()
}

/// Group the catalog by release decade, keeping input order within each
/// decade.
pub fn by_decade(movies: &[Movie]) -> BTreeMap<u16, Vec<&Movie>> {
    let mut decades: BTreeMap<u16, Vec<&Movie>> = BTreeMap::new();
    for movie in movies {
        decades.entry(movie.release_decade()).or_default().push(movie);
    }
    decades
}

/// One-line summaries of the movies rated at least `min_rating`, in input
/// order.
pub fn high_rated_summaries(movies: &[Movie], min_rating: f64) -> Vec<String> {
    movies
        .iter()
        .filter(|movie| movie.rating >= min_rating)
        .map(|movie| {
            format!(
                "{} ({}) - {:.1} [{}]",
                movie.title, movie.release_year, movie.rating, movie.genre
            )
        })
        .collect()
}

/// Keep the high-rated movies, group them into fixed windows of `size` and
/// average the duration of each window.
pub fn high_rated_window_averages(movies: &[Movie], size: usize) -> Vec<f64> {
    let high_rated = movies
        .iter()
        .filter(|movie| movie.is_high_rated())
        .collect::<Vec<_>>();
    high_rated
        .chunks(size)
        .map(|window| {
            let total = window.iter().map(|movie| movie.duration).sum::<u32>();
            f64::from(total) / window.len() as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Genre;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new("A", Genre::Drama, 1941, 8.0, 100).unwrap(),
            Movie::new("B", Genre::Romance, 1942, 6.0, 110).unwrap(),
            Movie::new("C", Genre::Drama, 1972, 9.0, 120).unwrap(),
            Movie::new("D", Genre::Action, 1994, 7.5, 130).unwrap(),
            Movie::new("E", Genre::ScienceFiction, 1994, 9.5, 140).unwrap(),
        ]
    }

    fn titles(windows: &[&[Movie]]) -> Vec<Vec<String>> {
        windows
            .iter()
            .map(|window| window.iter().map(|movie| movie.title.clone()).collect())
            .collect()
    }

    #[test]
    fn test_fixed_windows() {
        let catalog = catalog();
        let windows = fixed_windows(&catalog, 2);
        assert_eq!(
            titles(&windows),
            [vec!["A", "B"], vec!["C", "D"], vec!["E"]]
        );
        assert!(fixed_windows(&[], 2).is_empty());
    }

    #[test]
    fn test_sliding_windows() {
        let catalog = catalog();
        let windows = sliding_windows(&catalog, 2);
        assert_eq!(
            titles(&windows),
            [
                vec!["A", "B"],
                vec!["B", "C"],
                vec!["C", "D"],
                vec!["D", "E"]
            ]
        );
    }

    #[test]
    fn test_sliding_windows_shorter_than_size() {
        let catalog = catalog();
        let windows = sliding_windows(&catalog[..1], 3);
        assert_eq!(titles(&windows), [vec!["A"]]);
        assert!(sliding_windows(&[], 3).is_empty());
    }

    #[test]
    fn test_fold_aggregates() {
        let catalog = catalog();
        assert_eq!(total_duration(&catalog), 600);
        assert_eq!(average_rating(&catalog), Some(8.0));
        assert_eq!(total_duration(&[]), 0);
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn test_running_durations() {
        let catalog = catalog();
        let running = running_durations(&catalog);
        assert_eq!(running, [100, 210, 330, 460, 600]);
        assert_eq!(*running.last().unwrap(), total_duration(&catalog));
        assert!(running_durations(&[]).is_empty());
    }

    #[test]
    fn test_running_average_ratings() {
        let catalog = catalog();
        let running = running_average_ratings(&catalog);
        assert_eq!(running.len(), catalog.len());
        assert_eq!(running[0], 8.0);
        assert_eq!(running[1], 7.0);
        assert_eq!(*running.last().unwrap(), average_rating(&catalog).unwrap());
    }

    #[test]
    fn test_by_decade() {
        let catalog = catalog();
        let decades = by_decade(&catalog);
        assert_eq!(decades.keys().copied().collect::<Vec<_>>(), [1940, 1970, 1990]);
        let forties = decades[&1940]
            .iter()
            .map(|movie| movie.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(forties, ["A", "B"]);
        assert_eq!(decades.values().map(Vec::len).sum::<usize>(), catalog.len());
    }

    #[test]
    fn test_high_rated_summaries() {
        let catalog = catalog();
        assert_eq!(
            high_rated_summaries(&catalog, 8.5),
            ["C (1972) - 9.0 [Drama]", "E (1994) - 9.5 [Science Fiction]"]
        );
        assert!(high_rated_summaries(&catalog, 9.9).is_empty());
    }

    #[test]
    fn test_high_rated_window_averages() {
        // High-rated movies are A (100), C (120) and E (140).
        let catalog = catalog();
        assert_eq!(high_rated_window_averages(&catalog, 2), [110.0, 140.0]);
        assert!(high_rated_window_averages(&[], 2).is_empty());
    }
}
