use crate::analytics;
use crate::config::Analytics;
use crate::model::{Movie, Student};
use crate::queries;
use std::collections::HashMap;
use std::fmt::Display;

fn print_list(title: &str, items: &[String]) {
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
    println!();
}

fn print_map<V: Display>(title: &str, map: HashMap<String, V>) {
    let mut entries = map.into_iter().collect::<Vec<_>>();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    println!("{title}:");
    for (name, value) in entries {
        println!("  - {name}: {value}");
    }
    println!();
}

fn print_windows(title: &str, windows: &[&[Movie]]) {
    println!("{title}:");
    for window in windows {
        let titles = window
            .iter()
            .map(|movie| movie.title.as_str())
            .collect::<Vec<_>>();
        println!("  - {}", titles.join(" / "));
    }
    println!();
}

pub fn student_report(students: &[Student]) {
    print_list("Names with gpa", &queries::names_with_gpa(students));
    let mut activities = queries::unique_activities(students)
        .into_iter()
        .collect::<Vec<_>>();
    activities.sort();
    print_list("Unique activities", &activities);
    print_map(
        "Activities per student",
        queries::name_to_activity_count(students),
    );
    print_list(
        "Students with more than two notebooks",
        &queries::names_with_more_than_two_notebooks(students),
    );
    print_map("Bike models", queries::name_to_bike_model(students));
    print_list(
        "Students with a high gpa",
        &queries::names_with_high_gpa(students),
    );
}

pub fn movie_report(movies: &[Movie], analytics_config: &Analytics) {
    println!(
        "Catalog: {} movies, {} minutes in total, {} classics",
        movies.len(),
        analytics::total_duration(movies),
        movies.iter().filter(|movie| movie.is_classic()).count()
    );
    if let Some(rating) = analytics::average_rating(movies) {
        println!("Average rating: {rating:.2}");
    }
    println!();

    let decades = analytics::by_decade(movies);
    if !decades.is_empty() {
        println!("Movies by decade:");
        for (decade, movies) in decades {
            println!("  {decade}s:");
            for movie in movies {
                println!("    - {} ({})", movie.title, movie.release_year);
            }
        }
        println!();
    }

    let highlights = analytics::high_rated_summaries(movies, analytics_config.high_rating);
    if !highlights.is_empty() {
        print_list(
            &format!(
                "Highlights (rating {:.1} or better)",
                analytics_config.high_rating
            ),
            &highlights,
        );
    }

    print_windows(
        &format!("Fixed windows of {}", analytics_config.fixed_window),
        &analytics::fixed_windows(movies, analytics_config.fixed_window),
    );
    print_windows(
        &format!("Sliding windows of {}", analytics_config.sliding_window),
        &analytics::sliding_windows(movies, analytics_config.sliding_window),
    );

    println!(
        "Average duration per window of {} high-rated movies:",
        analytics_config.fixed_window
    );
    for (n, average) in analytics::high_rated_window_averages(movies, analytics_config.fixed_window)
        .iter()
        .enumerate()
    {
        println!("  - window {}: {average:.1} minutes", n + 1);
    }
    println!();

    println!("Running totals:");
    let durations = analytics::running_durations(movies);
    let ratings = analytics::running_average_ratings(movies);
    for ((movie, duration), rating) in movies.iter().zip(durations).zip(ratings) {
        println!(
            "  - after {}: {duration} minutes watched, average rating {rating:.2}",
            movie.title
        );
    }
}
