pub use self::movie::{Genre, Movie};
pub use self::student::{Bike, Student};

mod movie;
mod student;
