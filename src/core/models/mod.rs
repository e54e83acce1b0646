mod errors;
mod movie;
mod movie_api_settings;
mod thumbnail;

pub use errors::{SearchError, TransportError};
pub use movie::{Movie, MoviesResponseBody};
pub use movie_api_settings::MovieApiSettings;
pub use thumbnail::{Thumbnail, ThumbnailImage};

#[cfg(test)]
pub(crate) use thumbnail::test_images;
