pub const APPLICATION_NAME: &str = "Movie Browser";
pub const CONFIG_DIRECTORY_NAME: &str = "movie-browser";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const API_KEY_ENV_VAR: &str = "TMDB_API_KEY";

pub const DEFAULT_SEARCH_SCHEME: &str = "https";
pub const DEFAULT_SEARCH_HOST: &str = "api.themoviedb.org";
pub const DEFAULT_SEARCH_PATH: &str = "/3/search/movie";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

pub const QUERY_PARAM_API_KEY: &str = "api_key";
pub const QUERY_PARAM_QUERY: &str = "query";

pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";

pub const USER_MESSAGE_GENERIC_FAILURE: &str = "Something went wrong, please try again.";
pub const USER_MESSAGE_NO_RESULTS: &str = "No movies matched your search.";
pub const USER_MESSAGE_USAGE: &str = "usage: movie-browser <query>";
