use movie_browser::global_constants;
use movie_browser::{MovieApiSettings, MovieBrowser, SearchError, Thumbnail};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if !MovieBrowser::is_searchable_query(&query) {
        eprintln!("{}", global_constants::USER_MESSAGE_USAGE);
        return Ok(());
    }

    let settings = MovieApiSettings::load()?;
    let browser = MovieBrowser::build_from_settings(settings);

    let movies = match browser.search(&query).await {
        Ok(movies) => movies,
        Err(SearchError::EmptyQuery) => {
            eprintln!("{}", global_constants::USER_MESSAGE_USAGE);
            return Ok(());
        }
        Err(error) => {
            log::error!("[MAIN] Search failed: {}", error);
            eprintln!("{}", global_constants::USER_MESSAGE_GENERIC_FAILURE);
            return Ok(());
        }
    };

    if movies.is_empty() {
        println!("{}", global_constants::USER_MESSAGE_NO_RESULTS);
        return Ok(());
    }

    let thumbnails = browser.load_posters(&movies).await;

    for (movie, thumbnail) in movies.iter().zip(thumbnails.iter()) {
        let poster = match thumbnail {
            Thumbnail::Image(image) => {
                format!("{:?} {}x{}", image.format, image.width, image.height)
            }
            Thumbnail::Placeholder => "placeholder".to_string(),
        };
        println!("{} [{}]", movie.title, poster);
        if !movie.overview.is_empty() {
            println!("    {}", movie.overview);
        }
    }

    log::info!(
        "[MAIN] Cached {} thumbnails",
        browser.thumbnail_cache().len()
    );

    Ok(())
}
