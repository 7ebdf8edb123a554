//! Fetch one page of popular movies from TMDB and print what the grid would show.
//! Usage:
//!   cargo run --bin tmdb_popular -- [page]
//! Requires TMDB_API_KEY in the environment (.env supported).

use anyhow::{Context, Result};
use dotenvy::dotenv;
use moviegrid::catalog::PageNumber;
use moviegrid::config::Config;
use moviegrid::navigation::Navigation;
use moviegrid::tmdb::{CatalogApi, TmdbClient};
use serde_json::json;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let page = match env::args().nth(1) {
        Some(raw) => raw
            .parse::<PageNumber>()
            .context("page must be an integer")?,
        None => PageNumber::default(),
    };

    let config = Config::from_env()?;
    let client = TmdbClient::new(&config)?;
    let data = client.fetch_popular(page).await?;
    let nav = Navigation::for_page(&data);

    let movies: Vec<_> = data
        .results
        .iter()
        .map(|m| {
            json!({
                "id": m.id.to_string(),
                "title": m.title,
                "original_title": m.original_title,
                "release_date": m.release_date,
                "adult": m.adult,
                "genre_ids": m.genre_ids,
                "image": m.backdrop_url(&config.image_base),
            })
        })
        .collect();

    let out = json!({
        "page": data.page.map(PageNumber::get),
        "total_pages": data.total_pages,
        "total_results": data.total_results,
        "prev": nav.prev.map(PageNumber::get),
        "next": nav.next.map(PageNumber::get),
        "results": movies,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
