//! HTML for the popular-movies page.

use crate::catalog::{CatalogPage, MovieSummary};
use crate::navigation::{page_href, Navigation};
use maud::{html, Markup, DOCTYPE};

pub fn popular_page(page: &CatalogPage, image_base: &str) -> Markup {
    let nav = Navigation::for_page(page);
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Popular movies" }
            }
            body {
                main class="container" {
                    div class="movie-grid" {
                        @for movie in &page.results {
                            (movie_card(movie, image_base))
                        }
                    }
                    (nav_controls(&nav))
                }
            }
        }
    }
}

fn movie_card(movie: &MovieSummary, image_base: &str) -> Markup {
    html! {
        div class="movie-card" data-id=(movie.id.to_string()) {
            @if let Some(src) = movie.backdrop_url(image_base) {
                img src=(src) alt=(movie.title) width="300" height="500";
            } @else {
                div class="no-image" { }
            }
            h2 { (movie.title) }
        }
    }
}

fn nav_controls(nav: &Navigation) -> Markup {
    html! {
        nav class="pager" {
            @match nav.prev {
                Some(p) => {
                    a class="pager-button" rel="prev" href=(page_href(p)) { "Prev" }
                }
                None => {
                    span class="pager-button disabled" { "Prev" }
                }
            }
            @match nav.next {
                Some(p) => {
                    a class="pager-button" rel="next" href=(page_href(p)) { "Next" }
                }
                None => {
                    span class="pager-button disabled" { "Next" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MovieId, PageNumber};

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

    fn movie(id: i64, title: &str, backdrop: Option<&str>) -> MovieSummary {
        MovieSummary {
            id: MovieId::Number(id),
            title: title.to_string(),
            original_title: title.to_string(),
            release_date: "2024-01-01".to_string(),
            adult: false,
            backdrop_path: backdrop.map(str::to_string),
            genre_ids: vec![18],
        }
    }

    fn catalog(page: Option<i64>, results: Vec<MovieSummary>) -> CatalogPage {
        CatalogPage {
            page: page.map(PageNumber),
            results,
            total_pages: 5,
            total_results: 100,
        }
    }

    #[test]
    fn renders_one_card_per_movie_with_image_and_title() {
        let results = vec![
            movie(1, "Alpha", Some("/a.jpg")),
            movie(2, "Beta", Some("/b.jpg")),
            movie(3, "Gamma", Some("/c.jpg")),
        ];
        let html = popular_page(&catalog(Some(2), results), IMAGE_BASE).into_string();

        assert_eq!(html.matches("class=\"movie-card\"").count(), 3);
        for (title, path) in [("Alpha", "a.jpg"), ("Beta", "b.jpg"), ("Gamma", "c.jpg")] {
            assert!(html.contains(&format!("<h2>{title}</h2>")));
            assert!(html.contains(&format!("src=\"{IMAGE_BASE}/{path}\"")));
        }
    }

    #[test]
    fn empty_results_render_empty_grid() {
        let html = popular_page(&catalog(Some(1), Vec::new()), IMAGE_BASE).into_string();
        assert!(html.contains("class=\"movie-grid\""));
        assert_eq!(html.matches("class=\"movie-card\"").count(), 0);
    }

    #[test]
    fn missing_backdrop_renders_placeholder() {
        let html = popular_page(&catalog(Some(1), vec![movie(9, "Nope", None)]), IMAGE_BASE)
            .into_string();
        assert!(html.contains("class=\"no-image\""));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn escapes_titles() {
        let html = popular_page(
            &catalog(Some(1), vec![movie(1, "<script>x</script>", Some("/a.jpg"))]),
            IMAGE_BASE,
        )
        .into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn first_page_disables_prev_link() {
        let html = popular_page(&catalog(Some(1), Vec::new()), IMAGE_BASE).into_string();
        assert!(html.contains("<span class=\"pager-button disabled\">Prev</span>"));
        assert!(html.contains("href=\"/popular?page=2\""));
        assert!(!html.contains("href=\"/popular?page=0\""));
    }

    #[test]
    fn middle_page_links_both_ways() {
        let html = popular_page(&catalog(Some(3), Vec::new()), IMAGE_BASE).into_string();
        assert!(html.contains("href=\"/popular?page=2\""));
        assert!(html.contains("href=\"/popular?page=4\""));
        assert!(!html.contains("disabled"));
    }
}
