//! HTML rendering for the recommendation page.
//!
//! Plain string templating; every interpolated value goes through
//! [`escape_html`].

use std::fmt::Write;

use crate::recommender::Recommendation;

const STYLE: &str = r#"
body {
    margin: 0;
    background: linear-gradient(135deg, #141414 0%, #1c1c1c 100%);
    color: white;
    font-family: 'Arial', sans-serif;
    min-height: 100vh;
}
.layout { display: flex; }
aside {
    width: 220px;
    padding: 20px;
    background-color: rgba(255, 255, 255, 0.03);
    color: #b3b3b3;
    font-size: 14px;
}
aside h2 { color: white; }
main { flex: 1; padding: 20px 40px; }
h1 {
    color: #E50914;
    text-align: center;
    font-family: 'Trebuchet MS', sans-serif;
    font-size: 3.5em;
    margin-bottom: 0;
    text-shadow: 2px 2px 4px rgba(0,0,0,0.5);
}
.subtitle {
    text-align: center;
    color: #b3b3b3;
    font-size: 1.2em;
    margin-bottom: 30px;
}
form { display: flex; gap: 12px; justify-content: center; }
select, button {
    background-color: #E50914;
    color: white;
    border-radius: 10px;
    border: none;
    font-size: 16px;
    padding: 10px;
    transition: background-color 0.3s ease;
}
select:hover, button:hover { background-color: #f40612; }
.error {
    text-align: center;
    color: #ff6b6b;
    margin-top: 20px;
}
.cards {
    display: grid;
    grid-template-columns: repeat(5, 1fr);
    gap: 10px;
}
.movie-card {
    text-align: center;
    background-color: rgba(255, 255, 255, 0.05);
    border-radius: 15px;
    padding: 15px;
    margin: 10px;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
    box-shadow: 0 4px 8px rgba(0,0,0,0.3);
}
.movie-card:hover {
    transform: translateY(-10px);
    box-shadow: 0 8px 16px rgba(0,0,0,0.5);
}
.movie-card img { border-radius: 10px; width: 100%; height: auto; }
.no-poster {
    border-radius: 10px;
    aspect-ratio: 2 / 3;
    background-color: rgba(255, 255, 255, 0.08);
    display: flex;
    align-items: center;
    justify-content: center;
    color: #b3b3b3;
}
.movie-title { color: white; font-size: 18px; font-weight: bold; margin-top: 10px; }
.movie-rating { color: #E50914; font-size: 16px; margin: 5px 0; }
.movie-overview { color: #b3b3b3; font-size: 14px; margin-top: 10px; line-height: 1.4; }
.footer { text-align: center; color: #b3b3b3; margin-top: 50px; font-size: 14px; }
"#;

/// What to show under the title selector
pub enum PageBody<'a> {
    Empty,
    Results(&'a [Recommendation]),
    Error(&'a str),
}

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the full page
pub fn render_page(titles: &[&str], selected: Option<&str>, body: PageBody<'_>) -> String {
    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Movie Recommender</title>\n");
    let _ = write!(html, "<style>{}</style>\n", STYLE);
    html.push_str("</head>\n<body>\n<div class=\"layout\">\n");

    html.push_str(
        "<aside>\n<h2>About</h2>\n\
         <p>This app recommends movies from precomputed similarity scores.</p>\n\
         <p>Poster and details from TMDB.</p>\n</aside>\n",
    );

    html.push_str("<main>\n<h1>&#127916; Movie Recommender</h1>\n");
    html.push_str(
        "<p class=\"subtitle\">Discover your next favorite movie with similarity-based recommendations!</p>\n",
    );
    render_selector(&mut html, titles, selected);

    match body {
        PageBody::Empty => {}
        PageBody::Results(recommendations) => render_results(&mut html, recommendations),
        PageBody::Error(message) => {
            let _ = write!(html, "<p class=\"error\">{}</p>\n", escape_html(message));
        }
    }

    html.push_str("<div class=\"footer\">Data from TMDB</div>\n");
    html.push_str("</main>\n</div>\n</body>\n</html>\n");
    html
}

fn render_selector(html: &mut String, titles: &[&str], selected: Option<&str>) {
    html.push_str("<form method=\"get\" action=\"/recommend\">\n");
    html.push_str(
        "<label for=\"title\">&#127909; Type or select a movie from the list</label>\n",
    );
    html.push_str("<select id=\"title\" name=\"title\">\n");
    for title in titles {
        let escaped = escape_html(title);
        let marker = if Some(*title) == selected { " selected" } else { "" };
        let _ = write!(html, "<option value=\"{escaped}\"{marker}>{escaped}</option>\n");
    }
    html.push_str("</select>\n");
    html.push_str("<button type=\"submit\">&#128269; Show Recommendations</button>\n");
    html.push_str("</form>\n");
}

fn render_results(html: &mut String, recommendations: &[Recommendation]) {
    html.push_str("<h3>Recommended Movies</h3>\n<div class=\"cards\">\n");
    for rec in recommendations {
        let title = escape_html(&rec.title);
        html.push_str("<div class=\"movie-card\">\n");
        if rec.poster_url.is_empty() {
            html.push_str("<div class=\"no-poster\">No poster</div>\n");
        } else {
            let _ = write!(
                html,
                "<img src=\"{}\" alt=\"{}\">\n",
                escape_html(&rec.poster_url),
                title
            );
        }
        let _ = write!(
            html,
            "<div class=\"movie-title\">{}</div>\n\
             <div class=\"movie-rating\">&#11088; {}</div>\n\
             <div class=\"movie-overview\">{}</div>\n",
            title,
            escape_html(&rec.rating.to_string()),
            escape_html(&rec.overview)
        );
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");
}
