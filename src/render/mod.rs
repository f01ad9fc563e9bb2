use crate::algolia::prelude::DigestItem;

/// Static banner title of every digest.
const DIGEST_TITLE: &str = "Hacker News: AI Weekly";

const EMPTY_MESSAGE: &str = "No fresh AI stories made the cut this week.";

/// Render the digest as a self-contained HTML document. Inline styles only;
/// constrained email clients strip external stylesheets and scripts.
#[must_use]
pub fn digest_to_html(digest: &[DigestItem]) -> String {
    let mut body = format!(
        "<html>\
        <body style=\"font-family: 'Verdana', sans-serif; max-width: 650px; margin: auto; color: #333;\">\
        <div style=\"background-color: #ff6600; padding: 15px; text-align: center;\">\
        <h2 style=\"color: white; margin: 0;\">{DIGEST_TITLE}</h2>\
        <p style=\"color: white; font-size: 12px; margin: 0;\">{date}</p>\
        </div>\
        <div style=\"padding: 20px;\">",
        date = formatted_date(),
    );

    if digest.is_empty() {
        body.push_str(&format!(
            "<p style=\"text-align: center; color: #828282;\">{EMPTY_MESSAGE}</p>",
        ));
    }

    for item in digest {
        body.push_str(&format!(
            "<div style=\"margin-bottom: 20px; border-bottom: 1px solid #eee; padding-bottom: 15px;\">\
            <div style=\"font-size: 16px; font-weight: bold;\">\
            <a href=\"{link}\" style=\"text-decoration: none; color: #000;\">{title}</a>\
            </div>\
            <div style=\"font-size: 12px; color: #828282; margin-top: 5px;\">\
            {points} points by {author} | \
            <a href=\"{discussion}\" style=\"color: #ff6600; text-decoration: none; font-weight: bold;\">\
            {comments} comments</a>\
            </div>\
            </div>",
            link = escape_html(&item.primary_link()),
            title = escape_html(&item.title),
            points = item.points,
            author = escape_html(&item.author),
            discussion = escape_html(&item.discussion_link()),
            comments = item.num_comments,
        ));
    }

    body.push_str(
        "<p style=\"text-align: center; color: #999; font-size: 12px; margin-top: 30px;\">\
        Generated by hn-ai-digest</p>\
        </div></body></html>",
    );
    body
}

/// Convert a digest to a plain text string
#[must_use]
pub fn digest_to_text(digest: &[DigestItem]) -> String {
    let mut body = format!("{DIGEST_TITLE} - {}\n\n", formatted_date());

    if digest.is_empty() {
        body.push_str(EMPTY_MESSAGE);
        body.push('\n');
    }

    for item in digest {
        body.push_str(&format!(
            "* {title} ({points} points by {author}, {comments} comments)\n  {link}\n",
            title = item.title,
            points = item.points,
            author = item.author,
            comments = item.num_comments,
            link = item.primary_link(),
        ));
    }
    body
}

/// Escape text for interpolation into HTML; titles and author names come
/// from an untrusted upstream.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn formatted_date() -> String {
    chrono::Local::now().format("%B %d, %Y").to_string()
}
