//! Card markup.
//!
//! The card is rendered as one SVG document. The desktop preview shows that
//! document as-is and the exporter rasterizes the very same text, so what the
//! user sees is what gets downloaded.
//!
//! Layout (logical pixels, 405x720):
//!
//! ```text
//!  48  comment bubble (only with a comment)
//! 104  profile avatar, overlapping the poster top
//! 128  poster frame 224x336
//! 496  title, wrapped
//!  +16 star row, 24px stars
//!  +16 "ON" caption and logo
//! ```

use std::sync::Arc;

use crate::rating::{slot_fills, FillState, SLOT_COUNT};
use crate::state::CardState;
use crate::types::CardImage;

/// Card width in logical pixels.
pub const CARD_WIDTH: f32 = 405.0;
/// Card height in logical pixels.
pub const CARD_HEIGHT: f32 = 720.0;

const CENTER_X: f32 = CARD_WIDTH / 2.0;

const POSTER_WIDTH: f32 = 224.0;
const POSTER_HEIGHT: f32 = 336.0;
const POSTER_TOP: f32 = 128.0;
const POSTER_RADIUS: f32 = 16.0;

const AVATAR_SIZE: f32 = 48.0;

const BUBBLE_TOP: f32 = 48.0;
const BUBBLE_HEIGHT: f32 = 32.0;
const BUBBLE_MAX_WIDTH: f32 = 200.0;

const TITLE_TOP: f32 = POSTER_TOP + POSTER_HEIGHT + 32.0;
const TITLE_LINE_HEIGHT: f32 = 24.0;
const TITLE_WRAP_COLUMNS: usize = 40;

const STAR_SIZE: f32 = 24.0;
const STAR_GAP: f32 = 8.0;

const LOGO_WIDTH: f32 = 128.0;
const LOGO_HEIGHT: f32 = 32.0;

// Palette
const PINK: &str = "#ec4899";
const GRAY_400: &str = "#9ca3af";
const GRAY_500: &str = "#6b7280";
const GRAY_600: &str = "#4b5563";
const GRAY_700: &str = "#374151";
const GRAY_800: &str = "#1f2937";
const GRAY_900: &str = "#111827";

const STAR_POINTS: &str =
    "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2";

const LOGO_SVG: &str = include_str!("../assets/logo.svg");

/// The bundled logo composited into every card.
pub fn logo() -> CardImage {
    CardImage::from_svg(LOGO_SVG.to_string())
}

/// A rendered card, ready to display or rasterize.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRegion {
    markup: Arc<str>,
    width: f32,
    height: f32,
}

impl CardRegion {
    /// Render the card for `state`.
    pub fn render(state: &CardState) -> Self {
        Self::from_markup(card_svg(state), CARD_WIDTH, CARD_HEIGHT)
    }

    /// Wrap already rendered SVG markup.
    pub fn from_markup(markup: impl Into<Arc<str>>, width: f32, height: f32) -> Self {
        Self {
            markup: markup.into(),
            width,
            height,
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Standalone SVG icon for one star slot, used by the editor control.
///
/// `clip_id` must be unique within the page hosting the icon.
pub fn star_icon_svg(fill: FillState, size: u32, clip_id: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24"><defs>{clip}</defs>{glyph}</svg>"#,
        size = size,
        clip = half_star_clip(clip_id),
        glyph = star_glyph(fill, clip_id),
    )
}

fn card_svg(state: &CardState) -> String {
    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
    ));
    svg.push_str(&defs());
    svg.push_str(&backdrop(state.background_image()));
    if !state.comment().is_empty() {
        svg.push_str(&comment_bubble(state.comment()));
    }
    svg.push_str(&poster(state.background_image()));
    svg.push_str(&avatar(state.profile_image()));

    let lines = title_lines(state.title());
    let title_height = lines.len() as f32 * TITLE_LINE_HEIGHT;
    svg.push_str(&title(&lines));

    let stars_top = TITLE_TOP + title_height + 16.0;
    svg.push_str(&star_row(slot_fills(state.rating()), stars_top));
    svg.push_str(&footer(stars_top + STAR_SIZE + 16.0));

    svg.push_str("</svg>");
    svg
}

fn defs() -> String {
    let poster_x = CENTER_X - POSTER_WIDTH / 2.0;
    format!(
        concat!(
            "<defs>",
            r#"<filter id="backdrop-blur" x="-5%" y="-5%" width="110%" height="110%"><feGaussianBlur stdDeviation="4"/></filter>"#,
            r#"<filter id="poster-shadow" x="-20%" y="-20%" width="140%" height="140%"><feGaussianBlur stdDeviation="10"/></filter>"#,
            r#"<linearGradient id="backdrop-fade" x1="0" y1="1" x2="0" y2="0">"#,
            r##"<stop offset="0" stop-color="#000" stop-opacity="1"/>"##,
            r##"<stop offset="0.5" stop-color="#000" stop-opacity="0"/>"##,
            r##"<stop offset="1" stop-color="#000" stop-opacity="0.3"/>"##,
            "</linearGradient>",
            r#"<clipPath id="poster-clip"><rect x="{px}" y="{py}" width="{pw}" height="{ph}" rx="{pr}"/></clipPath>"#,
            r#"<clipPath id="avatar-clip"><circle cx="{cx}" cy="{cy}" r="{ar}"/></clipPath>"#,
            "{half}",
            "</defs>"
        ),
        px = poster_x,
        py = POSTER_TOP,
        pw = POSTER_WIDTH,
        ph = POSTER_HEIGHT,
        pr = POSTER_RADIUS,
        cx = CENTER_X,
        cy = POSTER_TOP,
        ar = AVATAR_SIZE / 2.0,
        half = half_star_clip("card-half-star"),
    )
}

fn backdrop(image: Option<&CardImage>) -> String {
    let full = format!(r#"x="0" y="0" width="{}" height="{}""#, CARD_WIDTH, CARD_HEIGHT);
    match image {
        Some(image) => format!(
            concat!(
                r##"<rect {full} fill="#000"/>"##,
                r#"<image {full} href="{href}" preserveAspectRatio="xMidYMid slice" opacity="0.6" filter="url(#backdrop-blur)"/>"#,
                r##"<rect {full} fill="#000" fill-opacity="0.4"/>"##,
                r#"<rect {full} fill="url(#backdrop-fade)"/>"#,
            ),
            full = full,
            href = image.href(),
        ),
        None => format!(
            r#"<rect {full} fill="{bg}"/><g transform="translate({x} {y}) scale(2)" fill="none" stroke="{fg}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{icon}</g>"#,
            full = full,
            bg = GRAY_900,
            x = CENTER_X - 24.0,
            y = CARD_HEIGHT / 2.0 - 24.0,
            fg = GRAY_700,
            icon = r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="9" cy="9" r="2"/><path d="M21 15l-3.09-3.09a2 2 0 0 0-2.82 0L6 21"/>"#,
        ),
    }
}

fn comment_bubble(comment: &str) -> String {
    // No text metrics here; 6.5px per glyph is close enough for 12px sans
    let text_width = comment.chars().count() as f32 * 6.5;
    let width = (text_width + 24.0).min(BUBBLE_MAX_WIDTH);
    let left = CENTER_X - width / 2.0;
    let tip = BUBBLE_TOP + BUBBLE_HEIGHT;
    format!(
        concat!(
            r#"<g class="comment-bubble">"#,
            r##"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="8" fill="#fff"/>"##,
            r##"<rect x="{ax}" y="{ay}" width="8" height="8" fill="#fff" transform="rotate(45 {cx} {tip})"/>"##,
            r##"<text x="{cx}" y="{ty}" text-anchor="middle" font-size="12" font-weight="500" fill="#000">{text}</text>"##,
            "</g>"
        ),
        x = left,
        y = BUBBLE_TOP,
        w = width,
        h = BUBBLE_HEIGHT,
        ax = CENTER_X - 4.0,
        ay = tip - 4.0,
        cx = CENTER_X,
        tip = tip,
        ty = BUBBLE_TOP + 20.0,
        text = escape_xml(comment),
    )
}

fn poster(image: Option<&CardImage>) -> String {
    let x = CENTER_X - POSTER_WIDTH / 2.0;
    let frame = format!(
        r#"x="{}" y="{}" width="{}" height="{}" rx="{}""#,
        x, POSTER_TOP, POSTER_WIDTH, POSTER_HEIGHT, POSTER_RADIUS
    );
    let content = match image {
        Some(image) => format!(
            r#"<image x="{x}" y="{y}" width="{w}" height="{h}" href="{href}" preserveAspectRatio="xMidYMid slice" clip-path="url(#poster-clip)"/>"#,
            x = x,
            y = POSTER_TOP,
            w = POSTER_WIDTH,
            h = POSTER_HEIGHT,
            href = image.href(),
        ),
        None => format!(
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="16" fill="{}">Poster</text>"#,
            CENTER_X,
            POSTER_TOP + POSTER_HEIGHT / 2.0 + 6.0,
            GRAY_600,
        ),
    };
    format!(
        concat!(
            r##"<rect {frame} fill="#000" fill-opacity="0.5" filter="url(#poster-shadow)"/>"##,
            r#"<rect {frame} fill="{bg}"/>"#,
            "{content}",
            r##"<rect {frame} fill="none" stroke="#fff" stroke-opacity="0.1"/>"##,
        ),
        frame = frame,
        bg = GRAY_800,
        content = content,
    )
}

fn avatar(image: Option<&CardImage>) -> String {
    let radius = AVATAR_SIZE / 2.0;
    let content = match image {
        Some(image) => format!(
            r#"<image x="{x}" y="{y}" width="{s}" height="{s}" href="{href}" preserveAspectRatio="xMidYMid slice" clip-path="url(#avatar-clip)"/>"#,
            x = CENTER_X - radius,
            y = POSTER_TOP - radius,
            s = AVATAR_SIZE,
            href = image.href(),
        ),
        // 20px user glyph drawn from its 24px source
        None => format!(
            r#"<g transform="translate({x} {y}) scale({k})" fill="none" stroke="{c}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="7" r="4"/><path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/></g>"#,
            x = CENTER_X - 10.0,
            y = POSTER_TOP - 10.0,
            k = 20.0 / 24.0,
            c = GRAY_500,
        ),
    };
    format!(
        concat!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{bg}"/>"#,
            "{content}",
            r##"<circle cx="{cx}" cy="{cy}" r="{br}" fill="none" stroke="#fff" stroke-opacity="0.2" stroke-width="2"/>"##,
        ),
        cx = CENTER_X,
        cy = POSTER_TOP,
        r = radius,
        bg = GRAY_800,
        content = content,
        br = radius - 1.0,
    )
}

fn title_lines(title: &str) -> Vec<String> {
    if title.trim().is_empty() {
        return Vec::new();
    }
    textwrap::wrap(title, TITLE_WRAP_COLUMNS)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

fn title(lines: &[String]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            format!(
                r#"<text class="card-title" x="{}" y="{}" text-anchor="middle" font-size="16" font-weight="300" fill="{}" fill-opacity="0.8">{}</text>"#,
                CENTER_X,
                TITLE_TOP + i as f32 * TITLE_LINE_HEIGHT + 17.0,
                GRAY_400,
                escape_xml(line),
            )
        })
        .collect()
}

fn star_row(fills: [FillState; SLOT_COUNT], top: f32) -> String {
    let row_width = SLOT_COUNT as f32 * STAR_SIZE + (SLOT_COUNT - 1) as f32 * STAR_GAP;
    let left = CENTER_X - row_width / 2.0;
    fills
        .iter()
        .enumerate()
        .map(|(i, fill)| {
            format!(
                r#"<g class="star star--{}" transform="translate({} {})">{}</g>"#,
                fill.as_str(),
                left + i as f32 * (STAR_SIZE + STAR_GAP),
                top,
                star_glyph(*fill, "card-half-star"),
            )
        })
        .collect()
}

fn footer(top: f32) -> String {
    format!(
        concat!(
            r#"<text x="{cx}" y="{ty}" text-anchor="middle" font-size="10" letter-spacing="1" fill="{c}">ON</text>"#,
            r#"<image x="{lx}" y="{ly}" width="{lw}" height="{lh}" href="{href}"/>"#,
        ),
        cx = CENTER_X,
        ty = top + 11.0,
        c = GRAY_500,
        lx = CENTER_X - LOGO_WIDTH / 2.0,
        ly = top + 19.0,
        lw = LOGO_WIDTH,
        lh = LOGO_HEIGHT,
        href = logo().href(),
    )
}

/// Clip to the left half of a 24-unit star.
fn half_star_clip(id: &str) -> String {
    format!(
        r#"<clipPath id="{}"><rect x="0" y="0" width="12" height="24"/></clipPath>"#,
        id
    )
}

/// A star in its 24-unit coordinate space.
fn star_glyph(fill: FillState, clip_id: &str) -> String {
    let outline = |color: &str, filled: bool, clip: Option<&str>| {
        format!(
            r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="2" stroke-linejoin="round"{}/>"#,
            STAR_POINTS,
            if filled { color } else { "none" },
            color,
            clip.map(|id| format!(r#" clip-path="url(#{})""#, id))
                .unwrap_or_default(),
        )
    };
    match fill {
        FillState::Full => outline(PINK, true, None),
        FillState::Empty => outline(GRAY_600, false, None),
        FillState::Half => {
            let mut glyph = outline(GRAY_600, false, None);
            glyph.push_str(&outline(PINK, true, Some(clip_id)));
            glyph
        }
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if is_xml_char(c) => escaped.push(c),
            _ => {}
        }
    }
    escaped
}

/// Characters allowed in an XML 1.0 document
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..
    )
}
