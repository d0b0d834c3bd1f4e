//! Default page layouts generated from fetched news.
//!
//! Coordinates are authored for the square 1080 × 1080 export frame, so the
//! lower parts of the news and summary pages sit below the 16:9 editing
//! frame until the user rearranges them.

use crate::category::CategoryElements;
use crate::content::NewsItem;
use crate::element::{ContainerProps, Element, ElementId, ElementPayload, ImageProps, TextAlign, TextProps};
use crate::theme::Theme;
use chrono::{Datelike, NaiveDate};
use kurbo::Rect;

/// Vertical pitch between summary rows.
pub const SUMMARY_ROW_PITCH: f64 = 125.0;
/// Top of the first summary row.
const SUMMARY_ROWS_TOP: f64 = 360.0;

const NEWS_CATEGORY_LABEL: &str = "개발";
const SUMMARY_CATEGORY_LABEL: &str = "뉴스";

/// Logical frame of a generated element.
fn frame(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::from_origin_size((x, y), (width, height))
}

fn place(id: impl Into<ElementId>, frame: Rect, z_index: i64, payload: ElementPayload) -> Element {
    Element::new(id, frame.origin(), frame.size(), payload).with_z_index(z_index)
}

fn text(id: impl Into<ElementId>, frame: Rect, z_index: i64, props: TextProps) -> Element {
    place(id, frame, z_index, ElementPayload::Text(props))
}

fn container(id: impl Into<ElementId>, frame: Rect, z_index: i64, props: ContainerProps) -> Element {
    place(id, frame, z_index, ElementPayload::Container(props))
}

fn image(id: impl Into<ElementId>, frame: Rect, z_index: i64, url: &str) -> Element {
    place(id, frame, z_index, ElementPayload::Image(ImageProps::new(url)))
}

/// Build the stored collections of all three pages.
///
/// The news page shows the first item; it is empty when there are no items.
pub fn build_pages(theme: &Theme, items: &[NewsItem], date: NaiveDate) -> CategoryElements {
    CategoryElements {
        cover: cover_page(theme),
        news: items.first().map(|item| news_page(theme, item, 0)).unwrap_or_default(),
        summary: summary_page(theme, items, date),
    }
}

/// Cover: subtitle, title, character image and QR code.
pub fn cover_page(theme: &Theme) -> Vec<Element> {
    let fonts = &theme.fonts;
    vec![
        text(
            "cover_subtitle",
            frame(60.0, 180.0, 960.0, 50.0),
            2,
            TextProps::new(&theme.texts.cover_subtitle)
                .with_color("rgba(255, 255, 255, 0.9)")
                .with_font(&fonts.body_font, fonts.cover_subtitle)
                .with_align(TextAlign::Center),
        ),
        text(
            "cover_title",
            frame(60.0, 300.0, 960.0, 250.0),
            1,
            TextProps::new(&theme.texts.cover_title)
                .with_color("rgba(255, 255, 255, 0.95)")
                .with_font(&fonts.title_font, fonts.cover_title)
                .with_align(TextAlign::Center),
        ),
        image(
            "character_image",
            frame(315.0, 500.0, 450.0, 450.0),
            3,
            &theme.images.character,
        ),
        image(
            "qr_code",
            frame(870.0, 60.0, 150.0, 150.0),
            4,
            &theme.images.qr_code,
        ),
    ]
}

/// One news card for `item`; `index` numbers the card and suffixes ids.
pub fn news_page(theme: &Theme, item: &NewsItem, index: usize) -> Vec<Element> {
    let fonts = &theme.fonts;
    vec![
        container(
            format!("news_topic_category_bg_{index}"),
            frame(420.0, 80.0, 240.0, 50.0),
            2,
            ContainerProps::filled("white").with_radius(25.0),
        ),
        text(
            format!("news_topic_category_text_{index}"),
            frame(420.0, 92.0, 240.0, 30.0),
            3,
            // Badge text follows the theme accent rather than a fixed colour.
            TextProps::new(NEWS_CATEGORY_LABEL)
                .with_color(&theme.colors.text_accent)
                .with_font(&fonts.body_font, fonts.news_category)
                .with_align(TextAlign::Center),
        ),
        text(
            format!("news_page_number_{index}"),
            frame(60.0, 150.0, 960.0, 50.0),
            2,
            TextProps::new(format!("GeekNews #{}", index + 1))
                .with_color("white")
                .with_font(&fonts.title_font, fonts.news_number)
                .with_align(TextAlign::Center),
        ),
        text(
            format!("news_title_{index}"),
            frame(80.0, 220.0, 920.0, 100.0),
            2,
            TextProps::new(&item.title)
                .with_color("rgba(255, 255, 255, 0.9)")
                .with_font(&fonts.title_font, fonts.news_title)
                .with_align(TextAlign::Center),
        ),
        container(
            format!("news_body_container_{index}"),
            frame(80.0, 340.0, 920.0, 450.0),
            1,
            ContainerProps::filled("rgba(255, 255, 255, 0.1)")
                .with_radius(20.0)
                .with_blur("blur(18px)"),
        ),
        text(
            format!("news_description_{index}"),
            frame(130.0, 390.0, 820.0, 350.0),
            2,
            TextProps::new(&item.description)
                .with_color("#333")
                .with_font(&fonts.body_font, fonts.news_description),
        ),
        container(
            format!("links_section_{index}"),
            frame(80.0, 810.0, 920.0, 120.0),
            1,
            ContainerProps::filled("rgba(255, 255, 255, 0.3)").with_radius(15.0),
        ),
        text(
            format!("links_content_{index}"),
            frame(100.0, 830.0, 880.0, 80.0),
            2,
            TextProps::new(format!("토론: {}\n원문: {}", item.discussion_url, item.source_url))
                .with_color("#333")
                .with_font(&fonts.body_font, fonts.link_text),
        ),
        image(
            format!("news_character_image_{index}"),
            frame(800.0, 700.0, 250.0, 250.0),
            3,
            &theme.images.character,
        ),
    ]
}

/// Summary: header block, one six-element row per item, then a footer.
pub fn summary_page(theme: &Theme, items: &[NewsItem], date: NaiveDate) -> Vec<Element> {
    let fonts = &theme.fonts;
    let mut elements = vec![
        container(
            "summary_card_container",
            frame(60.0, 60.0, 960.0, 960.0),
            1,
            ContainerProps::filled("rgba(255, 255, 255, 0.12)")
                .with_radius(30.0)
                .with_border(2.0, "rgba(255, 255, 255, 0.35)")
                .with_shadow("0 20px 45px rgba(0,0,0,0.35)")
                .with_blur("blur(22px)"),
        ),
        text(
            "summary_main_title",
            frame(80.0, 110.0, 920.0, 80.0),
            2,
            TextProps::new(&theme.texts.summary_title)
                .with_color("white")
                .with_font(&fonts.title_font, fonts.summary_title)
                .with_align(TextAlign::Center),
        ),
        text(
            "summary_date",
            frame(80.0, 200.0, 920.0, 40.0),
            2,
            TextProps::new(format_korean_date(date))
                .with_color("rgba(255, 255, 255, 0.9)")
                .with_font(&fonts.body_font, 24.0)
                .with_align(TextAlign::Center),
        ),
        text(
            "summary_subtitle",
            frame(80.0, 280.0, 920.0, 40.0),
            2,
            TextProps::new(&theme.texts.summary_subtitle)
                .with_color("white")
                .with_font(&fonts.title_font, fonts.summary_subtitle)
                .with_align(TextAlign::Center),
        ),
    ];

    for (i, item) in items.iter().enumerate() {
        let offset = i as f64 * SUMMARY_ROW_PITCH;
        elements.extend([
            container(
                format!("summary_item_container_{i}"),
                frame(110.0, SUMMARY_ROWS_TOP + offset, 860.0, 110.0),
                2,
                ContainerProps::filled("rgba(255, 255, 255, 0.18)")
                    .with_radius(20.0)
                    .with_border(1.0, "rgba(255, 255, 255, 0.3)")
                    .with_shadow("0 10px 25px rgba(0,0,0,0.3)")
                    .with_blur("blur(18px)"),
            ),
            container(
                format!("summary_item_number_bg_{i}"),
                frame(135.0, 395.0 + offset, 40.0, 40.0),
                4,
                ContainerProps::filled("rgba(255, 255, 255, 0.9)").with_radius(20.0),
            ),
            text(
                format!("summary_item_number_text_{i}"),
                frame(135.0, 400.0 + offset, 40.0, 30.0),
                5,
                TextProps::new((i + 1).to_string())
                    .with_color("#333")
                    .with_font(&fonts.title_font, 18.0)
                    .with_align(TextAlign::Center),
            ),
            container(
                format!("summary_item_category_bg_{i}"),
                frame(190.0, 395.0 + offset, 80.0, 40.0),
                3,
                ContainerProps::filled("rgba(255, 255, 255, 0.25)")
                    .with_radius(15.0)
                    .with_blur("blur(10px)"),
            ),
            text(
                format!("summary_item_category_text_{i}"),
                frame(190.0, 402.0 + offset, 80.0, 25.0),
                4,
                TextProps::new(SUMMARY_CATEGORY_LABEL)
                    .with_color("white")
                    .with_font(&fonts.body_font, 14.0)
                    .with_align(TextAlign::Center),
            ),
            text(
                format!("summary_item_title_{i}"),
                frame(280.0, 380.0 + offset, 680.0, 80.0),
                3,
                TextProps::new(&item.title)
                    .with_color("white")
                    .with_font(&fonts.body_font, fonts.summary_item_title)
                    .with_align(TextAlign::Left),
            ),
        ]);
    }

    let footer_top = SUMMARY_ROWS_TOP + items.len() as f64 * SUMMARY_ROW_PITCH;
    elements.extend([
        container(
            "summary_footer_divider",
            frame(110.0, footer_top, 860.0, 2.0),
            2,
            ContainerProps::filled("rgba(255, 255, 255, 0.3)"),
        ),
        text(
            "summary_footer_text",
            frame(80.0, footer_top + 20.0, 920.0, 30.0),
            2,
            TextProps::new(theme.summary_footer(items.len()))
                .with_color("rgba(255, 255, 255, 0.95)")
                .with_font(&fonts.body_font, 20.0)
                .with_align(TextAlign::Center),
        ),
        text(
            "summary_source_text",
            frame(80.0, footer_top + 60.0, 920.0, 30.0),
            2,
            TextProps::new(&theme.texts.summary_source)
                .with_color("rgba(255, 255, 255, 0.8)")
                .with_font(&fonts.body_font, 18.0)
                .with_align(TextAlign::Center),
        ),
    ]);

    elements
}

/// Long Korean date, e.g. `2025년 3월 7일`.
pub fn format_korean_date(date: NaiveDate) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}
