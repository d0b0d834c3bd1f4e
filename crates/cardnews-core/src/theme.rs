//! Page theme: backgrounds, fonts, texts and image sources.

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// Background and text colours. Backgrounds are CSS background values,
/// typically gradients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub cover_background: String,
    pub news_background: String,
    pub summary_background: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_accent: String,
}

/// Font families and per-role font sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub title_font: String,
    pub body_font: String,
    pub cover_title: f64,
    pub cover_subtitle: f64,
    pub news_title: f64,
    pub news_description: f64,
    pub news_category: f64,
    pub news_number: f64,
    pub link_text: f64,
    pub summary_title: f64,
    pub summary_subtitle: f64,
    pub summary_item_title: f64,
}

/// Fixed page copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTexts {
    pub cover_title: String,
    pub cover_subtitle: String,
    pub summary_title: String,
    pub summary_subtitle: String,
    /// Footer line; `{count}` is replaced with the number of news items.
    pub summary_footer_text: String,
    pub summary_source: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeImages {
    pub character: String,
    pub qr_code: String,
}

/// A complete page theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    pub texts: ThemeTexts,
    pub images: ThemeImages,
}

const DEFAULT_GRADIENT: &str = "linear-gradient(160deg, #FF5F6D 0%, #FFC371 100%)";

impl Default for Theme {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            name: "Default".to_string(),
            colors: ThemeColors {
                cover_background: DEFAULT_GRADIENT.to_string(),
                news_background: DEFAULT_GRADIENT.to_string(),
                summary_background: DEFAULT_GRADIENT.to_string(),
                text_primary: "#FFFFFF".to_string(),
                text_secondary: "rgba(255, 255, 255, 0.9)".to_string(),
                text_accent: "#FF5F6D".to_string(),
            },
            fonts: ThemeFonts {
                title_font: "BlackHanSans".to_string(),
                body_font: "Pretendard".to_string(),
                cover_title: 120.0,
                cover_subtitle: 32.0,
                news_title: 48.0,
                news_description: 32.0,
                news_category: 24.0,
                news_number: 40.0,
                link_text: 20.0,
                summary_title: 72.0,
                summary_subtitle: 36.0,
                summary_item_title: 22.0,
            },
            texts: ThemeTexts {
                cover_title: "모드뉴스".to_string(),
                cover_subtitle: "모여봐요 개발자와 AI의 숲".to_string(),
                summary_title: "GeekNews 요약".to_string(),
                summary_subtitle: "오늘의 주요 뉴스".to_string(),
                summary_footer_text: "총 {count}개의 뉴스를 확인했어요".to_string(),
                summary_source: "출처: GeekNews (news.hada.io)".to_string(),
            },
            images: ThemeImages {
                character: "/image/character/1.png".to_string(),
                qr_code: "/image/QR.png".to_string(),
            },
        }
    }
}

impl Theme {
    /// Background style for a category's page.
    pub fn background_for(&self, category: Category) -> &str {
        match category {
            Category::Cover => &self.colors.cover_background,
            Category::News => &self.colors.news_background,
            Category::Summary => &self.colors.summary_background,
        }
    }

    /// Summary footer with the item count filled in.
    pub fn summary_footer(&self, count: usize) -> String {
        self.texts.summary_footer_text.replace("{count}", &count.to_string())
    }
}
