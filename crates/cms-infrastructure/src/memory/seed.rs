//! Demo content for the in-memory stores

use chrono::NaiveDate;
use uuid::Uuid;

use cms_core::domain::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn demo_slides() -> Vec<Slide> {
    let slides = [
        ("Хурдан зээл", "Fast loans", "/uploads/hero-loans.jpg", "/loans"),
        ("Хадгаламж", "Savings", "/uploads/hero-savings.jpg", "/savings"),
        ("Салбарууд", "Branches", "/uploads/hero-branches.jpg", "/branches"),
    ];
    slides
        .iter()
        .enumerate()
        .map(|(i, (mn, en, image, link))| {
            Slide::from_draft(
                Uuid::new_v4(),
                SlideDraft {
                    title_mn: mn.to_string(),
                    title_en: en.to_string(),
                    subtitle_mn: None,
                    subtitle_en: None,
                    image_url: image.to_string(),
                    link: Some(link.to_string()),
                    order: i as i32,
                    is_active: true,
                },
            )
        })
        .collect()
}

pub fn demo_news() -> Vec<NewsItem> {
    let news = [
        ("Шинэ салбар нээгдлээ", "branch", date(2024, 5, 2), true, true),
        ("Зээлийн хүү буурлаа", "loans", date(2024, 4, 18), false, true),
        ("Жилийн тайлан", "reports", date(2024, 3, 1), true, false),
        ("Мобайл апп шинэчлэгдлээ", "digital", date(2024, 2, 12), false, true),
        ("Хамтын ажиллагааны гэрээ", "partners", date(2024, 1, 20), false, false),
    ];
    news.iter()
        .map(|(title, category, published_at, pinned_news, pinned_home)| {
            NewsItem::from_draft(
                Uuid::new_v4(),
                NewsDraft {
                    title: title.to_string(),
                    excerpt: String::new(),
                    content: title.to_string(),
                    banner_image: None,
                    category: category.to_string(),
                    published_at: *published_at,
                    is_active: true,
                    is_pinned_news: *pinned_news,
                    is_pinned_home: *pinned_home,
                },
            )
        })
        .collect()
}

pub fn demo_menu() -> Vec<MenuItem> {
    let item = |title: &str, href: &str, order: i32, parent_id: Option<Uuid>| MenuItem {
        id: Uuid::new_v4(),
        title: title.to_string(),
        href: href.to_string(),
        order,
        is_active: true,
        parent_id,
    };

    let products = item("Бүтээгдэхүүн", "/products", 0, None);
    let about = item("Бидний тухай", "/about-us", 1, None);
    let news = item("Мэдээ", "/news", 2, None);
    let loans = item("Зээл", "/products/loans", 0, Some(products.id));
    let savings = item("Хадгаламж", "/products/savings", 1, Some(products.id));
    let branches = item("Салбарууд", "/branches", 0, Some(about.id));

    vec![products, about, news, loans, savings, branches]
}

pub fn demo_pages() -> Vec<Page> {
    vec![Page::from_draft(
        Uuid::new_v4(),
        PageDraft {
            slug: "privacy-policy".to_string(),
            title_mn: "Нууцлалын бодлого".to_string(),
            title_en: "Privacy policy".to_string(),
            content_mn: "Нууцлалын бодлого".to_string(),
            content_en: "Privacy policy".to_string(),
            is_published: true,
            banner_image: None,
            text_color: None,
            background_color: None,
            layout: PageLayout::Default,
        },
    )]
}

pub fn demo_calculators() -> Vec<CalculatorConfig> {
    vec![
        CalculatorConfig::from_draft(
            Uuid::new_v4(),
            CalculatorConfigDraft {
                product_key: "salary-loan".to_string(),
                name_mn: "Цалингийн зээл".to_string(),
                name_en: "Salary loan".to_string(),
                min_amount: 500_000.0,
                max_amount: 50_000_000.0,
                min_term_months: 3,
                max_term_months: 36,
                annual_interest_rate: 18.0,
                is_active: true,
            },
        ),
        CalculatorConfig::from_draft(
            Uuid::new_v4(),
            CalculatorConfigDraft {
                product_key: "car-loan".to_string(),
                name_mn: "Автомашины зээл".to_string(),
                name_en: "Car loan".to_string(),
                min_amount: 5_000_000.0,
                max_amount: 150_000_000.0,
                min_term_months: 6,
                max_term_months: 60,
                annual_interest_rate: 21.6,
                is_active: true,
            },
        ),
    ]
}
