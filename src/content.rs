//! Static content shown on the page. Order of every list is display order.

use chrono::{Datelike, NaiveDate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Hero,
    Portfolio,
    About,
    Blog,
    Contact,
}

impl SectionId {
    /// Anchor id of the `<section>` element.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Portfolio => "portfolio",
            SectionId::About => "about",
            SectionId::Blog => "blog",
            SectionId::Contact => "contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: SectionId,
    pub label: &'static str,
    pub number: &'static str,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { id: SectionId::Hero, label: "Главная", number: "01" },
    NavEntry { id: SectionId::Portfolio, label: "Портфолио", number: "02" },
    NavEntry { id: SectionId::About, label: "О нас", number: "03" },
    NavEntry { id: SectionId::Blog, label: "Блог", number: "04" },
    NavEntry { id: SectionId::Contact, label: "Контакты", number: "05" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub year: u16,
    pub image: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Кристалл Тауэр",
        category: "Коммерческая недвижимость",
        year: 2024,
        image: "https://images.unsplash.com/photo-1486325212027-8081e485255e?w=800&q=80",
        description: "Высотный офисный комплекс в центре Москвы",
    },
    Project {
        id: 2,
        title: "Эко-Резиденция",
        category: "Жилые комплексы",
        year: 2023,
        image: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=800&q=80",
        description: "Экологичный жилой район с зелеными крышами",
    },
    Project {
        id: 3,
        title: "Музей Современного Искусства",
        category: "Культурные объекты",
        year: 2023,
        image: "https://images.unsplash.com/photo-1511818966892-d7d671e672a2?w=800&q=80",
        description: "Пространство для выставок и перформансов",
    },
    Project {
        id: 4,
        title: "Вилла на Берегу",
        category: "Частные дома",
        year: 2024,
        image: "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?w=800&q=80",
        description: "Минималистичная резиденция у моря",
    },
    Project {
        id: 5,
        title: "Техно-Парк",
        category: "Индустриальная архитектура",
        year: 2022,
        image: "https://images.unsplash.com/photo-1487958449943-2429e8be8625?w=800&q=80",
        description: "Инновационный комплекс для IT-компаний",
    },
    Project {
        id: 6,
        title: "Скандинавский Квартал",
        category: "Градостроительство",
        year: 2024,
        image: "https://images.unsplash.com/photo-1448630360428-65456885c650?w=800&q=80",
        description: "Жилой квартал в скандинавском стиле",
    },
];

/// Filter tabs above the portfolio grid. The first entry is the "show everything" tab.
pub const PORTFOLIO_CATEGORIES: &[&str] = &[
    "Все",
    "Жилые комплексы",
    "Коммерческая",
    "Культурные объекты",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    /// ISO `YYYY-MM-DD`.
    pub published: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub excerpt: &'static str,
}

const MONTHS_SHORT: [&str; 12] = [
    "Янв", "Фев", "Мар", "Апр", "Май", "Июн", "Июл", "Авг", "Сен", "Окт", "Ноя", "Дек",
];

impl Article {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").ok()
    }

    /// Short Russian date, e.g. `08 Янв 2024`. Falls back to the raw value.
    pub fn display_date(&self) -> String {
        match self.published_on() {
            Some(date) => format!(
                "{:02} {} {}",
                date.day(),
                MONTHS_SHORT[date.month0() as usize],
                date.year()
            ),
            None => self.published.to_string(),
        }
    }
}

pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "Будущее Устойчивой Архитектуры",
        published: "2024-01-15",
        category: "Тренды",
        image: "https://images.unsplash.com/photo-1518005020951-eccb494ad742?w=600&q=80",
        excerpt: "Как экологические технологии меняют подход к проектированию зданий",
    },
    Article {
        id: 2,
        title: "Минимализм в Интерьерах 2024",
        published: "2024-01-08",
        category: "Дизайн",
        image: "https://images.unsplash.com/photo-1493809842364-78817add7ffb?w=600&q=80",
        excerpt: "Новые тенденции в оформлении жилых пространств",
    },
    Article {
        id: 3,
        title: "Интервью с Главным Архитектором",
        published: "2024-01-02",
        category: "Интервью",
        image: "https://images.unsplash.com/photo-1503387762-592deb58ef4e?w=600&q=80",
        excerpt: "Разговор о вдохновении и творческом процессе",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudioValue {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STUDIO_VALUES: &[StudioValue] = &[
    StudioValue { icon: "Lightbulb", title: "Инновации", description: "Применяем передовые технологии проектирования" },
    StudioValue { icon: "Leaf", title: "Устойчивость", description: "Экологичные решения для будущего поколений" },
    StudioValue { icon: "Users", title: "Команда", description: "50+ профессионалов с международным опытом" },
    StudioValue { icon: "Award", title: "Качество", description: "Строгий контроль на всех этапах работы" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { icon: "MapPin", label: "Адрес", value: "Москва, ул. Архитектора Власова, 12" },
    ContactDetail { icon: "Phone", label: "Телефон", value: "+7 (495) 123-45-67" },
    ContactDetail { icon: "Mail", label: "Email", value: "info@architectura.ru" },
    ContactDetail { icon: "Clock", label: "Часы работы", value: "Пн-Пт: 9:00 - 19:00" },
];

pub const SOCIAL_LINKS: &[&str] = &["Instagram", "Telegram", "Youtube"];

/// Headline numbers in the hero corner: (value, caption).
pub const HERO_STATS: &[(&str, &str)] = &[
    ("150+", "Проектов"),
    ("12", "Лет опыта"),
    ("25", "Наград"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_entries_follow_document_order() {
        let anchors: Vec<_> = NAV_ENTRIES.iter().map(|e| e.id.anchor()).collect();
        assert_eq!(anchors, ["hero", "portfolio", "about", "blog", "contact"]);
        assert_eq!(NAV_ENTRIES[0].id, SectionId::default());
    }

    #[test]
    fn article_dates_render_in_russian_short_form() {
        assert_eq!(ARTICLES[0].display_date(), "15 Янв 2024");
        assert_eq!(ARTICLES[1].display_date(), "08 Янв 2024");
    }

    #[test]
    fn unparseable_date_is_shown_verbatim() {
        let article = Article { published: "скоро", ..ARTICLES[2] };
        assert_eq!(article.published_on(), None);
        assert_eq!(article.display_date(), "скоро");
    }
}
