use axum::extract::FromRef;
use std::sync::Arc;

use cms_core::domain::{
    AboutSection, Branch, CalculatorConfig, NewsItem, Slide, Stat, TeamMember,
};
use cms_core::repositories::{ContentStore, MenuRepository, PageRepository};
use cms_core::services::{ContentService, MenuService, PageService, RatesService};
use cms_security::BasicAuthenticator;
use cms_shared::config::AppConfig;

/// One storage handle per resource; where each lives is decided at startup.
pub struct ContentStores {
    pub slides: Arc<dyn ContentStore<Slide>>,
    pub news: Arc<dyn ContentStore<NewsItem>>,
    pub calculators: Arc<dyn ContentStore<CalculatorConfig>>,
    pub branches: Arc<dyn ContentStore<Branch>>,
    pub team: Arc<dyn ContentStore<TeamMember>>,
    pub stats: Arc<dyn ContentStore<Stat>>,
    pub about: Arc<dyn ContentStore<AboutSection>>,
    pub pages: Arc<dyn PageRepository>,
    pub menu: Arc<dyn MenuRepository>,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<BasicAuthenticator>,
    pub rates: Arc<RatesService>,
    pub slides: ContentService<Slide>,
    pub news: ContentService<NewsItem>,
    pub calculators: ContentService<CalculatorConfig>,
    pub branches: ContentService<Branch>,
    pub team: ContentService<TeamMember>,
    pub stats: ContentService<Stat>,
    pub about: ContentService<AboutSection>,
    pub pages: PageService,
    pub menu: MenuService,
}

impl AppState {
    pub fn new(config: AppConfig, stores: ContentStores) -> Self {
        let auth = BasicAuthenticator::new(&config.admin.username, &config.admin.password);
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            rates: Arc::new(RatesService::new()),
            slides: ContentService::new(stores.slides),
            news: ContentService::new(stores.news),
            calculators: ContentService::new(stores.calculators),
            branches: ContentService::new(stores.branches),
            team: ContentService::new(stores.team),
            stats: ContentService::new(stores.stats),
            about: ContentService::new(stores.about),
            pages: PageService::new(stores.pages),
            menu: MenuService::new(stores.menu),
        }
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<BasicAuthenticator> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<AppState> for Arc<RatesService> {
    fn from_ref(state: &AppState) -> Self {
        state.rates.clone()
    }
}

impl FromRef<AppState> for PageService {
    fn from_ref(state: &AppState) -> Self {
        state.pages.clone()
    }
}

impl FromRef<AppState> for MenuService {
    fn from_ref(state: &AppState) -> Self {
        state.menu.clone()
    }
}

macro_rules! content_service_ref {
    ($($field:ident: $entity:ty),+ $(,)?) => {
        $(
            impl FromRef<AppState> for ContentService<$entity> {
                fn from_ref(state: &AppState) -> Self {
                    state.$field.clone()
                }
            }
        )+
    };
}

content_service_ref!(
    slides: Slide,
    news: NewsItem,
    calculators: CalculatorConfig,
    branches: Branch,
    team: TeamMember,
    stats: Stat,
    about: AboutSection,
);
