use crate::api::{ApiClient, ContentGateway};
use crate::identity::{IdentityStore, LocalIdentityStore};
use crate::theme::theme_definition;
use crate::toast::NoticeQueue;
use crate::types::{HealthStatus, ThemeMode};
use crate::views::{DashboardView, SetupView};
use dioxus::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

const SAVER_CSS: Asset = asset!("/assets/saver.css");
const HEALTH_PROBE_INTERVAL: Duration = Duration::from_secs(30);
const NOTICE_SWEEP_INTERVAL: Duration = Duration::from_millis(500);

/// Long-lived handles shared by every view through context.
#[derive(Clone)]
pub struct AppServices {
    pub gateway: Arc<dyn ContentGateway>,
    pub identity: Arc<dyn IdentityStore>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppPage {
    Dashboard,
    Setup,
}

#[component]
pub fn App() -> Element {
    let services = use_context_provider(|| AppServices {
        gateway: Arc::new(ApiClient::from_env()),
        identity: Arc::new(LocalIdentityStore),
    });
    let user_id = use_hook(|| services.identity.get());
    let active_page = use_signal(|| AppPage::Dashboard);
    let health = use_signal(|| HealthStatus::Unknown);
    let notices = use_signal(NoticeQueue::new);
    let theme = use_signal(|| ThemeMode::Light);

    use_health_probe(health);
    use_notice_sweep(notices);

    rsx! {
        ThemeStyles { theme }
        AppHeader { active_page, theme, user_id: user_id.clone() }
        if health() == HealthStatus::Unhealthy {
            div { class: "health-banner",
                "⚠️ Backend server is not reachable. Saved content and search are unavailable until it is back."
            }
        }
        NoticeOverlay { notices }
        main { class: "page-panels",
            match active_page() {
                AppPage::Dashboard => rsx! { DashboardView { notices } },
                AppPage::Setup => rsx! { SetupView { user_id } },
            }
        }
        AppFooter {}
    }
}

/// Polls the backend every 30 s for the life of the session; failures only
/// flip the banner flag, they never interrupt anything else.
fn use_health_probe(status: Signal<HealthStatus>) {
    let services = use_context::<AppServices>();
    use_hook(move || {
        let gateway = services.gateway.clone();
        let mut status = status;
        spawn(async move {
            loop {
                let next = match gateway.health().await {
                    Ok(()) => HealthStatus::Healthy,
                    Err(err) => {
                        debug!("health probe failed: {err}");
                        HealthStatus::Unhealthy
                    }
                };
                status.set(next);
                tokio::time::sleep(HEALTH_PROBE_INTERVAL).await;
            }
        });
    });
}

/// Single render-loop consumer of the notice queue: expire entries on a
/// short tick, writing the signal only when something actually expired.
fn use_notice_sweep(notices: Signal<NoticeQueue>) {
    use_hook(move || {
        let mut notices = notices;
        spawn(async move {
            loop {
                tokio::time::sleep(NOTICE_SWEEP_INTERVAL).await;
                let now = Instant::now();
                if notices.read().has_expired(now) {
                    notices.with_mut(|queue| queue.prune(now));
                }
            }
        });
    });
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: SAVER_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(active_page: Signal<AppPage>, theme: Signal<ThemeMode>, user_id: String) -> Element {
    let mut theme = theme;
    let toggle_label = match theme() {
        ThemeMode::Light => "🌙",
        ThemeMode::Dark => "☀️",
    };
    rsx! {
        header { class: "header",
            div { class: "header-content",
                div { class: "wordmark",
                    span { class: "wordmark-spark", "✨" }
                    h1 { "Social Saver" }
                }
                nav { class: "page-nav",
                    NavButton { active_page, page: AppPage::Dashboard, label: "Dashboard" }
                    NavButton { active_page, page: AppPage::Setup, label: "Setup" }
                }
                button {
                    class: "nav-button",
                    r#type: "button",
                    title: "Toggle theme",
                    onclick: move |_| {
                        let next = match theme() {
                            ThemeMode::Light => ThemeMode::Dark,
                            ThemeMode::Dark => ThemeMode::Light,
                        };
                        theme.set(next);
                    },
                    "{toggle_label}"
                }
                div { class: "user-chip",
                    "User ID: "
                    code { "{user_id}" }
                }
            }
        }
    }
}

#[component]
fn NavButton(active_page: Signal<AppPage>, page: AppPage, label: &'static str) -> Element {
    let mut active_page = active_page;
    let class = if active_page() == page {
        "nav-button active"
    } else {
        "nav-button"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_page.set(page),
            "{label}"
        }
    }
}

#[component]
fn NoticeOverlay(notices: Signal<NoticeQueue>) -> Element {
    let queue = notices.read();
    rsx! {
        div { class: "toast-stack",
            for notice in queue.entries() {
                div {
                    key: "{notice.id}",
                    class: format!("toast toast-{}", notice.level.class_suffix()),
                    "{notice.message}"
                }
            }
        }
    }
}

#[component]
fn AppFooter() -> Element {
    rsx! {
        footer { class: "footer",
            p { "Forward links to your bot. Browse them here." }
        }
    }
}
