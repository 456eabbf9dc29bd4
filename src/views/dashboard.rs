use crate::browser::{BrowserSnapshot, ContentBrowser};
use crate::toast::{NoticeLevel, NoticeQueue};
use crate::types::ContentItem;
use crate::ui::AppServices;
use crate::views::shared::{
    category_class, format_relative_time, hashtag_list, platform_icon, truncate,
};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

type SharedBrowser = Arc<Mutex<ContentBrowser>>;

#[component]
pub fn DashboardView(notices: Signal<NoticeQueue>) -> Element {
    let services = use_context::<AppServices>();
    // Held in a signal so event handlers stay Copy; the Arc itself never
    // changes after mount.
    let browser: Signal<SharedBrowser> = use_signal(|| {
        Arc::new(Mutex::new(ContentBrowser::new(
            services.gateway.clone(),
            services.identity.clone(),
        )))
    });
    let snapshot = use_signal(BrowserSnapshot::default);
    let mut query_input = use_signal(String::new);
    let selected_category = use_signal(|| Option::<String>::None);
    let selected_platform = use_signal(|| Option::<String>::None);
    let mut show_setup_guide = use_signal(|| true);

    // Initial load, once per mount.
    use_hook(move || {
        let mut snapshot_signal = snapshot;
        let mut notices = notices;
        spawn(async move {
            snapshot_signal.with_mut(|snap| snap.loading = true);
            let browser = browser();
            let mut guard = browser.lock().await;
            if guard.load().await.is_err() {
                notices.with_mut(|queue| {
                    queue.push(NoticeLevel::Error, "Could not load your saved content.")
                });
            }
            snapshot_signal.set(guard.snapshot());
        });
    });

    let run_search = {
        let mut snapshot_signal = snapshot;
        let mut notices = notices;
        move |query: String, category: Option<String>, platform: Option<String>| {
            spawn(async move {
                snapshot_signal.with_mut(|snap| snap.loading = true);
                let browser = browser();
                let mut guard = browser.lock().await;
                if guard
                    .search(&query, category.as_deref(), platform.as_deref())
                    .await
                    .is_err()
                {
                    notices.with_mut(|queue| {
                        queue.push(NoticeLevel::Error, "Search failed. Try again.")
                    });
                }
                snapshot_signal.set(guard.snapshot());
            });
        }
    };

    let search_with_current =
        move || run_search(query_input(), selected_category(), selected_platform());

    let run_clear = {
        let mut snapshot_signal = snapshot;
        let mut query_input = query_input;
        let mut selected_category = selected_category;
        let mut selected_platform = selected_platform;
        move |_| {
            query_input.set(String::new());
            selected_category.set(None);
            selected_platform.set(None);
            spawn(async move {
                let browser = browser();
                let mut guard = browser.lock().await;
                guard.clear();
                snapshot_signal.set(guard.snapshot());
            });
        }
    };

    let run_archive = {
        let mut snapshot_signal = snapshot;
        let mut notices = notices;
        move |content_id: i64| {
            spawn(async move {
                let browser = browser();
                let mut guard = browser.lock().await;
                match guard.archive(content_id).await {
                    Ok(()) => {
                        notices.with_mut(|queue| queue.push(NoticeLevel::Success, "Archived."))
                    }
                    Err(_) => notices.with_mut(|queue| {
                        queue.push(NoticeLevel::Error, "Could not archive that item.")
                    }),
                }
                snapshot_signal.set(guard.snapshot());
            });
        }
    };

    // Pure side effect; URL scheme validation is the environment's problem.
    let open_link = move |url: String| {
        spawn(async move {
            let script = format!("window.open({url:?}, '_blank');");
            if let Err(err) = document::eval(&script).await {
                warn!("failed to open link: {err:?}");
            }
        });
    };

    let snap = snapshot();

    rsx! {
        div { class: "dashboard",
            if show_setup_guide() && !snap.has_items && !snap.loading {
                div { class: "setup-guide-wrap",
                    SetupGuide { user_id: snap.user_id.clone() }
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| show_setup_guide.set(false),
                        "Hide setup guide"
                    }
                }
            }

            div { class: "search-bar",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search your saved content...",
                    value: "{query_input}",
                    oninput: move |ev| query_input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            search_with_current();
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: snap.loading,
                    onclick: move |_| search_with_current(),
                    "Search"
                }
                if !query_input().is_empty() {
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: run_clear,
                        "Clear"
                    }
                }
            }

            if !snap.categories.is_empty() || !snap.platforms.is_empty() {
                FilterBar {
                    categories: snap.categories.clone(),
                    platforms: snap.platforms.clone(),
                    selected_category,
                    selected_platform,
                }
            }

            if snap.loading && snap.visible_items.is_empty() {
                LoadingGrid {}
            } else if snap.visible_items.is_empty() {
                EmptyState {
                    message: "Forward links from Instagram, Twitter, or blogs to your bot to get started!",
                }
            } else {
                div { class: "content-grid",
                    for item in snap.visible_items.iter() {
                        ContentCard {
                            key: "{item.id}",
                            item: item.clone(),
                            on_archive: run_archive,
                            on_open: open_link,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterBar(
    categories: Vec<String>,
    platforms: Vec<String>,
    selected_category: Signal<Option<String>>,
    selected_platform: Signal<Option<String>>,
) -> Element {
    let mut selected_category = selected_category;
    let mut selected_platform = selected_platform;
    rsx! {
        div { class: "filter-bar",
            select {
                class: "filter-select",
                value: selected_category().unwrap_or_default(),
                onchange: move |ev| {
                    let value = ev.value();
                    selected_category.set(if value.is_empty() { None } else { Some(value) });
                },
                option { value: "", "All Categories" }
                for category in categories.iter() {
                    option { key: "{category}", value: "{category}", "{category}" }
                }
            }
            select {
                class: "filter-select",
                value: selected_platform().unwrap_or_default(),
                onchange: move |ev| {
                    let value = ev.value();
                    selected_platform.set(if value.is_empty() { None } else { Some(value) });
                },
                option { value: "", "All Platforms" }
                for platform in platforms.iter() {
                    option { key: "{platform}", value: "{platform}", "{platform.to_uppercase()}" }
                }
            }
        }
    }
}

#[component]
fn ContentCard(
    item: ContentItem,
    on_archive: EventHandler<i64>,
    on_open: EventHandler<String>,
) -> Element {
    let mut copied = use_signal(|| false);
    let copy_payload = item.original_url.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut clipboard) = arboard::Clipboard::new() {
                    let _ = clipboard.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
            copied.set(true);
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            copied.set(false);
        });
    };

    let content_id = item.id;
    let open_url = item.original_url.clone();
    let timestamp = format_relative_time(&item.created_at);

    rsx! {
        div { class: "content-card",
            if let Some(thumbnail) = item.thumbnail_url.as_deref().filter(|url| !url.is_empty()) {
                div { class: "card-thumbnail",
                    img { src: "{thumbnail}", alt: item.title.clone().unwrap_or_default() }
                }
            }
            div { class: "card-body",
                div { class: "card-platform-row",
                    span { class: "platform-icon", "{platform_icon(&item.platform)}" }
                    span { class: "platform-name", "{item.platform.to_uppercase()}" }
                    span { class: "card-timestamp", "{timestamp}" }
                }
                if let Some(title) = item.title.as_deref().filter(|t| !t.is_empty()) {
                    h3 { class: "card-title", "{title}" }
                }
                if let Some(summary) = item.summary.as_deref().filter(|s| !s.is_empty()) {
                    p { class: "card-summary", "{summary}" }
                }
                if let Some(category) = item.category.as_deref().filter(|c| !c.is_empty()) {
                    span { class: "{category_class(category)}", "{category}" }
                }
                if let Some(caption) = item.caption.as_deref().filter(|c| !c.is_empty()) {
                    p { class: "card-caption", "{truncate(caption, 100)}" }
                }
                if let Some(hashtags) = item.hashtags.as_deref().filter(|h| !h.is_empty()) {
                    div { class: "card-hashtags",
                        for tag in hashtag_list(hashtags) {
                            span { class: "hashtag", "{tag}" }
                        }
                    }
                }
                div { class: "card-actions",
                    button {
                        class: "action-btn action-open",
                        r#type: "button",
                        onclick: move |_| on_open.call(open_url.clone()),
                        "Open"
                    }
                    button {
                        class: format!(
                            "action-btn {}",
                            if copied() { "action-copied" } else { "action-copy" }
                        ),
                        r#type: "button",
                        onclick: on_copy,
                        if copied() { "Copied" } else { "Copy" }
                    }
                    button {
                        class: "action-btn action-archive",
                        r#type: "button",
                        onclick: move |_| on_archive.call(content_id),
                        "Archive"
                    }
                }
            }
        }
    }
}

#[component]
fn LoadingGrid() -> Element {
    rsx! {
        div { class: "content-grid",
            for i in 0..6 {
                div { key: "{i}", class: "content-card card-skeleton" }
            }
        }
    }
}

#[component]
fn EmptyState(message: &'static str) -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-state-icon", "+" }
            h3 { "No content saved yet" }
            p { "{message}" }
        }
    }
}

#[component]
fn SetupGuide(user_id: String) -> Element {
    let mut copied = use_signal(|| false);
    let copy_payload = format!("Your User ID: {user_id}");
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut clipboard) = arboard::Clipboard::new() {
                    let _ = clipboard.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
            copied.set(true);
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            copied.set(false);
        });
    };

    rsx! {
        div { class: "setup-guide",
            div { class: "setup-guide-header",
                span { class: "setup-guide-spark", "⚡" }
                h2 { "Quick Setup" }
            }
            div { class: "setup-step",
                h3 { "Step 1: Save the bot's number" }
                p { "Add the bot to your messaging app and save its number." }
            }
            div { class: "setup-step",
                h3 { "Step 2: Send a test link" }
                p {
                    "Forward any Instagram, Twitter, or blog link. The bot analyzes it, "
                    "auto-categorizes it, writes a summary, and saves it here."
                }
            }
            div { class: "setup-step",
                h3 { "Step 3: Browse your dashboard" }
                p { "Saved content appears automatically. Search, filter, and archive everything." }
            }
            div { class: "setup-user-id",
                p { "Your User ID (for testing):" }
                code { "{user_id}" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: on_copy,
                    if copied() { "Copied" } else { "Copy" }
                }
            }
        }
    }
}
