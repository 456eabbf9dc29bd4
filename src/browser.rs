//! Content browsing state machine behind the dashboard.
//!
//! Owns the fetched collection and the active search criteria, and
//! orchestrates initial load, identity auto-switch, search, filter clearing
//! and archive against the gateway. Framework-free: the view layer drives it
//! and renders `BrowserSnapshot`s.

use crate::api::{ApiResult, ContentGateway};
use crate::identity::IdentityStore;
use crate::types::ContentItem;
use std::sync::Arc;
use tracing::{debug, warn};

/// Fixed fetch page size; the dashboard never paginates past the first page.
pub const PAGE_SIZE: u32 = 100;

pub struct ContentBrowser {
    gateway: Arc<dyn ContentGateway>,
    identity: Arc<dyn IdentityStore>,
    user_id: String,
    all_items: Vec<ContentItem>,
    visible_items: Vec<ContentItem>,
    query: String,
    category: Option<String>,
    platform: Option<String>,
    categories: Vec<String>,
    platforms: Vec<String>,
    loading: bool,
}

/// Render-relevant copy of the browser state handed to the view layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowserSnapshot {
    pub user_id: String,
    pub visible_items: Vec<ContentItem>,
    pub categories: Vec<String>,
    pub platforms: Vec<String>,
    pub query: String,
    pub category: Option<String>,
    pub platform: Option<String>,
    pub loading: bool,
    pub has_items: bool,
}

impl ContentBrowser {
    /// The identity is resolved eagerly; a fresh store generates a token
    /// here.
    pub fn new(gateway: Arc<dyn ContentGateway>, identity: Arc<dyn IdentityStore>) -> Self {
        let user_id = identity.get();
        Self {
            gateway,
            identity,
            user_id,
            all_items: Vec::new(),
            visible_items: Vec::new(),
            query: String::new(),
            category: None,
            platform: None,
            categories: Vec::new(),
            platforms: Vec::new(),
            loading: false,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn all_items(&self) -> &[ContentItem] {
        &self.all_items
    }

    pub fn visible_items(&self) -> &[ContentItem] {
        &self.visible_items
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn snapshot(&self) -> BrowserSnapshot {
        BrowserSnapshot {
            user_id: self.user_id.clone(),
            visible_items: self.visible_items.clone(),
            categories: self.categories.clone(),
            platforms: self.platforms.clone(),
            query: self.query.clone(),
            category: self.category.clone(),
            platform: self.platform.clone(),
            loading: self.loading,
            has_items: !self.all_items.is_empty(),
        }
    }

    /// Initial load: fetch the first page, auto-switch identity at most once
    /// when the collection is empty, then populate the filter facets.
    /// Idempotently re-runnable. A failure leaves an empty, non-crashing
    /// state.
    pub async fn load(&mut self) -> ApiResult<()> {
        self.loading = true;
        let result = self.load_inner().await;
        self.loading = false;
        if let Err(err) = &result {
            warn!("initial load failed: {err}");
        }
        result
    }

    async fn load_inner(&mut self) -> ApiResult<()> {
        let mut items = self.gateway.list_content(&self.user_id, 0, PAGE_SIZE).await?;

        // A fresh browser starts with a random token; if the server knows an
        // identity that actually has content, adopt it. At most one switch
        // per load, never chained.
        if items.is_empty() {
            let users = self.gateway.list_users().await?;
            if let Some(first) = users.first() {
                if *first != self.user_id {
                    debug!(from = %self.user_id, to = %first, "adopting server-known identity");
                    self.user_id = first.clone();
                    self.identity.set(first);
                    items = self.gateway.list_content(&self.user_id, 0, PAGE_SIZE).await?;
                }
            }
        }

        self.all_items = items.clone();
        self.visible_items = items;

        if self.all_items.is_empty() {
            self.categories.clear();
            self.platforms.clear();
            return Ok(());
        }

        // Facets are all-or-nothing: a half-populated filter bar is worse
        // than none.
        let (categories, platforms) = futures::join!(
            self.gateway.list_categories(&self.user_id),
            self.gateway.list_platforms(&self.user_id),
        );
        match (categories, platforms) {
            (Ok(categories), Ok(platforms)) => {
                self.categories = categories;
                self.platforms = platforms;
            }
            (Err(err), _) | (_, Err(err)) => {
                warn!("facet fetch failed, leaving filters empty: {err}");
                self.categories.clear();
                self.platforms.clear();
            }
        }

        Ok(())
    }

    /// Run a search. An empty query resets the visible set with no network
    /// call; category/platform selections only take effect together with a
    /// non-empty query (longstanding gap, kept as documented behavior). A
    /// failed search leaves the previous result set visible.
    pub async fn search(
        &mut self,
        query: &str,
        category: Option<&str>,
        platform: Option<&str>,
    ) -> ApiResult<()> {
        self.query = query.trim().to_string();
        self.category = category.map(str::to_string);
        self.platform = platform.map(str::to_string);

        if self.query.is_empty() {
            self.visible_items = self.all_items.clone();
            return Ok(());
        }

        self.loading = true;
        let result = self
            .gateway
            .search(
                &self.user_id,
                &self.query,
                self.category.as_deref(),
                self.platform.as_deref(),
            )
            .await;
        self.loading = false;

        match result {
            Ok(items) => {
                self.visible_items = items;
                Ok(())
            }
            Err(err) => {
                warn!("search failed: {err}");
                Err(err)
            }
        }
    }

    /// Drop the query and filters and show the full fetched set again.
    pub fn clear(&mut self) {
        self.query.clear();
        self.category = None;
        self.platform = None;
        self.visible_items = self.all_items.clone();
    }

    /// Archive (soft-delete) one item. Removal is local and
    /// order-preserving; there is no re-fetch. A failed call leaves the item
    /// visible and archivable again. A 404 means the item is already gone
    /// server-side, so the local removal still happens.
    pub async fn archive(&mut self, content_id: i64) -> ApiResult<()> {
        if let Err(err) = self.gateway.archive(&self.user_id, content_id).await {
            if !err.is_not_found() {
                warn!(content_id, "archive failed: {err}");
                return Err(err);
            }
        }
        self.all_items.retain(|item| item.id != content_id);
        self.visible_items.retain(|item| item.id != content_id);
        Ok(())
    }
}
