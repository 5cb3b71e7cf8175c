//! HTTP server: routing, locale redirect middleware and request handlers.
//!
//! Every page lives under a locale prefix. Requests without a valid prefix
//! (including `/`) are answered with a 307 redirect to the canonical
//! locale-prefixed path, query string preserved. `/health` sits outside the
//! locale space for load balancers.

use crate::config::Config;
use crate::contact::{ContactForm, ContactSink};
use crate::events::EventCategory;
use crate::i18n::{resolve, BundleCache, Locale};
use crate::pages;
use anyhow::{Context, Result};
use axum::{
    async_trait,
    extract::{Form, FromRequestParts, Query, Request, State},
    http::{request::Parts, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Shared application state handed to every request handler.
///
/// Everything here is read-only after startup, so cloning the state per
/// request is a handful of `Arc` bumps.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub bundles: Arc<BundleCache>,
    pub contact_sink: Arc<dyn ContactSink>,
}

/// Locale extracted from the leading path segment.
///
/// Requests only reach the handlers after the redirect middleware, so the
/// segment is normally valid; the rejection still redirects to the canonical
/// path rather than erroring, keeping the extractor total.
#[derive(Debug, Clone, Copy)]
pub struct SiteLocale(pub Locale);

#[async_trait]
impl<S> FromRequestParts<S> for SiteLocale
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let resolution = resolve(parts.uri.path());
        if resolution.redirect_needed {
            Err(Redirect::temporary(&with_query(
                &resolution.canonical_path,
                parts.uri.query(),
            )))
        } else {
            Ok(SiteLocale(resolution.locale))
        }
    }
}

/// Build the site router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/:locale", get(home))
        .route("/:locale/about", get(about))
        .route("/:locale/services", get(services))
        .route("/:locale/events", get(events))
        .route("/:locale/contact", get(contact_page).post(contact_submit))
        .fallback(not_found)
        .layer(middleware::from_fn(locale_redirect))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve the site until the process is stopped.
pub async fn serve(state: AppState) -> Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("✓ Listening on http://{}", addr);
    axum::serve(listener, router(state))
        .await
        .context("server error")?;

    Ok(())
}

/// Redirect requests without a valid locale prefix to their canonical path.
///
/// Mirrors the resolver contract at the HTTP boundary: `/` and any path
/// whose first segment is not an enabled locale get a 307 to the
/// default-locale-prefixed equivalent, query string preserved.
async fn locale_redirect(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if path == "/health" {
        return next.run(request).await;
    }

    let resolution = resolve(path);
    if resolution.redirect_needed {
        let target = with_query(&resolution.canonical_path, request.uri().query());
        debug!("Redirecting {} -> {}", path, target);
        return Redirect::temporary(&target).into_response();
    }

    next.run(request).await
}

/// Re-attach the query string to a redirect target.
fn with_query(path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{path}?{q}"),
        _ => path.to_string(),
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn home(State(state): State<AppState>, SiteLocale(locale): SiteLocale) -> Html<String> {
    let bundle = state.bundles.bundle(locale);
    Html(pages::home(locale, &bundle))
}

async fn about(State(state): State<AppState>, SiteLocale(locale): SiteLocale) -> Html<String> {
    let bundle = state.bundles.bundle(locale);
    Html(pages::about(locale, &bundle))
}

async fn services(State(state): State<AppState>, SiteLocale(locale): SiteLocale) -> Html<String> {
    let bundle = state.bundles.bundle(locale);
    Html(pages::services(locale, &bundle))
}

#[derive(Debug, Deserialize)]
struct EventsQuery {
    category: Option<String>,
}

async fn events(
    State(state): State<AppState>,
    SiteLocale(locale): SiteLocale,
    Query(query): Query<EventsQuery>,
) -> Html<String> {
    // Unknown categories fall back to the unfiltered listing
    let selected = query.category.as_deref().and_then(EventCategory::from_code);
    let bundle = state.bundles.bundle(locale);
    Html(pages::events_page(locale, &bundle, selected))
}

async fn contact_page(
    State(state): State<AppState>,
    SiteLocale(locale): SiteLocale,
) -> Html<String> {
    let bundle = state.bundles.bundle(locale);
    Html(pages::contact(locale, &bundle))
}

async fn contact_submit(
    State(state): State<AppState>,
    SiteLocale(locale): SiteLocale,
    Form(form): Form<ContactForm>,
) -> Response {
    let bundle = state.bundles.bundle(locale);

    match form.validate() {
        Ok(submission) => {
            state.contact_sink.deliver(&submission);
            Html(pages::contact_submitted(locale, &bundle)).into_response()
        }
        Err(fields) => {
            warn!("Contact form rejected, invalid fields: {}", fields.join(", "));
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(pages::contact_rejected(locale, &bundle, &fields)),
            )
                .into_response()
        }
    }
}

/// Valid-locale paths that match no page.
async fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Query Preservation Tests ====================

    #[test]
    fn test_with_query_appends_query() {
        assert_eq!(
            with_query("/en/events", Some("category=youth")),
            "/en/events?category=youth"
        );
    }

    #[test]
    fn test_with_query_without_query() {
        assert_eq!(with_query("/en/about", None), "/en/about");
        assert_eq!(with_query("/en/about", Some("")), "/en/about");
    }
}
