//! Reads over elements, collections and the browser, as described queries.

use crate::driver::{Browser, Collection, Element};
use vigil_engine::Query;

pub fn present<E: Element + ?Sized + 'static>() -> Query<E, bool> {
    Query::new("present", |el: &E| Box::pin(async move { Ok(el.is_present().await?) }))
}

pub fn visible<E: Element + ?Sized + 'static>() -> Query<E, bool> {
    Query::new("visible", |el: &E| Box::pin(async move { Ok(el.is_displayed().await?) }))
}

pub fn enabled<E: Element + ?Sized + 'static>() -> Query<E, bool> {
    Query::new("enabled", |el: &E| Box::pin(async move { Ok(el.is_enabled().await?) }))
}

pub fn focused<E: Element + ?Sized + 'static>() -> Query<E, bool> {
    Query::new("focused", |el: &E| Box::pin(async move { Ok(el.is_focused().await?) }))
}

pub fn text<E: Element + ?Sized + 'static>() -> Query<E, String> {
    Query::new("text", |el: &E| Box::pin(async move { Ok(el.text().await?) }))
}

pub fn value<E: Element + ?Sized + 'static>() -> Query<E, String> {
    Query::new("value", |el: &E| Box::pin(async move { Ok(el.value().await?) }))
}

/// The attribute's value; `None` when the element has no such attribute.
pub fn attribute<E: Element + ?Sized + 'static>(name: &str) -> Query<E, Option<String>> {
    let name = name.to_string();
    Query::new(format!("attribute {}", name), move |el: &E| {
        let name = name.clone();
        Box::pin(async move { Ok(el.attribute(&name).await?) })
    })
}

pub fn size<C: Collection + ?Sized + 'static>() -> Query<C, usize> {
    Query::new("size", |c: &C| Box::pin(async move { Ok(c.size().await?) }))
}

pub fn texts<C: Collection + ?Sized + 'static>() -> Query<C, Vec<String>> {
    Query::new("texts", |c: &C| Box::pin(async move { Ok(c.texts().await?) }))
}

pub fn url<B: Browser + ?Sized + 'static>() -> Query<B, String> {
    Query::new("url", |b: &B| Box::pin(async move { Ok(b.url().await?) }))
}

pub fn title<B: Browser + ?Sized + 'static>() -> Query<B, String> {
    Query::new("title", |b: &B| Box::pin(async move { Ok(b.title().await?) }))
}

pub fn tabs_number<B: Browser + ?Sized + 'static>() -> Query<B, usize> {
    Query::new("tabs number", |b: &B| Box::pin(async move { Ok(b.tab_count().await?) }))
}

/// Result of running `script` in the page.
pub fn js_returned<B: Browser + ?Sized + 'static>(script: &str) -> Query<B, serde_json::Value> {
    let script = script.to_string();
    Query::new(format!("script result of `{}`", script), move |b: &B| {
        let script = script.clone();
        Box::pin(async move { Ok(b.execute_script(&script).await?) })
    })
}
