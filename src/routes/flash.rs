//! One-shot notifications carried across the post/redirect/get cycle.
//!
//! The cookie holds only a [`NotificationKind`] slug; the message shown is
//! always looked up server side.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;

use crate::models::{Notification, NotificationKind};

pub const FLASH_COOKIE: &str = "flash";

/// Cookie announcing `kind` on the next rendered page
pub fn flash_cookie(kind: NotificationKind) -> Cookie<'static> {
    Cookie::build(FLASH_COOKIE, kind.slug())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// Cookie that deletes the flash on the client
pub fn clear_flash_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// Read the pending notification, if the request carries a known one
pub fn read_flash(req: &HttpRequest) -> Option<Notification> {
    let cookie = req.cookie(FLASH_COOKIE)?;
    NotificationKind::from_slug(cookie.value()).map(Notification::from)
}
