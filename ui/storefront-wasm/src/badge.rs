//! Cart badge on `.navbar__link[href="/cart"]` links, and the page host the
//! cart controller reloads through.

use sf_interactions::badge::{BADGE_CLASS, BadgeSlot, CART_LINK_SELECTOR, set_cart_badge};
use sf_interactions::cart::PageHost;
use web_sys::Element;

use crate::dom;

struct NavLink(Element);

impl BadgeSlot for NavLink {
    fn clear_badges(&self) {
        for badge in dom::query_all_within(&self.0, &format!(".{BADGE_CLASS}")) {
            badge.remove();
        }
    }

    fn append_badge(&self, count: u32) {
        let Some(badge) = dom::create_element("span") else {
            return;
        };
        badge.set_class_name(BADGE_CLASS);
        dom::set_text(&badge, &count.to_string());
        let _ = self.0.append_child(&badge);
    }
}

pub fn update_cart_badge(count: u32) {
    let links: Vec<NavLink> = dom::query_all(CART_LINK_SELECTOR)
        .into_iter()
        .map(NavLink)
        .collect();
    set_cart_badge(&links, count);
}

pub struct DomPage;

impl PageHost for DomPage {
    fn reload(&self) {
        let _ = dom::window().location().reload();
    }

    fn set_cart_badge(&self, count: u32) {
        update_cart_badge(count);
    }
}
