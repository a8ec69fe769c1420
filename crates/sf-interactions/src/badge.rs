//! Cart count badge on the navigation links.

pub const CART_LINK_SELECTOR: &str = ".navbar__link[href=\"/cart\"]";
pub const BADGE_CLASS: &str = "cart-badge";

/// One navigation link that can carry a badge.
pub trait BadgeSlot {
    /// Remove every badge currently attached.
    fn clear_badges(&self);
    fn append_badge(&self, count: u32);
}

/// Count from an untyped number handed over by page scripts. NaN, infinities
/// and anything not above zero mean no badge.
pub fn badge_count(raw: f64) -> u32 {
    if raw.is_finite() && raw > 0.0 {
        // Saturating: huge values clamp to u32::MAX.
        raw as u32
    } else {
        0
    }
}

/// Leaves exactly one badge per link for a positive count, none otherwise.
pub fn set_cart_badge<S: BadgeSlot>(links: &[S], count: u32) {
    for link in links {
        link.clear_badges();
        if count > 0 {
            link.append_badge(count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeLink {
        badges: RefCell<Vec<u32>>,
    }

    impl BadgeSlot for FakeLink {
        fn clear_badges(&self) {
            self.badges.borrow_mut().clear();
        }

        fn append_badge(&self, count: u32) {
            self.badges.borrow_mut().push(count);
        }
    }

    #[test]
    fn one_badge_per_link_whatever_came_before() {
        let links = [FakeLink::default(), FakeLink::default()];
        links[0].badges.borrow_mut().extend([7, 9]);

        for _ in 0..3 {
            set_cart_badge(&links, 4);
            for link in &links {
                assert_eq!(*link.badges.borrow(), vec![4]);
            }
        }
    }

    #[test]
    fn zero_removes_badges() {
        let links = [FakeLink::default()];
        set_cart_badge(&links, 2);
        set_cart_badge(&links, 0);
        assert!(links[0].badges.borrow().is_empty());
        set_cart_badge(&links, 0);
        assert!(links[0].badges.borrow().is_empty());
    }

    #[test]
    fn script_counts_below_one_show_no_badge() {
        assert_eq!(badge_count(3.0), 3);
        assert_eq!(badge_count(-1.0), 0);
        assert_eq!(badge_count(0.0), 0);
        assert_eq!(badge_count(f64::NAN), 0);
        assert_eq!(badge_count(f64::INFINITY), 0);

        let links = [FakeLink::default()];
        set_cart_badge(&links, badge_count(-1.0));
        assert!(links[0].badges.borrow().is_empty());
    }
}
