//! Class-list seam between controllers and the DOM.
//!
//! Controllers mutate CSS classes through [`ClassList`] so they can be built
//! against a live `DomTokenList` in the browser and an in-memory [`ClassSet`]
//! everywhere else.

#[cfg(test)]
#[path = "class_list_test.rs"]
mod class_list_test;

use std::cell::RefCell;
use std::collections::BTreeSet;

/// Minimal view of an element's class list.
pub trait ClassList {
    fn contains(&self, class: &str) -> bool;
    fn add(&self, class: &str);
    fn remove(&self, class: &str);

    /// Flip `class` and return whether it is now present.
    fn toggle(&self, class: &str) -> bool {
        if self.contains(class) {
            self.remove(class);
            false
        } else {
            self.add(class);
            true
        }
    }
}

impl<T: ClassList + ?Sized> ClassList for &T {
    fn contains(&self, class: &str) -> bool {
        (**self).contains(class)
    }

    fn add(&self, class: &str) {
        (**self).add(class);
    }

    fn remove(&self, class: &str) {
        (**self).remove(class);
    }

    fn toggle(&self, class: &str) -> bool {
        (**self).toggle(class)
    }
}

#[cfg(feature = "hydrate")]
impl ClassList for web_sys::DomTokenList {
    fn contains(&self, class: &str) -> bool {
        web_sys::DomTokenList::contains(self, class)
    }

    fn add(&self, class: &str) {
        let _ = self.add_1(class);
    }

    fn remove(&self, class: &str) {
        let _ = self.remove_1(class);
    }

    fn toggle(&self, class: &str) -> bool {
        web_sys::DomTokenList::toggle(self, class).unwrap_or_else(|_| self.contains(class))
    }
}

/// In-memory class list for hosts without a document.
#[derive(Debug, Default)]
pub struct ClassSet {
    classes: RefCell<BTreeSet<String>>,
}

impl ClassSet {
    #[must_use]
    pub fn new(classes: &[&str]) -> Self {
        Self { classes: RefCell::new(classes.iter().map(|c| (*c).to_owned()).collect()) }
    }

    /// Current classes in sorted order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ClassList for ClassSet {
    fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }

    fn remove(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }
}
