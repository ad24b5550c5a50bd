//! Light/dark theme toggle.
//!
//! The mode lives only in the `dark-theme` class on `<body>`; there is no
//! stored preference, so every page load starts light. The toggle icon always
//! shows the mode you would switch to: a moon while light, a sun while dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::class_list::ClassList;

pub const DARK_THEME_CLASS: &str = "dark-theme";
pub const MOON_ICON_CLASS: &str = "fa-moon";
pub const SUN_ICON_CLASS: &str = "fa-sun";

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class shown while in this mode.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON_CLASS,
            Self::Dark => SUN_ICON_CLASS,
        }
    }
}

/// Flips the body theme class and keeps the icon in sync.
pub struct ThemeController<B, I> {
    body: B,
    icon: I,
}

impl<B: ClassList, I: ClassList> ThemeController<B, I> {
    pub fn new(body: B, icon: I) -> Self {
        Self { body, icon }
    }

    /// Build a controller and bring the icon in line with the current mode.
    pub fn attach(body: B, icon: I) -> Self {
        let controller = Self::new(body, icon);
        controller.sync_icon();
        controller
    }

    pub fn mode(&self) -> ThemeMode {
        if self.body.contains(DARK_THEME_CLASS) { ThemeMode::Dark } else { ThemeMode::Light }
    }

    /// Handle one click on the theme button. Returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        self.body.toggle(DARK_THEME_CLASS);
        self.sync_icon();
        self.mode()
    }

    fn sync_icon(&self) {
        let mode = self.mode();
        self.icon.remove(mode.toggled().icon_class());
        self.icon.add(mode.icon_class());
    }
}
