use super::*;
use crate::util::class_list::ClassSet;

fn page() -> (ClassSet, ClassSet) {
    (ClassSet::default(), ClassSet::new(&["fas", MOON_ICON_CLASS]))
}

#[test]
fn default_mode_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
    let (body, icon) = page();
    assert_eq!(ThemeController::new(&body, &icon).mode(), ThemeMode::Light);
}

#[test]
fn toggle_switches_body_class_and_icon() {
    let (body, icon) = page();
    let controller = ThemeController::new(&body, &icon);

    assert_eq!(controller.toggle(), ThemeMode::Dark);
    assert!(body.contains(DARK_THEME_CLASS));
    assert!(icon.contains(SUN_ICON_CLASS));
    assert!(!icon.contains(MOON_ICON_CLASS));
    assert!(icon.contains("fas"));
}

#[test]
fn toggling_twice_restores_original_classes() {
    let (body, icon) = page();
    let body_before = body.classes();
    let icon_before = icon.classes();
    let controller = ThemeController::new(&body, &icon);

    controller.toggle();
    controller.toggle();

    assert_eq!(controller.mode(), ThemeMode::Light);
    assert_eq!(body.classes(), body_before);
    assert_eq!(icon.classes(), icon_before);
}

#[test]
fn attach_repairs_icon_for_current_mode() {
    let body = ClassSet::new(&[DARK_THEME_CLASS]);
    let icon = ClassSet::new(&["fas", MOON_ICON_CLASS]);
    let controller = ThemeController::attach(&body, &icon);
    assert_eq!(controller.mode(), ThemeMode::Dark);
    assert_eq!(icon.classes(), vec!["fa-sun".to_owned(), "fas".to_owned()]);
}

#[test]
fn icon_is_complement_of_mode() {
    assert_eq!(ThemeMode::Light.icon_class(), MOON_ICON_CLASS);
    assert_eq!(ThemeMode::Dark.icon_class(), SUN_ICON_CLASS);
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
}
