use super::*;

#[test]
fn class_set_add_remove_contains() {
    let set = ClassSet::new(&["fas"]);
    assert!(set.contains("fas"));
    set.add("fa-moon");
    assert!(set.contains("fa-moon"));
    set.remove("fas");
    assert!(!set.contains("fas"));
    assert_eq!(set.classes(), vec!["fa-moon".to_owned()]);
}

#[test]
fn default_toggle_flips_and_reports_presence() {
    let set = ClassSet::default();
    assert!(set.toggle("dark-theme"));
    assert!(set.contains("dark-theme"));
    assert!(!set.toggle("dark-theme"));
    assert!(set.classes().is_empty());
}

#[test]
fn reference_forwards_to_target() {
    let set = ClassSet::default();
    let by_ref = &set;
    by_ref.add("hidden");
    assert!(set.contains("hidden"));
    assert!(!ClassList::toggle(&by_ref, "hidden"));
    assert!(!set.contains("hidden"));
}
