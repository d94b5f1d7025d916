use mtd_core::{Description, Task, Title, ValidationError};

fn title(value: &str) -> Title {
    Title::new(value).unwrap()
}

fn description(value: &str) -> Description {
    Description::new(value).unwrap()
}

#[test]
fn new_with_explicit_id_derives_the_slug_once() {
    let task = Task::new(title("Buy milk"), description("2%"), false, Some("1")).unwrap();

    assert_eq!(task.slug().as_str(), "1-buy-milk");
    assert_eq!(task.id(), "1");
    assert_eq!(task.title().as_str(), "Buy milk");
    assert_eq!(task.description().as_str(), "2%");
    assert!(!task.is_done());
}

#[test]
fn new_without_id_generates_a_numeric_fallback() {
    let task = Task::new(title("Untracked"), description(""), false, None).unwrap();

    assert!(
        task.id().parse::<u64>().is_ok(),
        "generated id `{}` should be numeric",
        task.id()
    );
    assert!(task.slug().as_str().ends_with("-untracked"));
}

#[test]
fn new_rejects_an_explicitly_empty_id() {
    let err = Task::new(title("Nameless"), description(""), false, Some("")).unwrap_err();
    assert_eq!(err, ValidationError::EmptyId);
}

#[test]
fn set_as_done_is_idempotent() {
    let mut task = Task::new(title("Repeat"), description(""), false, Some("4")).unwrap();

    task.set_as_done();
    assert!(task.is_done());
    task.set_as_done();
    assert!(task.is_done());
}

#[test]
fn set_as_undone_is_idempotent() {
    let mut task = Task::new(title("Repeat"), description(""), true, Some("4")).unwrap();

    task.set_as_undone();
    assert!(!task.is_done());
    task.set_as_undone();
    assert!(!task.is_done());
}

#[test]
fn identity_is_the_slug() {
    let a = Task::new(title("Same task"), description("left"), false, Some("8")).unwrap();
    let b = Task::new(title("Same task"), description("left"), false, Some("8")).unwrap();
    assert_eq!(a.slug(), b.slug());
}

#[test]
fn title_validation_bounds() {
    assert_eq!(Title::new("   ").unwrap_err(), ValidationError::EmptyTitle);
    assert!(Title::new("x".repeat(100)).is_ok());
    assert!(matches!(
        Title::new("x".repeat(101)).unwrap_err(),
        ValidationError::TitleTooLong { length: 101 }
    ));
    assert_eq!(Title::new("  padded  ").unwrap().as_str(), "padded");
}

#[test]
fn description_validation_bounds() {
    assert_eq!(Description::new("").unwrap().as_str(), "");
    assert_eq!(Description::new("   ").unwrap().as_str(), "");
    assert!(Description::new("x".repeat(1000)).is_ok());
    assert!(matches!(
        Description::new("x".repeat(1001)).unwrap_err(),
        ValidationError::DescriptionTooLong { length: 1001 }
    ));
}

#[test]
fn description_preserves_internal_whitespace() {
    let text = "line one\n\n  indented line\nline three";
    assert_eq!(Description::new(text).unwrap().as_str(), text);
}
