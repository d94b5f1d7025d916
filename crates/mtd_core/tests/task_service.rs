use mtd_core::{
    CreateTaskRequest, FsTaskRepository, TaskService, TaskServiceError, ValidationError,
};
use tempfile::TempDir;

fn service(dir: &TempDir) -> TaskService<FsTaskRepository> {
    TaskService::new(FsTaskRepository::new(dir.path()))
}

fn request(title: &str, description: &str) -> CreateTaskRequest {
    CreateTaskRequest {
        title: title.to_string(),
        description: description.to_string(),
        id: None,
    }
}

fn request_with_id(title: &str, id: &str) -> CreateTaskRequest {
    CreateTaskRequest {
        title: title.to_string(),
        description: String::new(),
        id: Some(id.to_string()),
    }
}

#[test]
fn create_assigns_id_one_in_an_empty_project() {
    let dir = TempDir::new().unwrap();
    let created = service(&dir).create_task(request("Buy milk", "2%")).unwrap();

    assert_eq!(created.slug, "1-buy-milk");
    assert_eq!(created.title, "Buy milk");
    assert_eq!(created.description, "2%");
    assert!(!created.is_done);
}

#[test]
fn create_assigns_one_past_the_maximum_numeric_id() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    for id in ["5", "10", "3"] {
        service.create_task(request_with_id("Seeded", id)).unwrap();
    }

    let created = service.create_task(request("Next up", "")).unwrap();
    assert_eq!(created.slug, "11-next-up");
}

#[test]
fn create_ignores_non_numeric_ids_when_assigning() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    service
        .create_task(request_with_id("Imported", "imported"))
        .unwrap();

    let created = service.create_task(request("Fresh", "")).unwrap();
    assert_eq!(created.slug, "1-fresh");
}

#[test]
fn create_honors_an_explicit_id() {
    let dir = TempDir::new().unwrap();
    let created = service(&dir)
        .create_task(request_with_id("Pinned", "123"))
        .unwrap();

    assert_eq!(created.slug, "123-pinned");
}

#[test]
fn create_surfaces_title_validation_failures() {
    let dir = TempDir::new().unwrap();
    let err = service(&dir).create_task(request("   ", "")).unwrap_err();

    assert!(matches!(
        err,
        TaskServiceError::Validation(ValidationError::EmptyTitle)
    ));
}

#[test]
fn get_returns_the_stored_record_or_none() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    service.create_task(request("Find me", "here")).unwrap();

    let found = service.get_task("1-find-me").unwrap().unwrap();
    assert_eq!(found.title, "Find me");
    assert_eq!(found.description, "here");

    assert!(service.get_task("2-no-such-task").unwrap().is_none());
}

#[test]
fn get_rejects_a_malformed_slug() {
    let dir = TempDir::new().unwrap();
    let err = service(&dir).get_task("Not A Slug").unwrap_err();
    assert!(matches!(err, TaskServiceError::Validation(_)));
}

#[test]
fn list_returns_every_stored_task() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    service.create_task(request("First", "")).unwrap();
    service.create_task(request("Second", "")).unwrap();

    let mut slugs: Vec<String> = service
        .list_tasks()
        .unwrap()
        .into_iter()
        .map(|record| record.slug)
        .collect();
    slugs.sort();
    assert_eq!(slugs, ["1-first", "2-second"]);
}

#[test]
fn set_done_persists_across_service_instances() {
    let dir = TempDir::new().unwrap();
    {
        let service = service(&dir);
        service.create_task(request("Buy milk", "2%")).unwrap();
        let updated = service.set_task_done("1-buy-milk").unwrap();
        assert!(updated.is_done);
    }

    let reloaded = service(&dir).get_task("1-buy-milk").unwrap().unwrap();
    assert!(reloaded.is_done);
}

#[test]
fn set_undone_reverts_a_done_task() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    service.create_task(request("Toggle", "")).unwrap();
    service.set_task_done("1-toggle").unwrap();

    let updated = service.set_task_undone("1-toggle").unwrap();
    assert!(!updated.is_done);
}

#[test]
fn mutations_on_a_missing_task_report_not_found() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    for result in [
        service.set_task_done("1-missing"),
        service.set_task_undone("1-missing"),
        service.delete_task("1-missing"),
    ] {
        assert!(matches!(
            result.unwrap_err(),
            TaskServiceError::TaskNotFound(slug) if slug == "1-missing"
        ));
    }
}

#[test]
fn delete_returns_the_last_state_and_removes_the_record() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);
    service.create_task(request("Goner", "bye")).unwrap();

    let deleted = service.delete_task("1-goner").unwrap();
    assert_eq!(deleted.title, "Goner");
    assert!(service.get_task("1-goner").unwrap().is_none());
}

#[test]
fn end_to_end_scenario_create_done_delete() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir);

    let created = service.create_task(request("Buy milk", "2%")).unwrap();
    assert_eq!(created.slug, "1-buy-milk");
    let on_disk = dir.path().join("1-buy-milk.md");
    let text = std::fs::read_to_string(&on_disk).unwrap();
    assert!(text.contains("title: \"Buy milk\""));
    assert!(text.contains("is_done: false"));
    assert!(text.contains("2%"));

    service.set_task_done("1-buy-milk").unwrap();
    let text = std::fs::read_to_string(&on_disk).unwrap();
    assert!(text.contains("is_done: true"));

    service.delete_task("1-buy-milk").unwrap();
    assert!(!on_disk.exists());
    assert!(service.get_task("1-buy-milk").unwrap().is_none());
}
