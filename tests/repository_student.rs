mod common;

use std::collections::HashSet;
use std::sync::Arc;
use students_api::domain::entities::{NewStudent, StudentPatch};
use students_api::domain::repositories::StudentRepository;
use students_api::error::AppError;

fn new_student(name: &str, email: &str, age: i32) -> NewStudent {
    NewStudent {
        name: name.to_string(),
        email: email.to_string(),
        age,
    }
}

#[tokio::test]
async fn test_create_and_find_by_id() {
    let pool = common::test_pool().await;
    let repo = common::create_test_repository(pool);

    let id = repo
        .create(new_student("Ann", "ann@x.com", 21))
        .await
        .unwrap();

    let student = repo.find_by_id(id).await.unwrap();
    assert_eq!(student.id, id);
    assert_eq!(student.name, "Ann");
    assert_eq!(student.email, "ann@x.com");
    assert_eq!(student.age, 21);
}

#[tokio::test]
async fn test_create_assigns_unique_ids() {
    let pool = common::test_pool().await;
    let repo = common::create_test_repository(pool);

    let mut ids = HashSet::new();
    for i in 0..5 {
        let id = repo
            .create(new_student(&format!("S{i}"), &format!("s{i}@x.com"), 18 + i))
            .await
            .unwrap();
        assert!(ids.insert(id), "duplicate id {id}");
    }
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let pool = common::test_pool().await;
    let repo = common::create_test_repository(pool);

    let result = repo.find_by_id(404).await;

    assert!(matches!(result, Err(AppError::NotFound { id: 404 })));
}

#[tokio::test]
async fn test_list_empty() {
    let pool = common::test_pool().await;
    let repo = common::create_test_repository(pool);

    let students = repo.list().await.unwrap();

    assert!(students.is_empty());
}

#[tokio::test]
async fn test_list_returns_every_created_student() {
    let pool = common::test_pool().await;
    let repo = common::create_test_repository(pool);

    let mut created = HashSet::new();
    for i in 0..3 {
        let id = repo
            .create(new_student(&format!("S{i}"), &format!("s{i}@x.com"), 20))
            .await
            .unwrap();
        created.insert(id);
    }

    let listed: HashSet<i64> = repo.list().await.unwrap().into_iter().map(|s| s.id).collect();

    assert_eq!(listed, created);
}

#[tokio::test]
async fn test_delete_never_created_returns_zero() {
    let pool = common::test_pool().await;
    let repo = common::create_test_repository(pool);

    let rows = repo.delete(12345).await.unwrap();

    assert_eq!(rows, 0);
}

#[tokio::test]
async fn test_delete_existing_removes_record() {
    let pool = common::test_pool().await;
    let id = common::insert_student(&pool, "Ann", "ann@x.com", 21).await;
    let repo = common::create_test_repository(pool);

    let rows = repo.delete(id).await.unwrap();
    assert_eq!(rows, 1);

    let result = repo.find_by_id(id).await;
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_keeps_zero_value_fields() {
    let pool = common::test_pool().await;
    let id = common::insert_student(&pool, "A", "a@x.com", 20).await;
    let repo = common::create_test_repository(pool);

    let patch = StudentPatch {
        name: Some(String::new()),
        email: Some("b@x.com".to_string()),
        age: Some(0),
    };
    let rows = repo.update(id, patch).await.unwrap();
    assert_eq!(rows, 1);

    let student = repo.find_by_id(id).await.unwrap();
    assert_eq!(student.name, "A");
    assert_eq!(student.email, "b@x.com");
    assert_eq!(student.age, 20);
}

#[tokio::test]
async fn test_update_replaces_provided_fields() {
    let pool = common::test_pool().await;
    let id = common::insert_student(&pool, "A", "a@x.com", 20).await;
    let repo = common::create_test_repository(pool);

    let patch = StudentPatch {
        name: Some("Bea".to_string()),
        email: None,
        age: Some(33),
    };
    repo.update(id, patch).await.unwrap();

    let student = repo.find_by_id(id).await.unwrap();
    assert_eq!(student.name, "Bea");
    assert_eq!(student.email, "a@x.com");
    assert_eq!(student.age, 33);
}

#[tokio::test]
async fn test_update_missing_id_is_not_found_and_writes_nothing() {
    let pool = common::test_pool().await;
    common::insert_student(&pool, "A", "a@x.com", 20).await;
    let repo = common::create_test_repository(pool.clone());

    let patch = StudentPatch {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    let result = repo.update(999, patch).await;

    assert!(matches!(result, Err(AppError::NotFound { id: 999 })));
    assert_eq!(common::count_students(&pool).await, 1);

    let untouched = repo.list().await.unwrap();
    assert_eq!(untouched[0].name, "A");
}

#[tokio::test]
async fn test_ping() {
    let pool = common::test_pool().await;
    let repo = common::create_test_repository(pool);

    assert!(repo.ping().await.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_on_shared_pool_all_succeed() {
    let (_dir, pool) = common::file_pool(5).await;

    let mut ids = Vec::new();
    for i in 0..20 {
        ids.push(common::insert_student(&pool, &format!("S{i}"), &format!("s{i}@x.com"), 20).await);
    }
    let repo = Arc::new(common::create_test_repository(pool.clone()));

    let mut tasks = Vec::new();
    for n in 0..100 {
        let repo = repo.clone();
        let id = ids[n % ids.len()];
        tasks.push(tokio::spawn(async move {
            let patch = StudentPatch {
                age: Some(21 + n as i32),
                ..Default::default()
            };
            repo.update(id, patch).await
        }));
    }

    let mut failures = Vec::new();
    for task in tasks {
        if let Err(e) = task.await.unwrap() {
            failures.push(e.to_string());
        }
    }
    assert!(failures.is_empty(), "failed updates: {failures:?}");

    for student in repo.list().await.unwrap() {
        assert!(student.age > 20, "student {} was never updated", student.id);
        assert_eq!(student.email, format!("{}@x.com", student.name.to_lowercase()));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_on_one_record_keep_every_field() {
    let (_dir, pool) = common::file_pool(5).await;
    let id = common::insert_student(&pool, "A", "a@x.com", 20).await;
    let repo = Arc::new(common::create_test_repository(pool));

    let rename = {
        let repo = repo.clone();
        tokio::spawn(async move {
            let patch = StudentPatch {
                name: Some("Bea".to_string()),
                ..Default::default()
            };
            repo.update(id, patch).await
        })
    };
    let reage = {
        let repo = repo.clone();
        tokio::spawn(async move {
            let patch = StudentPatch {
                age: Some(40),
                ..Default::default()
            };
            repo.update(id, patch).await
        })
    };

    assert_eq!(rename.await.unwrap().unwrap(), 1);
    assert_eq!(reage.await.unwrap().unwrap(), 1);

    let student = repo.find_by_id(id).await.unwrap();
    assert_eq!(student.name, "Bea");
    assert_eq!(student.age, 40);
    assert_eq!(student.email, "a@x.com");
}
