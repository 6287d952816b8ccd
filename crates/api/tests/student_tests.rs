mod common;

use api::gql::build_schema;
use async_graphql::Variables;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_get_all_students_returns_seed_records() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let query = r#"
        query {
            getAllStudents {
                id
                name
                email
                age
                major
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;

    assert!(
        response.errors.is_empty(),
        "getAllStudents should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    let students = data["getAllStudents"].as_array().unwrap();

    assert_eq!(students.len(), 2);
    assert_eq!(students[0]["id"], "1");
    assert_eq!(students[0]["name"], "Ahmed Hassan");
    assert_eq!(students[1]["id"], "2");
    assert_eq!(students[1]["major"], "Information Systems");
}

#[tokio::test]
async fn test_add_student_appears_in_listing() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let mutation = r#"
        mutation AddStudent($name: String!, $email: String!, $age: Int!, $major: String) {
            addStudent(name: $name, email: $email, age: $age, major: $major) {
                id
                name
                email
                age
                major
            }
        }
    "#;

    let variables = Variables::from_json(json!({
        "name": "Karim Adel",
        "email": "karim.adel@university.edu",
        "age": 20,
        "major": "Software Engineering"
    }));

    let response = execute_graphql(&schema, mutation, Some(variables)).await;

    assert!(
        response.errors.is_empty(),
        "addStudent should succeed: {:?}",
        response.errors
    );

    let data = response.data.into_json().unwrap();
    let student = &data["addStudent"];
    let new_id = student["id"].as_str().unwrap().to_owned();

    assert!(!new_id.is_empty(), "Returned id must be non-empty");
    assert_eq!(student["name"], "Karim Adel");
    assert_eq!(student["major"], "Software Engineering");

    let listing = execute_graphql(&schema, "query { getAllStudents { id } }", None).await;
    let data = listing.data.into_json().unwrap();
    let ids: Vec<&str> = data["getAllStudents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();

    assert!(ids.contains(&new_id.as_str()));
}

#[tokio::test]
async fn test_add_student_without_major_is_nullable() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let mutation = r#"
        mutation {
            addStudent(name: "Nour Salem", email: "nour.salem@university.edu", age: 19) {
                id
                major
            }
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert!(data["addStudent"]["major"].is_null());
}

#[tokio::test]
async fn test_get_student_unknown_id_is_null() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let response =
        execute_graphql(&schema, r#"query { getStudent(id: "99") { id } }"#, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert!(data["getStudent"].is_null());
}

#[tokio::test]
async fn test_update_student_changes_only_provided_fields() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let mutation = r#"
        mutation {
            updateStudent(id: "1", age: 22) {
                id
                name
                email
                age
                major
            }
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let student = &data["updateStudent"];

    assert_eq!(student["age"], 22);
    // Everything not provided stays byte-for-byte as seeded.
    assert_eq!(student["name"], "Ahmed Hassan");
    assert_eq!(student["email"], "ahmed.hassan@university.edu");
    assert_eq!(student["major"], "Computer Science");
}

#[tokio::test]
async fn test_update_student_unknown_id_is_null() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let mutation = r#"
        mutation {
            updateStudent(id: "99", name: "Ghost") {
                id
            }
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert!(data["updateStudent"].is_null());
}

#[tokio::test]
async fn test_delete_student_removes_record() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let response =
        execute_graphql(&schema, r#"mutation { deleteStudent(id: "2") }"#, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["deleteStudent"], true);

    let lookup = execute_graphql(&schema, r#"query { getStudent(id: "2") { id } }"#, None).await;
    let data = lookup.data.into_json().unwrap();
    assert!(data["getStudent"].is_null());
}

#[tokio::test]
async fn test_delete_student_unknown_id_is_false_and_keeps_listing() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let response =
        execute_graphql(&schema, r#"mutation { deleteStudent(id: "99") }"#, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let data = response.data.into_json().unwrap();
    assert_eq!(data["deleteStudent"], false);

    let listing = execute_graphql(&schema, "query { getAllStudents { id } }", None).await;
    let data = listing.data.into_json().unwrap();
    assert_eq!(data["getAllStudents"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_students_by_major_is_case_insensitive() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let query = r#"
        query {
            searchStudentsByMajor(major: "information") {
                id
                name
                major
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    let students = data["searchStudentsByMajor"].as_array().unwrap();

    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["name"], "Sara Ibrahim");
    assert_eq!(students[0]["major"], "Information Systems");
}

#[tokio::test]
async fn test_search_students_by_major_no_match_is_empty() {
    let state = setup_test_state();
    let schema = build_schema(state);

    let query = r#"
        query {
            searchStudentsByMajor(major: "astrophysics") {
                id
            }
        }
    "#;

    let response = execute_graphql(&schema, query, None).await;

    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json().unwrap();
    assert!(data["searchStudentsByMajor"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_required_argument_is_an_engine_error() {
    let state = setup_test_state();
    let schema = build_schema(state);

    // addStudent requires email; the engine must reject this before any
    // resolver runs.
    let mutation = r#"
        mutation {
            addStudent(name: "Incomplete", age: 20) {
                id
            }
        }
    "#;

    let response = execute_graphql(&schema, mutation, None).await;

    assert!(!response.errors.is_empty());
}
