use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{CourseRow, StudentRow};

/// Everything the service knows, guarded by one lock: the two entity
/// sequences (insertion order is the listing order), the student -> course-id
/// enrollment map, and the id counters.
///
/// Id counters are monotonic and never derived from collection length, so a
/// deleted record's id is never handed out again.
#[derive(Default)]
pub(crate) struct StoreInner {
    pub(crate) students: Vec<StudentRow>,
    pub(crate) courses: Vec<CourseRow>,
    pub(crate) enrollments: HashMap<String, Vec<String>>,
    next_student_id: u64,
    next_course_id: u64,
}

impl StoreInner {
    pub(crate) fn mint_student_id(&mut self) -> String {
        self.next_student_id += 1;
        self.next_student_id.to_string()
    }

    pub(crate) fn mint_course_id(&mut self) -> String {
        self.next_course_id += 1;
        self.next_course_id.to_string()
    }
}

/// Cheaply clonable handle to the in-memory registry. Constructed once in
/// `main` (or per test) and threaded through `AppState`; repos clone the
/// handle and take the lock per operation.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    /// Empty registry with counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo dataset: two students, two courses, Ahmed enrolled in both
    /// courses and Sara in Database Systems.
    pub fn seeded() -> Self {
        let store = Store::new();
        {
            let mut inner = store.inner.write();

            let ahmed = StudentRow {
                id: inner.mint_student_id(),
                name: "Ahmed Hassan".to_owned(),
                email: "ahmed.hassan@university.edu".to_owned(),
                age: 21,
                major: Some("Computer Science".to_owned()),
            };
            let sara = StudentRow {
                id: inner.mint_student_id(),
                name: "Sara Ibrahim".to_owned(),
                email: "sara.ibrahim@university.edu".to_owned(),
                age: 22,
                major: Some("Information Systems".to_owned()),
            };

            let data_structures = CourseRow {
                id: inner.mint_course_id(),
                title: "Data Structures".to_owned(),
                code: "CS201".to_owned(),
                credits: 3,
                instructor: "Dr. Omar Khalil".to_owned(),
            };
            let database_systems = CourseRow {
                id: inner.mint_course_id(),
                title: "Database Systems".to_owned(),
                code: "CS305".to_owned(),
                credits: 4,
                instructor: "Dr. Lina Farouk".to_owned(),
            };

            inner.enrollments.insert(
                ahmed.id.clone(),
                vec![data_structures.id.clone(), database_systems.id.clone()],
            );
            inner
                .enrollments
                .insert(sara.id.clone(), vec![database_systems.id.clone()]);

            inner.students.push(ahmed);
            inner.students.push(sara);
            inner.courses.push(data_structures);
            inner.courses.push(database_systems);
        }
        store
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write()
    }
}
