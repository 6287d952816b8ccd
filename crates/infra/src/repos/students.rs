use crate::models::StudentRow;
use crate::store::Store;

#[derive(Debug, Clone)]
pub struct CreateStudentData {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub major: Option<String>,
}

/// Partial update: `None` leaves the stored value untouched. Clearing a
/// field back to null is not expressible through this struct.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub major: Option<String>,
}

pub struct StudentRepo {
    store: Store,
}

impl StudentRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<StudentRow> {
        self.store.read().students.clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<StudentRow> {
        self.store
            .read()
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    /// Create a new student with a freshly minted id and an empty
    /// enrollment entry. No duplicate or format validation.
    pub fn create(&self, data: CreateStudentData) -> StudentRow {
        let mut inner = self.store.write();
        let row = StudentRow {
            id: inner.mint_student_id(),
            name: data.name,
            email: data.email,
            age: data.age,
            major: data.major,
        };
        inner.enrollments.insert(row.id.clone(), Vec::new());
        inner.students.push(row.clone());
        row
    }

    /// Apply the provided fields to an existing student, returning the
    /// updated row, or `None` when the id is unknown.
    pub fn update(&self, id: &str, data: UpdateStudentData) -> Option<StudentRow> {
        let mut inner = self.store.write();
        let row = inner.students.iter_mut().find(|s| s.id == id)?;
        if let Some(name) = data.name {
            row.name = name;
        }
        if let Some(email) = data.email {
            row.email = email;
        }
        if let Some(age) = data.age {
            row.age = age;
        }
        if let Some(major) = data.major {
            row.major = Some(major);
        }
        Some(row.clone())
    }

    /// Remove the student and its enrollment entry. Reports whether a
    /// record was actually removed.
    pub fn delete(&self, id: &str) -> bool {
        let mut inner = self.store.write();
        let before = inner.students.len();
        inner.students.retain(|s| s.id != id);
        let removed = inner.students.len() < before;
        if removed {
            inner.enrollments.remove(id);
        }
        removed
    }

    /// Case-insensitive substring match on `major`. Students without a
    /// major never match.
    pub fn search_by_major(&self, major: &str) -> Vec<StudentRow> {
        let needle = major.to_lowercase();
        self.store
            .read()
            .students
            .iter()
            .filter(|s| {
                s.major
                    .as_ref()
                    .is_some_and(|m| m.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}
