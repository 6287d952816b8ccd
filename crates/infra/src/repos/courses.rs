use crate::models::CourseRow;
use crate::store::Store;

#[derive(Debug, Clone)]
pub struct CreateCourseData {
    pub title: String,
    pub code: String,
    pub credits: i32,
    pub instructor: String,
}

/// Partial update: `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseData {
    pub title: Option<String>,
    pub code: Option<String>,
    pub credits: Option<i32>,
    pub instructor: Option<String>,
}

pub struct CourseRepo {
    store: Store,
}

impl CourseRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<CourseRow> {
        self.store.read().courses.clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<CourseRow> {
        self.store
            .read()
            .courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn create(&self, data: CreateCourseData) -> CourseRow {
        let mut inner = self.store.write();
        let row = CourseRow {
            id: inner.mint_course_id(),
            title: data.title,
            code: data.code,
            credits: data.credits,
            instructor: data.instructor,
        };
        inner.courses.push(row.clone());
        row
    }

    pub fn update(&self, id: &str, data: UpdateCourseData) -> Option<CourseRow> {
        let mut inner = self.store.write();
        let row = inner.courses.iter_mut().find(|c| c.id == id)?;
        if let Some(title) = data.title {
            row.title = title;
        }
        if let Some(code) = data.code {
            row.code = code;
        }
        if let Some(credits) = data.credits {
            row.credits = credits;
        }
        if let Some(instructor) = data.instructor {
            row.instructor = instructor;
        }
        Some(row.clone())
    }

    /// Remove the course and scrub its id from every student's enrollment
    /// list, so no dangling reference survives. Reports whether a record
    /// was actually removed.
    pub fn delete(&self, id: &str) -> bool {
        let mut inner = self.store.write();
        let before = inner.courses.len();
        inner.courses.retain(|c| c.id != id);
        let removed = inner.courses.len() < before;
        if removed {
            for enrolled in inner.enrollments.values_mut() {
                enrolled.retain(|course_id| course_id.as_str() != id);
            }
        }
        removed
    }
}
