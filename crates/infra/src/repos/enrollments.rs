use crate::models::{CourseRow, StudentRow};
use crate::store::Store;

/// Reads and mutations over the student -> course-id enrollment map. The
/// map itself is never exposed; callers only see joined rows.
pub struct EnrollmentRepo {
    store: Store,
}

impl EnrollmentRepo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Add a course to a student's enrollment list. Both the student and
    /// the course must exist; enrolling twice is a no-op. Returns the
    /// student row, or `None` when either reference is unknown.
    pub fn enroll(&self, student_id: &str, course_id: &str) -> Option<StudentRow> {
        let mut inner = self.store.write();
        let student = inner
            .students
            .iter()
            .find(|s| s.id == student_id)
            .cloned()?;
        if !inner.courses.iter().any(|c| c.id == course_id) {
            return None;
        }
        let enrolled = inner.enrollments.entry(student_id.to_owned()).or_default();
        if !enrolled.iter().any(|c| c.as_str() == course_id) {
            enrolled.push(course_id.to_owned());
        }
        Some(student)
    }

    /// Remove a course from a student's enrollment list. Requires the
    /// student and an enrollment entry for it; removing a course id that
    /// was never enrolled is a silent no-op. Returns the student row.
    pub fn unenroll(&self, student_id: &str, course_id: &str) -> Option<StudentRow> {
        let mut inner = self.store.write();
        let student = inner
            .students
            .iter()
            .find(|s| s.id == student_id)
            .cloned()?;
        let enrolled = inner.enrollments.get_mut(student_id)?;
        enrolled.retain(|c| c.as_str() != course_id);
        Some(student)
    }

    /// The courses a student is enrolled in, in catalog order (not
    /// enrollment order). Empty when the student has no entry.
    pub fn courses_for_student(&self, student_id: &str) -> Vec<CourseRow> {
        let inner = self.store.read();
        let Some(enrolled) = inner.enrollments.get(student_id) else {
            return Vec::new();
        };
        inner
            .courses
            .iter()
            .filter(|c| enrolled.contains(&c.id))
            .cloned()
            .collect()
    }

    /// Every student whose enrollment list contains the course, in student
    /// insertion order.
    pub fn students_in_course(&self, course_id: &str) -> Vec<StudentRow> {
        let inner = self.store.read();
        inner
            .students
            .iter()
            .filter(|s| {
                inner
                    .enrollments
                    .get(&s.id)
                    .is_some_and(|e| e.iter().any(|c| c.as_str() == course_id))
            })
            .cloned()
            .collect()
    }
}
