use async_graphql::{Context, Object, Result, ID};

use crate::gql::types::{Course, Student};
use crate::state::AppState;
use infra::repos::{
    CourseRepo, CreateCourseData, CreateStudentData, EnrollmentRepo, StudentRepo,
    UpdateCourseData, UpdateStudentData,
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a student. No validation beyond argument types; the new
    /// student starts with no enrollments.
    async fn add_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        age: i32,
        major: Option<String>,
    ) -> Result<Student> {
        let state = ctx.data::<AppState>()?;
        let repo = StudentRepo::new(state.store.clone());
        let row = repo.create(CreateStudentData {
            name,
            email,
            age,
            major,
        });
        tracing::info!(student_id = %row.id, "created student");
        Ok(row.into())
    }

    /// Update the provided fields of a student, leaving the rest as they
    /// were. Null when the id is unknown.
    async fn update_student(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        email: Option<String>,
        age: Option<i32>,
        major: Option<String>,
    ) -> Result<Option<Student>> {
        let state = ctx.data::<AppState>()?;
        let repo = StudentRepo::new(state.store.clone());
        let updated = repo.update(
            id.as_str(),
            UpdateStudentData {
                name,
                email,
                age,
                major,
            },
        );
        Ok(updated.map(Student::from))
    }

    /// Delete a student and its enrollments. False when nothing was removed.
    async fn delete_student(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let repo = StudentRepo::new(state.store.clone());
        let removed = repo.delete(id.as_str());
        if removed {
            tracing::info!(student_id = %id.as_str(), "deleted student");
        }
        Ok(removed)
    }

    /// Create a course. Always succeeds.
    async fn add_course(
        &self,
        ctx: &Context<'_>,
        title: String,
        code: String,
        credits: i32,
        instructor: String,
    ) -> Result<Course> {
        let state = ctx.data::<AppState>()?;
        let repo = CourseRepo::new(state.store.clone());
        let row = repo.create(CreateCourseData {
            title,
            code,
            credits,
            instructor,
        });
        tracing::info!(course_id = %row.id, "created course");
        Ok(row.into())
    }

    /// Update the provided fields of a course. Null when the id is unknown.
    async fn update_course(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        code: Option<String>,
        credits: Option<i32>,
        instructor: Option<String>,
    ) -> Result<Option<Course>> {
        let state = ctx.data::<AppState>()?;
        let repo = CourseRepo::new(state.store.clone());
        let updated = repo.update(
            id.as_str(),
            UpdateCourseData {
                title,
                code,
                credits,
                instructor,
            },
        );
        Ok(updated.map(Course::from))
    }

    /// Delete a course and scrub it from every enrollment list. False when
    /// nothing was removed.
    async fn delete_course(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        let repo = CourseRepo::new(state.store.clone());
        let removed = repo.delete(id.as_str());
        if removed {
            tracing::info!(course_id = %id.as_str(), "deleted course");
        }
        Ok(removed)
    }

    /// Enroll a student in a course. Idempotent; null when either id is
    /// unknown. Returns the student.
    async fn enroll_student(
        &self,
        ctx: &Context<'_>,
        student_id: ID,
        course_id: ID,
    ) -> Result<Option<Student>> {
        let state = ctx.data::<AppState>()?;
        let repo = EnrollmentRepo::new(state.store.clone());
        let student = repo.enroll(student_id.as_str(), course_id.as_str());
        if student.is_some() {
            tracing::info!(
                student_id = %student_id.as_str(),
                course_id = %course_id.as_str(),
                "enrolled student"
            );
        }
        Ok(student.map(Student::from))
    }

    /// Remove a course from a student's enrollments. Null when the student
    /// or its enrollment entry is unknown; removing a course that was never
    /// enrolled is a no-op. Returns the student.
    async fn unenroll_student(
        &self,
        ctx: &Context<'_>,
        student_id: ID,
        course_id: ID,
    ) -> Result<Option<Student>> {
        let state = ctx.data::<AppState>()?;
        let repo = EnrollmentRepo::new(state.store.clone());
        let student = repo.unenroll(student_id.as_str(), course_id.as_str());
        if student.is_some() {
            tracing::info!(
                student_id = %student_id.as_str(),
                course_id = %course_id.as_str(),
                "unenrolled student"
            );
        }
        Ok(student.map(Student::from))
    }
}
