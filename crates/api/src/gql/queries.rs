use async_graphql::{Context, Object, Result, ID};

use crate::gql::types::{Course, Student};
use crate::state::AppState;
use infra::repos::{CourseRepo, StudentRepo};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All students, in insertion order.
    async fn get_all_students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        let state = ctx.data::<AppState>()?;
        let repo = StudentRepo::new(state.store.clone());
        Ok(repo.list().into_iter().map(Student::from).collect())
    }

    /// A single student, or null when the id is unknown.
    async fn get_student(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Student>> {
        let state = ctx.data::<AppState>()?;
        let repo = StudentRepo::new(state.store.clone());
        Ok(repo.get_by_id(id.as_str()).map(Student::from))
    }

    /// All courses, in insertion order.
    async fn get_all_courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        let state = ctx.data::<AppState>()?;
        let repo = CourseRepo::new(state.store.clone());
        Ok(repo.list().into_iter().map(Course::from).collect())
    }

    /// A single course, or null when the id is unknown.
    async fn get_course(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Course>> {
        let state = ctx.data::<AppState>()?;
        let repo = CourseRepo::new(state.store.clone());
        Ok(repo.get_by_id(id.as_str()).map(Course::from))
    }

    /// Students whose major contains the given string, case-insensitively.
    /// Students with no declared major are never returned.
    async fn search_students_by_major(
        &self,
        ctx: &Context<'_>,
        major: String,
    ) -> Result<Vec<Student>> {
        let state = ctx.data::<AppState>()?;
        let repo = StudentRepo::new(state.store.clone());
        Ok(repo
            .search_by_major(&major)
            .into_iter()
            .map(Student::from)
            .collect())
    }
}
