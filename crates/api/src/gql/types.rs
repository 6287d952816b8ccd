use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use crate::state::AppState;
use infra::models::{CourseRow, StudentRow};
use infra::repos::EnrollmentRepo;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Student {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub major: Option<String>,
}

#[ComplexObject]
impl Student {
    /// Courses this student is enrolled in, in catalog order.
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        let state = ctx.data::<AppState>()?;
        let repo = EnrollmentRepo::new(state.store.clone());
        Ok(repo
            .courses_for_student(self.id.as_str())
            .into_iter()
            .map(Course::from)
            .collect())
    }
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: row.id.into(),
            name: row.name,
            email: row.email,
            age: row.age,
            major: row.major,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Course {
    pub id: ID,
    pub title: String,
    pub code: String,
    pub credits: i32,
    pub instructor: String,
}

#[ComplexObject]
impl Course {
    /// Students enrolled in this course, in registry order.
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        let state = ctx.data::<AppState>()?;
        let repo = EnrollmentRepo::new(state.store.clone());
        Ok(repo
            .students_in_course(self.id.as_str())
            .into_iter()
            .map(Student::from)
            .collect())
    }
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: row.id.into(),
            title: row.title,
            code: row.code,
            credits: row.credits,
            instructor: row.instructor,
        }
    }
}
