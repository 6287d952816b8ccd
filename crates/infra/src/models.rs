#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub major: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    pub id: String,
    pub title: String,
    pub code: String,
    pub credits: i32,
    pub instructor: String,
}
