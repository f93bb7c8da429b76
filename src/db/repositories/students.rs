//! Student repository: upsert keyed by collegeId, lookups, point mutation.

use chrono::Utc;
use uuid::Uuid;

use crate::db::{helpers::require, models::Student, Collection, IdeaHub, RecordStore};
use crate::error::{Error, Result};

impl<S: RecordStore> IdeaHub<S> {
    /// Register a student, or refresh the mutable fields of an existing one.
    ///
    /// Repeated registrations under the same `college_id` update
    /// name/section/branch in place and leave accumulated points untouched.
    pub fn upsert_student(
        &self,
        name: &str,
        college_id: &str,
        section: Option<&str>,
        branch: Option<&str>,
    ) -> Result<Student> {
        let name = require(name, "name")?;
        let college_id = require(college_id, "collegeId")?;

        let mut students: Vec<Student> = self.store().load(Collection::Students)?;

        if let Some(student) = students.iter_mut().find(|s| s.college_id == college_id) {
            student.name = name;
            student.section = section.map(str::to_string);
            student.branch = branch.map(str::to_string);
            let updated = student.clone();
            self.store().save(Collection::Students, &students)?;
            return Ok(updated);
        }

        let student = Student {
            id: Uuid::new_v4().to_string(),
            name,
            college_id,
            section: section.map(str::to_string),
            branch: branch.map(str::to_string),
            points: 0,
            badges: Vec::new(),
            created_at: Utc::now(),
        };
        students.push(student.clone());
        self.store().save(Collection::Students, &students)?;

        Ok(student)
    }

    pub fn student_by_college_id(&self, college_id: &str) -> Result<Student> {
        let students: Vec<Student> = self.store().load(Collection::Students)?;
        students
            .into_iter()
            .find(|s| s.college_id == college_id)
            .ok_or(Error::NotFound("Student"))
    }

    /// All students in storage order.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        let students = self.store().load(Collection::Students)?;
        Ok(students)
    }

    /// Add `delta` (possibly negative) to a student's points.
    pub fn add_points(&self, college_id: &str, delta: i64) -> Result<Student> {
        let mut students: Vec<Student> = self.store().load(Collection::Students)?;
        let student = students
            .iter_mut()
            .find(|s| s.college_id == college_id)
            .ok_or(Error::NotFound("Student"))?;

        student.points += delta;
        let updated = student.clone();
        self.store().save(Collection::Students, &students)?;

        Ok(updated)
    }
}
