use tracing::info;
use uuid::Uuid;

use crate::model::{Student, Teacher};
use crate::store::DataStore;

pub fn student_by_code<'a>(store: &'a DataStore, student_code: &str) -> Option<&'a Student> {
    store.students.iter().find(|s| s.student_code == student_code)
}

pub fn teacher_by_code<'a>(store: &'a DataStore, teacher_code: &str) -> Option<&'a Teacher> {
    store.teachers.iter().find(|t| t.teacher_code == teacher_code)
}

/// Case-insensitive substring match over name, code, department, and email.
/// Results keep source order; the empty query matches everyone.
pub fn search_students<'a>(store: &'a DataStore, query: &str) -> Vec<&'a Student> {
    let needle = query.to_lowercase();
    store
        .students
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&needle)
                || s.student_code.to_lowercase().contains(&needle)
                || s.department.to_lowercase().contains(&needle)
                || s.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Teachers match on name and code only.
pub fn search_teachers<'a>(store: &'a DataStore, query: &str) -> Vec<&'a Teacher> {
    let needle = query.to_lowercase();
    store
        .teachers
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle)
                || t.teacher_code.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Roster additions get fresh ids; everything else comes from the caller.
pub struct NewStudent {
    pub name: String,
    pub student_code: String,
    pub email: String,
    pub department: String,
    pub class: Option<String>,
    pub section: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub parent_contact: Option<String>,
    pub address: Option<String>,
}

pub fn add_student(store: &mut DataStore, new: NewStudent) -> Student {
    let student = Student {
        id: Uuid::new_v4().to_string(),
        name: new.name,
        student_code: new.student_code,
        email: new.email,
        department: new.department,
        class: new.class,
        section: new.section,
        age: new.age,
        gender: new.gender,
        parent_contact: new.parent_contact,
        address: new.address,
    };
    info!(student_code = %student.student_code, "Student added to roster");
    store.students.push(student.clone());
    student
}

pub struct NewTeacher {
    pub name: String,
    pub teacher_code: String,
    pub email: String,
    pub department: String,
    pub subjects: Option<Vec<String>>,
    pub class_teacher: Option<String>,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
}

pub fn add_teacher(store: &mut DataStore, new: NewTeacher) -> Teacher {
    let teacher = Teacher {
        id: Uuid::new_v4().to_string(),
        name: new.name,
        teacher_code: new.teacher_code,
        email: new.email,
        department: new.department,
        subjects: new.subjects,
        class_teacher: new.class_teacher,
        age: new.age,
        gender: new.gender,
        contact_number: new.contact_number,
        address: new.address,
    };
    info!(teacher_code = %teacher.teacher_code, "Teacher added to roster");
    store.teachers.push(teacher.clone());
    teacher
}
