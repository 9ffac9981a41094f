//! Demo dataset. Rosters, late records and leave requests are fixed; the
//! attendance history is generated over the trailing 30 days so dashboards
//! always have current data to show.

use chrono::{Duration, Local, NaiveDate, NaiveTime};

use crate::model::{
    AttendanceRecord, Department, LateRecord, LeaveRequest, LeaveStatus, Student, Teacher,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid seed time")
}

pub fn teachers() -> Vec<Teacher> {
    vec![
        Teacher {
            id: "t1".into(),
            name: "Harikanth".into(),
            teacher_code: "TCH001".into(),
            email: "harikanth@example.com".into(),
            department: "Computer Science".into(),
            subjects: Some(vec!["Data Structures".into(), "Algorithms".into()]),
            class_teacher: Some("CS-A".into()),
            age: Some(35),
            gender: Some("Male".into()),
            contact_number: Some("9876543210".into()),
            address: Some("123 Faculty Housing, Chennai".into()),
        },
        Teacher {
            id: "t2".into(),
            name: "Vimala".into(),
            teacher_code: "TCH002".into(),
            email: "vimala@example.com".into(),
            department: "Data Science".into(),
            subjects: Some(vec!["Data Mining".into(), "Machine Learning".into()]),
            class_teacher: Some("DS-B".into()),
            age: Some(42),
            gender: Some("Female".into()),
            contact_number: Some("9876543211".into()),
            address: Some("456 Faculty Housing, Chennai".into()),
        },
    ]
}

pub fn students() -> Vec<Student> {
    vec![
        Student {
            id: "1".into(),
            name: "Barani".into(),
            student_code: "STU001".into(),
            email: "barani@gmail.com".into(),
            department: "Computer Science".into(),
            class: Some("CS-A".into()),
            section: Some("A".into()),
            age: Some(20),
            gender: Some("Male".into()),
            parent_contact: Some("9876543212".into()),
            address: Some("789 Student Hostel, Chennai".into()),
        },
        Student {
            id: "2".into(),
            name: "Deepak".into(),
            student_code: "STU002".into(),
            email: "deepak@gmail.com".into(),
            department: "Data Science".into(),
            class: Some("DS-B".into()),
            section: Some("B".into()),
            age: Some(21),
            gender: Some("Male".into()),
            parent_contact: Some("9876543213".into()),
            address: Some("101 Student Hostel, Chennai".into()),
        },
        Student {
            id: "3".into(),
            name: "Arul Mani".into(),
            student_code: "STU003".into(),
            email: "arulmani@gmail.com".into(),
            department: "Computer Science".into(),
            class: Some("CS-A".into()),
            section: Some("A".into()),
            age: Some(19),
            gender: Some("Male".into()),
            parent_contact: Some("9876543214".into()),
            address: Some("202 Student Hostel, Chennai".into()),
        },
        Student {
            id: "4".into(),
            name: "Sai".into(),
            student_code: "STU004".into(),
            email: "sai@gmail.com".into(),
            department: "Software Engineering".into(),
            class: Some("SE-C".into()),
            section: Some("C".into()),
            age: Some(20),
            gender: Some("Female".into()),
            parent_contact: Some("9876543215".into()),
            address: Some("303 Student Hostel, Chennai".into()),
        },
    ]
}

/// Thirty days of history per student ending today. Roughly one absence in
/// ten, staggered per student so no two students share an absence pattern.
/// Deterministic on purpose; the crate takes no RNG dependency.
pub fn attendance() -> Vec<AttendanceRecord> {
    let today = Local::now().date_naive();
    let roster = students();
    let mut records = Vec::with_capacity(30 * roster.len());

    for day_back in 0..30i64 {
        let day = today - Duration::days(day_back);
        for (idx, student) in roster.iter().enumerate() {
            let present = (day_back as usize + idx * 7) % 10 != 0;
            let check_in_time = present
                .then(|| time(8 + ((day_back as u32 + idx as u32) % 2), (day_back as u32 * 13 + idx as u32 * 29) % 60));
            records.push(AttendanceRecord {
                date: day,
                student_code: student.student_code.clone(),
                present,
                check_in_time,
            });
        }
    }

    records
}

pub fn late_records() -> Vec<LateRecord> {
    vec![
        LateRecord {
            id: "lr1".into(),
            student_code: "STU001".into(),
            date: date(2024, 2, 2),
            check_in_time: time(9, 30),
        },
        LateRecord {
            id: "lr2".into(),
            student_code: "STU001".into(),
            date: date(2024, 2, 5),
            check_in_time: time(9, 45),
        },
        LateRecord {
            id: "lr3".into(),
            student_code: "STU004".into(),
            date: date(2024, 2, 5),
            check_in_time: time(9, 20),
        },
        // Unknown student code kept on purpose; enrichment must tolerate it.
        LateRecord {
            id: "lr4".into(),
            student_code: "STU000".into(),
            date: date(2024, 2, 6),
            check_in_time: time(9, 15),
        },
    ]
}

pub fn leave_requests() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: "leave1".into(),
            student_code: "STU001".into(),
            from_date: date(2024, 2, 15),
            to_date: date(2024, 2, 16),
            reason: "Family event".into(),
            status: LeaveStatus::Pending,
            submitted_date: date(2024, 2, 10),
            reviewed_by: None,
            review_date: None,
        },
        LeaveRequest {
            id: "leave2".into(),
            student_code: "STU002".into(),
            from_date: date(2024, 2, 20),
            to_date: date(2024, 2, 21),
            reason: "Medical appointment".into(),
            status: LeaveStatus::Approved,
            submitted_date: date(2024, 2, 12),
            reviewed_by: Some("Harikanth".into()),
            review_date: Some(date(2024, 2, 13)),
        },
    ]
}

pub fn departments() -> Vec<Department> {
    vec![
        Department {
            id: "dept1".into(),
            name: "Computer Science".into(),
            attendance_rate: 94.2,
        },
        Department {
            id: "dept2".into(),
            name: "Data Science".into(),
            attendance_rate: 91.8,
        },
        Department {
            id: "dept3".into(),
            name: "Software Engineering".into(),
            attendance_rate: 93.5,
        },
    ]
}
