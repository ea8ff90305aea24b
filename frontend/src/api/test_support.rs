//! JSON fixtures shaped like the backend's responses.

use serde_json::{json, Value};

pub fn token_json(token: &str) -> Value {
    json!({ "token": token })
}

pub fn me_json(role: &str) -> Value {
    json!({
        "data": {
            "_id": format!("u-{}", role),
            "name": if role == "hr" { "Hema Rao" } else { "Asha Kumar" },
            "email": if role == "hr" { "hema@example.com" } else { "asha@example.com" },
            "role": role
        }
    })
}

pub fn employee_json(id: &str, name: &str, department: &str) -> Value {
    json!({
        "_id": id,
        "employeeId": format!("EMP-{}", id),
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "phone": "555-0100",
        "position": "Engineer",
        "department": {
            "_id": format!("d-{}", department.to_lowercase()),
            "departmentName": department
        },
        "salary": 52000,
        "role": "employee",
        "status": "Active",
        "createdAt": "2024-11-02T09:30:00.000Z"
    })
}

pub fn department_json(id: &str, name: &str) -> Value {
    json!({ "_id": id, "departmentId": format!("DEP-{}", id), "departmentName": name })
}

pub fn attendance_json(date: &str, check_in: Option<&str>, check_out: Option<&str>) -> Value {
    json!({
        "_id": format!("att-{}", date),
        "date": date,
        "checkInTime": check_in,
        "checkOutTime": check_out,
        "status": "present",
        "remarks": "Regular check-in"
    })
}

pub fn leave_json(id: &str, status: &str, start: &str, end: &str) -> Value {
    json!({
        "_id": id,
        "employeeId": {
            "_id": "e1",
            "name": "Ravi Menon",
            "email": "ravi@example.com",
            "department": { "_id": "d1", "departmentName": "Engineering" }
        },
        "leaveType": "Annual Leave",
        "startDate": start,
        "endDate": end,
        "reason": "Family trip",
        "status": status,
        "createdAt": "2025-01-02T08:00:00.000Z"
    })
}

pub fn job_json(id: &str, title: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "department": "Engineering",
        "location": "Remote",
        "type": "Full-time",
        "description": "Build things",
        "requirements": ["Rust", "SQL"],
        "salary": "$90k - $110k",
        "postedDate": "2025-01-05",
        "deadline": "2025-02-05",
        "applicants": 4,
        "status": status
    })
}

pub fn application_json(id: &str, name: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "jobId": "j1",
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "position": "Backend Engineer",
        "department": "Engineering",
        "applyDate": "2025-01-10",
        "experience": "4 years",
        "status": status,
        "skills": ["Rust"]
    })
}

pub fn task_json(id: &str, title: &str, status: &str, progress: u8) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": "Quarterly work",
        "priority": "High",
        "status": status,
        "progress": progress,
        "assignedBy": "Hema Rao",
        "department": "Engineering",
        "dueDate": "2025-03-01"
    })
}

pub fn payroll_json(id: &str, name: &str, status: &str, net: f64) -> Value {
    json!({
        "_id": id,
        "employeeName": name,
        "employeeId": format!("EMP-{}", id),
        "department": "Engineering",
        "position": "Engineer",
        "baseSalary": net,
        "bonus": 0,
        "deductions": 0,
        "netSalary": net,
        "status": status,
        "paymentDate": "2025-01-31"
    })
}

pub fn wrap(data: Value) -> Value {
    json!({ "data": data })
}
