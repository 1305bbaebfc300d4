//! Authenticated user model and role queries

use serde::{Deserialize, Serialize};

use crate::application::KNOWN_DEPARTMENTS;

/// Role claim carried by users and tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }
}

/// Department a user is attached to. `All` grants every department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserDepartment {
    Transport,
    Logistique,
    Global,
    All,
}

impl UserDepartment {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserDepartment::Transport => "Transport",
            UserDepartment::Logistique => "Logistique",
            UserDepartment::Global => "Global",
            UserDepartment::All => "All",
        }
    }
}

/// User record returned by sign-in and cached in storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub department: UserDepartment,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_employee(&self) -> bool {
        self.role == Role::Employee
    }

    /// Admins see everything; employees see their own department, or all of
    /// them when attached to `All`.
    pub fn can_access_department(&self, department: &str) -> bool {
        if self.is_admin() {
            return true;
        }
        self.department.as_str() == department || self.department == UserDepartment::All
    }

    /// Departments this user may browse
    pub fn departments(&self) -> Vec<String> {
        if self.is_admin() || self.department == UserDepartment::All {
            return KNOWN_DEPARTMENTS.iter().map(|d| d.to_string()).collect();
        }
        vec![self.department.as_str().to_string()]
    }
}
