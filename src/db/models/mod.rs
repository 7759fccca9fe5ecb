//! Database Models

pub mod department;
pub mod employee;
pub mod user;

// Re-exports
pub use department::{
    Department, DepartmentCreate, DepartmentRename, DepartmentUpdate, NewDepartment,
};
pub use employee::{Employee, EmployeeCreate, NewEmployee};
pub use user::UserRegister;
