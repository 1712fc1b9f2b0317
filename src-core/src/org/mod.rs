pub(crate) mod org_errors;
pub(crate) mod org_model;
pub(crate) mod org_repository;
pub(crate) mod org_service;

pub use org_errors::OrgError;
pub use org_model::{
    Department, DepartmentDB, DepartmentUpdate, ManagementArea, ManagementAreaDB,
    ManagementAreaUpdate, NewDepartment, NewManagementArea,
};
pub use org_repository::OrgRepository;
pub use org_service::OrgService;
