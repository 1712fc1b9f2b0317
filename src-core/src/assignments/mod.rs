pub(crate) mod assignments_errors;
pub(crate) mod assignments_model;
pub(crate) mod assignments_repository;
pub(crate) mod assignments_service;
pub(crate) mod assignments_traits;

pub use assignments_errors::AssignmentError;
pub use assignments_model::{
    Assignment, AssignmentAction, AssignmentDB, AssignmentRequest, DeliveryMetadata, NewAssignment,
    RequestedAction, TargetKind, TargetRef,
};
pub use assignments_repository::AssignmentRepository;
pub use assignments_service::AssignmentService;
pub use assignments_traits::AssignmentServiceTrait;
