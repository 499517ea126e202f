pub mod deployment_status;
pub mod severity;
