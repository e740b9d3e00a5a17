pub mod interview_api;
pub mod notify_service;
pub mod workflow_service;
