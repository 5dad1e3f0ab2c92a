pub mod attempt_service;
