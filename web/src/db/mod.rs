pub mod booking_repository;
pub mod pool;
