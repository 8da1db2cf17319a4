//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod assignment_repo;
pub mod problem_result_repo;
pub mod rank_repo;

pub use assignment_repo::AssignmentRepository;
pub use problem_result_repo::ProblemResultRepository;
pub use rank_repo::RankRepository;
