pub mod aggregate;
pub mod seed;

pub use aggregate::VolunteerTask;
pub use seed::volunteer_tasks;
