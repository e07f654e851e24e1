pub mod book;
pub mod create;
pub mod lookup;
pub mod status;
pub mod update;

pub use book::BookSession;
pub use create::CreateSession;
pub use lookup::SessionLookup;
pub use status::WorkflowStatus;
pub use update::UpdateSession;

#[cfg(test)]
pub(crate) mod testing;
