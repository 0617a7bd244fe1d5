//! Service implementations.

mod project_service_impl;
mod task_service_impl;
mod user_service_impl;

#[cfg(test)]
pub(crate) mod test_support;

pub use project_service_impl::ProjectServiceImpl;
pub use task_service_impl::TaskServiceImpl;
pub use user_service_impl::UserServiceImpl;
