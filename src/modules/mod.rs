pub mod invoice;
pub mod notifier;
pub mod salary;
pub mod timesheet;
