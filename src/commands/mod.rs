pub mod check_contact;
pub mod report;
