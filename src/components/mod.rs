pub mod admin_login;
pub mod charts;
pub mod constellation;
pub mod dashboard;
pub mod feedback_form;
