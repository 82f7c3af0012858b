pub mod company_card;
pub mod job_card;
pub mod login_form;
pub mod navigation_bar;
pub mod profile_form;
pub mod route_guard;
pub mod search_form;
pub mod sign_up_form;
