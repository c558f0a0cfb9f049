pub mod dashboard_page;
pub mod login_page;
pub mod manual_connect;
pub mod notice;
pub mod remote_pad;
pub mod status_badge;
pub mod tv_list;
