pub mod activity_cards;
pub mod login_modal;
pub mod navigation_bar;
pub mod notice_banner;
pub mod signup_form;
