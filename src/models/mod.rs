pub mod fcm;
pub mod notification;
pub mod validation;
