//! User Handlers

pub(crate) mod current;
pub(crate) mod forgot_password;
pub(crate) mod login;
pub(crate) mod register;
