//! Route components: the public home page, the guest-only login page, and
//! the protected member page.

pub mod authenticated;
pub mod home;
pub mod login;
