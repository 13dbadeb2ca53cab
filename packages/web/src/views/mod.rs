mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod verify_otp;
pub use verify_otp::VerifyOtp;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod order;
pub use order::Order;

mod checkout;
pub use checkout::Checkout;

pub mod admin;
