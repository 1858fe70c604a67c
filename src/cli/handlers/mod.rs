//! Session flows shared by the sign-in and dashboard commands
//!
//! These functions are generic over the API traits so they can be driven by
//! the real HTTP client or by the test mock.

mod session;

pub use session::{
    DashboardOutcome, load_dashboard, sign_in, sign_out, sign_up, validate_registration,
};
