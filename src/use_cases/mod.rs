// Sign-in flows built on the AuthClient and TokenStore ports.

pub mod restore_session;
pub mod sign_in_google;
pub mod sign_in_password;
pub mod sign_out;

#[cfg(test)]
pub(crate) mod test_support;
