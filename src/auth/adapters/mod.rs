//! Adapter implementations of the auth ports.

mod delay;
mod keyvalue;
mod mock_google;

pub use delay::{NoDelay, TokioDelay};
pub use keyvalue::{DEFAULT_SESSION_KEY, KeyValueSessionRepository, UserRecord};
pub use mock_google::{DEMO_EMAIL, DEMO_NAME, DEMO_PHOTO_URL, MockGoogleIdentityProvider};
