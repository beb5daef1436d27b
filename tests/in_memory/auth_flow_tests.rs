//! Sign-in and sign-out flows over the in-memory store.

use super::helpers::{Harness, harness};
use flowtask::auth::{adapters::DEMO_EMAIL, domain::UserId};
use rstest::{fixture, rstest};

#[fixture]
fn h() -> Harness {
    harness()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn starts_signed_out(h: Harness) {
    assert!(!h.auth.is_authenticated().await);
    assert_eq!(h.auth.get_current_user().await, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_in_then_out(h: Harness) -> Result<(), eyre::Report> {
    let user = h.auth.sign_in_with_google().await?;
    eyre::ensure!(user.email() == DEMO_EMAIL, "unexpected demo email");
    eyre::ensure!(
        user.id() == UserId::for_email(DEMO_EMAIL),
        "user id should derive from email"
    );
    eyre::ensure!(h.auth.is_authenticated().await, "should be signed in");

    h.auth.sign_out().await?;
    eyre::ensure!(!h.auth.is_authenticated().await, "should be signed out");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_sign_in_keeps_a_stable_identity(h: Harness) -> Result<(), eyre::Report> {
    let first = h.auth.sign_in_with_google().await?;
    let second = h.auth.sign_in_with_google().await?;

    eyre::ensure!(first.id() == second.id(), "identity should be stable");
    eyre::ensure!(
        h.auth.get_current_user().await == Some(second),
        "latest sign-in should be current"
    );
    Ok(())
}
