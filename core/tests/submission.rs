mod support;

use std::sync::Arc;

use ck_blogsite_core::config::{MockConfig, ResetMode};
use ck_blogsite_core::{Field, FormKind, SubmissionState, SubmitOutcome};
use pretty_assertions::assert_eq;
use rstest::rstest;

use support::{fill, mock_form, mock_form_with, sleep_ms};

#[tokio::test(start_paused = true)]
async fn login_with_demo_credentials_succeeds_after_delay() {
    let form = mock_form(FormKind::Login);
    fill(&form, &[(Field::Email, "test@example.com"), (Field::Password, "password")]);

    let (outcome, ()) = tokio::join!(form.submit(), async {
        sleep_ms(1100).await;
        assert_eq!(form.state.get_cloned(), SubmissionState::Loading);
        assert!(form.is_loading());
    });

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(
        form.state.get_cloned(),
        SubmissionState::Success("Login successful! Redirecting to dashboard...".to_string())
    );
    assert!(!form.shake.get());
}

#[tokio::test(start_paused = true)]
async fn login_with_wrong_password_errors_and_shakes() {
    let form = mock_form(FormKind::Login);
    fill(&form, &[(Field::Email, "x@y.com"), (Field::Password, "wrong")]);

    let (outcome, ()) = tokio::join!(form.submit(), async {
        sleep_ms(1250).await;
        assert_eq!(
            form.state.get_cloned(),
            SubmissionState::Error("Invalid email or password.".to_string())
        );
        assert!(form.shake.get(), "shake should be raised with the error");

        sleep_ms(500).await;
        assert!(!form.shake.get(), "shake should clear within 500ms");
    });

    assert_eq!(outcome, SubmitOutcome::Rejected);
}

#[tokio::test(start_paused = true)]
async fn signup_with_existing_email_is_rejected() {
    let form = mock_form(FormKind::Signup);
    fill(
        &form,
        &[
            (Field::Name, "Existing User"),
            (Field::Email, "existing@example.com"),
            (Field::Password, "Password1!"),
            (Field::ConfirmPassword, "Password1!"),
        ],
    );

    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert_eq!(
        form.state.get_cloned(),
        SubmissionState::Error("An account with this email already exists.".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn signup_with_new_email_succeeds() {
    let form = mock_form(FormKind::Signup);
    fill(
        &form,
        &[
            (Field::Name, "New User"),
            (Field::Email, "new@example.com"),
            (Field::Password, "Password1!"),
            (Field::ConfirmPassword, "Password1!"),
        ],
    );

    let started = tokio::time::Instant::now();
    assert_eq!(form.submit().await, SubmitOutcome::Accepted);
    assert!(started.elapsed().as_millis() >= 1500);
}

#[tokio::test(start_paused = true)]
async fn invalid_signup_stays_idle_and_pulses_shake() {
    let form = mock_form(FormKind::Signup);
    fill(&form, &[(Field::Name, "A"), (Field::Email, "nope")]);

    let (outcome, ()) = tokio::join!(form.submit(), async {
        sleep_ms(10).await;
        assert!(form.shake.get());
    });

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(form.state.get_cloned(), SubmissionState::Idle);
    assert!(!form.shake.get());

    let errors = form.errors.get_cloned();
    assert_eq!(errors.get(Field::Name), Some("Name must be at least 2 characters"));
    assert_eq!(errors.get(Field::Email), Some("Please enter a valid email address"));
    assert_eq!(errors.get(Field::Password), Some("Password is required"));

    form.clear_error(Field::Name);
    assert!(!form.errors.get_cloned().contains(Field::Name));
    assert!(form.errors.get_cloned().contains(Field::Email));
}

#[rstest]
#[case("password", "longenough1", SubmitOutcome::Accepted)]
#[case("wrong", "short", SubmitOutcome::Rejected)]
#[case("password", "short", SubmitOutcome::Rejected)]
#[case("wrong", "longenough1", SubmitOutcome::Rejected)]
#[tokio::test(start_paused = true)]
async fn password_change_scenarios(
    #[case] current: &str,
    #[case] new: &str,
    #[case] expected: SubmitOutcome,
) {
    let form = mock_form(FormKind::PasswordChange);
    fill(&form, &[(Field::CurrentPassword, current), (Field::NewPassword, new)]);
    assert_eq!(form.submit().await, expected);
}

#[tokio::test(start_paused = true)]
async fn password_reset_accept_any_mode_is_faster_and_lenient() {
    let config = MockConfig {
        reset_mode: ResetMode::AcceptAny,
        ..MockConfig::default()
    };
    let form = mock_form_with(FormKind::PasswordReset, Arc::new(config));
    fill(&form, &[(Field::Email, "anyone@anywhere.io")]);

    let started = tokio::time::Instant::now();
    assert_eq!(form.submit().await, SubmitOutcome::Accepted);
    let elapsed = started.elapsed().as_millis();
    assert!((1000..1200).contains(&elapsed), "took {elapsed}ms");
}

#[tokio::test(start_paused = true)]
async fn password_reset_for_demo_account_succeeds_after_delay() {
    let form = mock_form(FormKind::PasswordReset);
    fill(&form, &[(Field::Email, "test@example.com")]);

    let (outcome, ()) = tokio::join!(form.submit(), async {
        sleep_ms(1100).await;
        assert_eq!(form.state.get_cloned(), SubmissionState::Loading);
    });

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(
        form.state.get_cloned(),
        SubmissionState::Success("Password reset link sent to your email!".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn password_change_waits_for_the_backend() {
    let form = mock_form(FormKind::PasswordChange);
    fill(&form, &[(Field::CurrentPassword, "password"), (Field::NewPassword, "longenough1")]);

    let started = tokio::time::Instant::now();
    let (outcome, ()) = tokio::join!(form.submit(), async {
        sleep_ms(1100).await;
        assert!(form.is_loading());
    });

    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert!(started.elapsed().as_millis() >= 1200);
    assert_eq!(
        form.state.get_cloned(),
        SubmissionState::Success("Password changed successfully!".to_string())
    );
}

#[tokio::test(start_paused = true)]
async fn second_submit_while_loading_is_ignored() {
    let form = mock_form(FormKind::Login);
    fill(&form, &[(Field::Email, "test@example.com"), (Field::Password, "password")]);

    let (first, second) = tokio::join!(form.submit(), async {
        sleep_ms(100).await;
        form.submit().await
    });

    assert_eq!(first, SubmitOutcome::Accepted);
    assert_eq!(second, SubmitOutcome::Busy);
}

#[tokio::test(start_paused = true)]
async fn cancelled_submission_never_publishes() {
    let form = mock_form(FormKind::Login);
    fill(&form, &[(Field::Email, "test@example.com"), (Field::Password, "password")]);

    let (outcome, ()) = tokio::join!(form.submit(), async {
        sleep_ms(300).await;
        form.cancel();
    });

    assert_eq!(outcome, SubmitOutcome::Cancelled);
    assert_eq!(form.state.get_cloned(), SubmissionState::Idle);

    sleep_ms(2000).await;
    assert_eq!(form.state.get_cloned(), SubmissionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn editing_fields_does_not_touch_the_banner() {
    let form = mock_form(FormKind::Login);
    fill(&form, &[(Field::Email, "x@y.com"), (Field::Password, "wrong")]);
    form.submit().await;

    form.field(Field::Password).set("password".to_string());
    assert_eq!(
        form.state.get_cloned(),
        SubmissionState::Error("Invalid email or password.".to_string())
    );

    form.reset();
    assert_eq!(form.state.get_cloned(), SubmissionState::Idle);
    assert!(form.errors.get_cloned().is_empty());
}

#[tokio::test(start_paused = true)]
async fn created_post_clears_its_fields_but_keeps_the_banner() {
    let form = mock_form(FormKind::BlogCreate);
    fill(&form, &[(Field::Title, "Hello"), (Field::Content, "First post")]);

    assert_eq!(form.submit().await, SubmitOutcome::Accepted);
    form.values.clear();

    assert_eq!(form.field(Field::Title).get_cloned(), "");
    assert_eq!(form.field(Field::Content).get_cloned(), "");
    assert_eq!(
        form.state.get_cloned(),
        SubmissionState::Success("Blog post created!".to_string())
    );
}
