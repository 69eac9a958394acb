use std::cell::RefCell;

use architectura::contact::{
    ContactForm, ContactSession, FormRelay, RelayResponse, SubmissionState, SubmitError,
    GENERIC_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE,
};
use futures::executor::block_on;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Replays one canned answer and records what was posted.
struct MockRelay {
    reply: fn() -> Result<RelayResponse, SubmitError>,
    posted: RefCell<Vec<Vec<(&'static str, String)>>>,
}

impl MockRelay {
    fn new(reply: fn() -> Result<RelayResponse, SubmitError>) -> Self {
        Self {
            reply,
            posted: RefCell::new(Vec::new()),
        }
    }
}

impl FormRelay for MockRelay {
    async fn post(&self, fields: Vec<(&'static str, String)>) -> Result<RelayResponse, SubmitError> {
        self.posted.borrow_mut().push(fields);
        (self.reply)()
    }
}

fn filled_session() -> ContactSession {
    ContactSession {
        form: ContactForm {
            name: "Иван".into(),
            phone: "+7 900 000-00-00".into(),
            email: "ivan@example.com".into(),
            message: "Нужен проект дачи".into(),
        },
        state: SubmissionState::Idle,
    }
}

#[test]
fn success_clears_fields() {
    setup();

    let relay = MockRelay::new(|| {
        Ok(RelayResponse {
            success: true,
            message: None,
        })
    });
    let mut session = filled_session();
    block_on(session.submit_with(&relay, "test-key"));

    assert_eq!(session.state, SubmissionState::Success);
    assert_eq!(session.form, ContactForm::default());

    let posted = relay.posted.borrow();
    assert_eq!(posted.len(), 1);
    assert!(posted[0].contains(&("access_key", "test-key".to_string())));
    assert!(posted[0].contains(&("phone", "+7 900 000-00-00".to_string())));
}

#[test]
fn rejection_surfaces_server_message() {
    setup();

    let relay = MockRelay::new(|| {
        Ok(RelayResponse {
            success: false,
            message: Some("X".into()),
        })
    });
    let mut session = filled_session();
    block_on(session.submit_with(&relay, "test-key"));

    assert_eq!(session.state, SubmissionState::Error("X".into()));
    assert_eq!(session.form, filled_session().form);
}

#[test]
fn rejection_without_message_uses_fallback() {
    setup();

    let relay = MockRelay::new(|| {
        Ok(RelayResponse {
            success: false,
            message: None,
        })
    });
    let mut session = filled_session();
    block_on(session.submit_with(&relay, "test-key"));

    assert_eq!(session.state.error_message(), Some(GENERIC_ERROR_MESSAGE));
}

#[test]
fn transport_failure_uses_fixed_network_message() {
    setup();

    let relay = MockRelay::new(|| Err(SubmitError::Network("connection reset by peer".into())));
    let mut session = filled_session();
    block_on(session.submit_with(&relay, "test-key"));

    assert_eq!(session.state, SubmissionState::Error(NETWORK_ERROR_MESSAGE.into()));
}

#[test]
fn error_allows_resubmission() {
    setup();

    let failing = MockRelay::new(|| Err(SubmitError::Network("offline".into())));
    let working = MockRelay::new(|| {
        Ok(RelayResponse {
            success: true,
            message: None,
        })
    });
    let mut session = filled_session();
    block_on(session.submit_with(&failing, "k"));
    assert!(session.state.can_submit());

    block_on(session.submit_with(&working, "k"));
    assert_eq!(session.state, SubmissionState::Success);
    assert_eq!(working.posted.borrow().len(), 1);
}

#[test]
fn reset_from_success_returns_to_idle() {
    setup();

    let relay = MockRelay::new(|| {
        Ok(RelayResponse {
            success: true,
            message: None,
        })
    });
    let mut session = filled_session();
    block_on(session.submit_with(&relay, "k"));

    // A second send is refused until the form is reset.
    block_on(session.submit_with(&relay, "k"));
    assert_eq!(relay.posted.borrow().len(), 1);

    session.reset();
    assert_eq!(session, ContactSession::default());
    assert_eq!(session.state.error_message(), None);
    assert!(!session.state.is_submitting());
}
