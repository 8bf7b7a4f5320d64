use crate::ClientError;
use crate::client::error::CONNECTIVITY_FAILURE;

use eco_core::{CoreError, ErrorKind};

use googletest::prelude::*;

#[test]
fn given_status_without_message_then_reason_is_connectivity_failure() {
    let err = ClientError::status(502, None);

    assert_that!(err.kind(), eq(ErrorKind::RemoteFailure));
    assert_that!(err.reason(), eq(CONNECTIVITY_FAILURE));
}

#[test]
fn given_status_with_server_message_then_reason_is_server_message() {
    let err = ClientError::status(409, Some(String::from("Login already taken")));

    assert_that!(err.reason(), eq("Login already taken"));
}

#[test]
fn given_rejection_then_remote_failure_with_message() {
    let err = ClientError::rejected("Invalid login or password");

    assert_that!(err.kind(), eq(ErrorKind::RemoteFailure));
    assert_that!(err.reason(), eq("Invalid login or password"));
}

#[test]
fn given_core_error_then_kind_and_reason_pass_through() {
    let err = ClientError::from(CoreError::no_session());

    assert_that!(err.kind(), eq(ErrorKind::Session));
    assert_that!(err.reason(), eq("Please log in first."));
}

#[test]
fn given_error_then_display_includes_message() {
    let err = ClientError::rejected("nope");

    assert_that!(err.to_string(), contains_substring("Rejected by server: nope"));
}
