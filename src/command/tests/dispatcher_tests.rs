//! Unit tests for the dispatch and error-notice contract.

use chrono::Utc;
use rstest::rstest;
use std::sync::Arc;

use super::doubles::{EchoHandler, FailsAfterReply, FailsBeforeReply, RecordingReply};
use crate::command::domain::{CommandInvocation, CommandMetadata, CommandModule};
use crate::command::services::{CommandRegistry, Dispatcher, GENERIC_ERROR_REPLY};

fn dispatcher_with(modules: Vec<CommandModule>) -> Dispatcher {
    Dispatcher::new(Arc::new(CommandRegistry::load(modules)))
}

fn module_named(
    name: &str,
    handler: Arc<dyn crate::command::ports::handler::CommandHandler>,
) -> CommandModule {
    CommandModule::new(format!("{name}.rs"))
        .with_metadata(CommandMetadata::new(name, "test command"))
        .with_handler(handler)
}

fn invocation(name: &str) -> CommandInvocation {
    CommandInvocation::new(name, Utc::now())
}

#[rstest]
#[tokio::test]
async fn unknown_command_is_a_silent_no_op() {
    let dispatcher = dispatcher_with(vec![module_named("ping", Arc::new(EchoHandler))]);
    let mut reply = RecordingReply::new();

    dispatcher.dispatch(&invocation("missing"), &mut reply).await;

    assert!(reply.replies.is_empty());
    assert!(reply.follow_ups.is_empty());
}

#[rstest]
#[tokio::test]
async fn successful_handler_sends_no_error_notice() {
    let dispatcher = dispatcher_with(vec![module_named("ping", Arc::new(EchoHandler))]);
    let mut reply = RecordingReply::new();

    dispatcher.dispatch(&invocation("ping"), &mut reply).await;

    assert_eq!(reply.replies.len(), 1);
    assert!(reply.follow_ups.is_empty());
    assert_eq!(reply.replies.first().map(|sent| sent.content.as_str()), Some("ran ping"));
}

#[rstest]
#[tokio::test]
async fn failure_before_reply_sends_one_primary_error_notice() {
    let dispatcher = dispatcher_with(vec![module_named("boom", Arc::new(FailsBeforeReply))]);
    let mut reply = RecordingReply::new();

    dispatcher.dispatch(&invocation("boom"), &mut reply).await;

    assert_eq!(reply.replies.len(), 1);
    assert!(reply.follow_ups.is_empty());
    let notice = reply.replies.first().expect("one notice expected");
    assert_eq!(notice.content, GENERIC_ERROR_REPLY);
    assert!(notice.ephemeral);
}

#[rstest]
#[tokio::test]
async fn failure_after_reply_sends_one_follow_up_never_a_second_primary() {
    let dispatcher = dispatcher_with(vec![module_named("boom", Arc::new(FailsAfterReply))]);
    let mut reply = RecordingReply::new();

    dispatcher.dispatch(&invocation("boom"), &mut reply).await;

    assert_eq!(reply.replies.len(), 1, "only the handler's own primary reply");
    assert_eq!(reply.follow_ups.len(), 1);
    let notice = reply.follow_ups.first().expect("one follow-up expected");
    assert_eq!(notice.content, GENERIC_ERROR_REPLY);
    assert!(notice.ephemeral);
}

#[rstest]
#[tokio::test]
async fn failed_error_notice_delivery_is_swallowed() {
    let dispatcher = dispatcher_with(vec![module_named("boom", Arc::new(FailsBeforeReply))]);
    let mut reply = RecordingReply::failing_sends();

    dispatcher.dispatch(&invocation("boom"), &mut reply).await;

    assert!(reply.replies.is_empty());
    assert!(reply.follow_ups.is_empty());
}
