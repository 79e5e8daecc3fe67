//! Actions processed by the chat widget reducer.

/// All inputs to the chat widget state machine.
///
/// `Opened`/`Closed`/`InputChanged`/`Submitted` come from the user;
/// `ReplySucceeded`/`ReplyFailed` are fed back by the gateway effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatWidgetAction {
    /// User opened the chat window
    Opened,
    /// User closed the chat window
    Closed,
    /// User edited the input field
    InputChanged {
        /// New input contents
        text: String,
    },
    /// User submitted the current input
    Submitted,
    /// Gateway returned a reply
    ReplySucceeded {
        /// Assistant reply text (may be empty)
        reply: String,
    },
    /// Gateway call failed
    ReplyFailed {
        /// Failure description, for logging only
        message: String,
    },
}
