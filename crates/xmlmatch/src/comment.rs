//! XML comment nodes

use std::fmt;
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::writer::WriteXml;

/// An XML comment; its text is written verbatim between the markers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    text: String,
}

impl Comment {
    /// Create a comment, rejecting text that would terminate it early
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.contains("--") {
            debug!(text = %text, "rejected comment containing '--'");
            return Err(Error::with_message(
                ErrorKind::InvalidArgument,
                format!("comment text must not contain '--': {text:?}"),
            ));
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl WriteXml for Comment {
    fn write_to<'a>(&self, dst: &'a mut String) -> &'a mut String {
        dst.push_str("<!-- ");
        dst.push_str(&self.text);
        dst.push_str(" -->");
        dst
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}
