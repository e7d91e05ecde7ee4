use clap::ValueEnum;
use mime::Mime;
use reqwest::Url;
use std::time::Duration;

/// How the signed link instructs a browser to present the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Disposition {
    Inline,
    Attachment,
}

impl Disposition {
    pub fn as_header_value(&self) -> &'static str {
        match self {
            Disposition::Inline => "inline",
            Disposition::Attachment => "attachment",
        }
    }
}

/// Response-header overrides baked into every signed link.
///
/// The defaults advertise the object as an inline JPEG regardless of what
/// was actually uploaded. That matches the tool's photo-sharing origins;
/// callers moving anything else should set `--content-type` and
/// `--disposition` instead of relying on the defaults.
#[derive(Debug, Clone)]
pub struct LinkOptions {
    pub disposition: Disposition,
    pub content_type: Mime,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            disposition: Disposition::Inline,
            content_type: mime::IMAGE_JPEG,
        }
    }
}

/// One resolved transfer. Built once from the command line and immutable
/// for the rest of the invocation.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub source: Url,
    pub bucket: String,
    pub expires_in: Duration,
    /// Local file name and object key, both.
    pub filename: String,
    pub keep_local: bool,
    pub link: LinkOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_defaults_are_inline_jpeg() {
        let link = LinkOptions::default();
        assert_eq!(link.disposition, Disposition::Inline);
        assert_eq!(link.content_type, mime::IMAGE_JPEG);
    }

    #[test]
    fn test_disposition_header_values() {
        assert_eq!(Disposition::Inline.as_header_value(), "inline");
        assert_eq!(Disposition::Attachment.as_header_value(), "attachment");
    }
}
