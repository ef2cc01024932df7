use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

pub mod career;
pub mod contact;
pub mod email_address;
pub mod payload;

/// Pattern accepted for submitter email addresses: a single `@`, at least one
/// `.` in the domain part, no whitespace anywhere.
pub static SUBMITTER_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Full name of the person submitting a form.
#[nutype(
    validate(len_char_min = 2, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmitterName(String);

/// Email address of the person submitting a form.
///
/// Deliberately looser than a full RFC 5321 address check; the relay only
/// needs something plausible enough to use as a reply-to.
#[nutype(
    validate(regex = SUBMITTER_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmitterEmail(String);
