use regex::Regex;

use crate::line::normalize_inline_text;
use crate::model::{Contact, Header};

/// Country names recognized as a location marker, both languages.
const COUNTRY_MARKERS: &[&str] = &["deutschland", "germany"];

/// Domain substrings recognized as a profile-link marker.
const PROFILE_MARKERS: &[&str] = &["linkedin.", "xing."];

/// Digit run with common phone separators, at least eight characters long.
const PHONE_PATTERN: &str = r"\+?\d[\d\s()/.\-]{6,}\d";

/// Extract header fields from the document's prefix lines.
///
/// Name, title and tagline are positional: the first level-1 heading, the
/// first bold line and the first italic line. Contact fields are keyed by
/// marker and may match on any prefix line; the first match per key wins.
pub fn parse_header(lines: &[&str]) -> Header {
    let phone_pattern = Regex::new(PHONE_PATTERN).expect("phone pattern is valid");

    let mut header = Header::default();
    let mut fallback_location: Option<String> = None;

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("##") {
            continue;
        }

        if let Some(rest) = line.strip_prefix("# ") {
            if header.name.is_empty() {
                header.name = rest.trim().to_string();
            }
            continue;
        }

        if line.starts_with("**") {
            if header.title.is_empty() {
                header.title = normalize_inline_text(line);
            }
            continue;
        }

        if line.starts_with('*') {
            if header.tagline.is_empty() {
                header.tagline = normalize_inline_text(line);
            }
            continue;
        }

        let matched = scan_contact_markers(line, &phone_pattern, &mut header.contact);

        // A plain line without any marker is the positional location
        // fallback, used only when no marker-based location turns up.
        if !matched && fallback_location.is_none() {
            let cleaned = trim_marker_noise(line);
            if !cleaned.is_empty() {
                fallback_location = Some(cleaned);
            }
        }
    }

    if header.contact.location.is_none() {
        header.contact.location = fallback_location;
    }

    header
}

/// Check one line against every contact marker. A single line may populate
/// several keys; keys that already hold a value are left alone.
fn scan_contact_markers(line: &str, phone_pattern: &Regex, contact: &mut Contact) -> bool {
    let mut matched = false;

    if contact.email.is_none() {
        if let Some(email) = find_email(line) {
            contact.email = Some(email);
            matched = true;
        }
    }

    // Emails carry digit runs often enough that phone detection skips any
    // line with an at-sign.
    if contact.phone.is_none() && !line.contains('@') {
        if let Some(found) = phone_pattern.find(line) {
            contact.phone = Some(found.as_str().trim().to_string());
            matched = true;
        }
    }

    if contact.profile_url.is_none() {
        if let Some(url) = find_profile_url(line) {
            contact.profile_url = Some(url);
            matched = true;
        }
    }

    if contact.location.is_none() {
        let lowered = line.to_lowercase();
        if COUNTRY_MARKERS.iter().any(|name| lowered.contains(name)) {
            contact.location = Some(trim_marker_noise(line));
            matched = true;
        }
    }

    matched
}

fn find_email(line: &str) -> Option<String> {
    line.split_whitespace()
        .find(|token| token.contains('@'))
        .map(|token| {
            token
                .trim_matches(|c: char| !(c.is_alphanumeric() || "@._+-".contains(c)))
                .to_string()
        })
        .filter(|email| !email.is_empty())
}

fn find_profile_url(line: &str) -> Option<String> {
    line.split_whitespace()
        .find(|token| {
            let lowered = token.to_lowercase();
            PROFILE_MARKERS.iter().any(|domain| lowered.contains(domain))
        })
        .map(|token| token.trim_matches(|c: char| c == '<' || c == '>' || c == ',').to_string())
}

/// Strip emoji markers and stray punctuation off the ends of a value line.
fn trim_marker_noise(line: &str) -> String {
    line.trim_matches(|c: char| !c.is_alphanumeric()).to_string()
}
