//! Participant Avatars
//!
//! Members without an uploaded avatar get a generated one seeded by nickname,
//! so the same person looks the same everywhere.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::Participant;

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const STYLES: &[&str] = &["adventurer", "avataaars", "bottts", "pixel-art", "personas"];

/// Generated avatar URL for a nickname
pub fn generated_avatar_url(nickname: &str) -> String {
    let seed: u64 = nickname.encode_utf16().map(u64::from).sum();
    let style = STYLES[(seed % STYLES.len() as u64) as usize];
    format!(
        "https://api.dicebear.com/7.x/{style}/svg?seed={}&backgroundColor=random&radius=50",
        utf8_percent_encode(nickname, URI_COMPONENT)
    )
}

pub fn avatar_url(participant: &Participant) -> String {
    if participant.avatar.trim().is_empty() {
        generated_avatar_url(&participant.nickname)
    } else {
        participant.avatar.clone()
    }
}

/// First `limit` participants plus how many were left out
pub fn preview(participants: &[Participant], limit: usize) -> (&[Participant], usize) {
    let shown = participants.len().min(limit);
    (&participants[..shown], participants.len() - shown)
}

/// "a, b, c 외 N명"
pub fn summary(participants: &[Participant], limit: usize) -> String {
    let (shown, hidden) = preview(participants, limit);
    let names = shown.iter().map(|p| p.nickname.as_str()).collect::<Vec<_>>().join(", ");
    if hidden > 0 {
        format!("{names} 외 {hidden}명")
    } else {
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(names: &[&str]) -> Vec<Participant> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Participant { id: i as u64, nickname: name.to_string(), avatar: String::new() })
            .collect()
    }

    #[test]
    fn test_generated_url_is_stable_and_encoded() {
        // 'a' = 97, 97 % 5 = 2
        assert_eq!(
            generated_avatar_url("a"),
            "https://api.dicebear.com/7.x/bottts/svg?seed=a&backgroundColor=random&radius=50"
        );
        let url = generated_avatar_url("김 철수");
        assert!(url.contains("seed=%EA%B9%80%20%EC%B2%A0%EC%88%98&"));
        assert_eq!(url, generated_avatar_url("김 철수"));
    }

    #[test]
    fn test_long_nickname_seed_does_not_wrap() {
        // 65533 * 65540 exceeds u32::MAX; the exact sum % 5 is 0
        let nickname = "\u{FFFD}".repeat(65_540);
        assert!(generated_avatar_url(&nickname).starts_with("https://api.dicebear.com/7.x/adventurer/"));
    }

    #[test]
    fn test_uploaded_avatar_wins() {
        let mut p = people(&["민지"]).remove(0);
        p.avatar = "https://cdn.example.com/minji.png".into();
        assert_eq!(avatar_url(&p), "https://cdn.example.com/minji.png");
    }

    #[test]
    fn test_preview_and_summary() {
        let five = people(&["가", "나", "다", "라", "마"]);
        let (shown, hidden) = preview(&five, 3);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 2);
        assert_eq!(summary(&five, 3), "가, 나, 다 외 2명");
        assert_eq!(summary(&five[..2], 3), "가, 나");
        assert_eq!(summary(&[], 3), "");
    }
}
