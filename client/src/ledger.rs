use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

use rand::Rng;

/// The on-chain contract keeps the top 100 entries; the local adapter
/// mirrors that cap.
pub const LEADERBOARD_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxId(String);

impl TxId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub address: String,
    pub score: u32,
}

/// Narrow port to the score contract: submit a final score, read the
/// ranking back, read the caller's personal best. Everything else about
/// the chain stays behind this trait.
pub trait ScoreLedger: Send + Sync {
    fn submit_score(&self, address: &str, score: u32) -> Result<TxId, String>;

    /// Entries sorted by score, highest first, at most [`LEADERBOARD_LIMIT`].
    fn leaderboard(&self) -> Vec<LeaderboardEntry>;

    fn best_score(&self, address: &str) -> Option<u32>;
}

/// In-memory stand-in for the contract. Keeps the per-address best score,
/// like the contract's high-score slot; lower resubmissions are accepted
/// but do not lower the stored best.
#[derive(Default)]
pub struct LocalScoreLedger {
    best_scores: Mutex<HashMap<String, u32>>,
}

impl LocalScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreLedger for LocalScoreLedger {
    fn submit_score(&self, address: &str, score: u32) -> Result<TxId, String> {
        if score == 0 {
            return Err("Play first before submitting".to_string());
        }

        let mut scores = self.best_scores.lock().unwrap();
        let best = scores.entry(address.to_string()).or_insert(0);
        if score > *best {
            *best = score;
        }

        Ok(generate_tx_id())
    }

    fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let scores = self.best_scores.lock().unwrap();
        let mut entries: Vec<LeaderboardEntry> = scores
            .iter()
            .map(|(address, score)| LeaderboardEntry {
                address: address.clone(),
                score: *score,
            })
            .collect();

        entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.address.cmp(&b.address)));
        entries.truncate(LEADERBOARD_LIMIT);
        entries
    }

    fn best_score(&self, address: &str) -> Option<u32> {
        self.best_scores.lock().unwrap().get(address).copied()
    }
}

/// A fresh pseudo-address for players who have not configured one.
pub fn generate_player_address() -> String {
    format!("0x{}", random_hex(40))
}

fn generate_tx_id() -> TxId {
    TxId(format!("0x{}", random_hex(64)))
}

fn random_hex(chars: usize) -> String {
    let mut rng = rand::rng();
    (0..chars)
        .map(|_| {
            let nibble: u8 = rng.random_range(0..16);
            char::from_digit(nibble as u32, 16).expect("nibble is a valid hex digit")
        })
        .collect()
}

/// `0x1234...abcd`, the usual explorer shortening.
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_is_rejected() {
        let ledger = LocalScoreLedger::new();
        assert!(ledger.submit_score("0xabc", 0).is_err());
        assert!(ledger.leaderboard().is_empty());
    }

    #[test]
    fn test_submission_keeps_personal_best() {
        let ledger = LocalScoreLedger::new();
        ledger.submit_score("0xabc", 5).unwrap();
        ledger.submit_score("0xabc", 3).unwrap();
        assert_eq!(ledger.best_score("0xabc"), Some(5));

        ledger.submit_score("0xabc", 7).unwrap();
        assert_eq!(ledger.best_score("0xabc"), Some(7));
    }

    #[test]
    fn test_leaderboard_sorted_descending() {
        let ledger = LocalScoreLedger::new();
        ledger.submit_score("0xaaa", 3).unwrap();
        ledger.submit_score("0xbbb", 9).unwrap();
        ledger.submit_score("0xccc", 6).unwrap();

        let scores: Vec<u32> = ledger.leaderboard().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![9, 6, 3]);
    }

    #[test]
    fn test_leaderboard_is_capped() {
        let ledger = LocalScoreLedger::new();
        for i in 0..(LEADERBOARD_LIMIT as u32 + 20) {
            ledger
                .submit_score(&format!("0xplayer{}", i), i + 1)
                .unwrap();
        }

        let entries = ledger.leaderboard();
        assert_eq!(entries.len(), LEADERBOARD_LIMIT);
        assert_eq!(entries[0].score, LEADERBOARD_LIMIT as u32 + 20);
    }

    #[test]
    fn test_unknown_address_has_no_best() {
        let ledger = LocalScoreLedger::new();
        assert_eq!(ledger.best_score("0xnobody"), None);
    }

    #[test]
    fn test_tx_id_shape() {
        let tx = generate_tx_id();
        assert!(tx.as_str().starts_with("0x"));
        assert_eq!(tx.as_str().len(), 66);
        assert!(tx.as_str()[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_player_address_shape() {
        let address = generate_player_address();
        assert!(address.starts_with("0x"));
        assert_eq!(address.len(), 42);
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("0x20774e567dC27039bb95aa4289A1636cA008Edad"),
            "0x2077...Edad"
        );
        assert_eq!(shorten_address("0xshort"), "0xshort");
    }
}
