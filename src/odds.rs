/// Pot odds as a percentage: the share of the final pot the call represents.
///
/// Not applicable (`None`) without a bet to face.
///
/// ```
/// use holdem_advisor::odds::pot_odds;
///
/// let odds = pot_odds(100, 50).unwrap();
/// assert!((odds - 33.33).abs() < 0.01);
/// assert_eq!(pot_odds(100, 0), None);
/// ```
pub fn pot_odds(pot: u64, bet: u64) -> Option<f64> {
    if bet == 0 {
        return None;
    }
    Some(bet as f64 / pot.saturating_add(bet) as f64 * 100.0)
}
