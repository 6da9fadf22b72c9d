use super::combinations::Combination;

/// Whether a combination runs five values in a row, and where it tops out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// Highest value of the run; 5 for the wheel.
    pub top: Option<u8>,
    /// 10-J-Q-K-A with aces high.
    pub is_top_straight: bool,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false, top: None, is_top_straight: false };

    /// Sorts the combination ascending and checks for a straight. An ace
    /// valued 14 only plays in A-2-3-4-5 and 10-J-Q-K-A. A joker counts as
    /// 0, so it can only sit under a low ace.
    pub fn detect(combo: &mut Combination) -> Self {
        combo.sort_by_rank(false);
        let v = combo.values();

        if v[4] == 14 {
            return match v[..4] {
                [2, 3, 4, 5] => StraightInfo { is_straight: true, top: Some(5), is_top_straight: false },
                [10, 11, 12, 13] => {
                    StraightInfo { is_straight: true, top: Some(14), is_top_straight: true }
                }
                _ => Self::NONE,
            };
        }

        if v.windows(2).all(|w| w[1] == w[0] + 1) {
            return StraightInfo { is_straight: true, top: Some(v[4]), is_top_straight: false };
        }
        Self::NONE
    }
}
