/// Groups values by their frequency in a hand, sorted by (count desc, value desc).
///
/// Example: AAAKQ groups as [(14, 3), (13, 1), (12, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(u8, u8)>,
}

impl RankGroups {
    pub fn from_values(values: &[u8; 5]) -> Self {
        let mut groups: Vec<(u8, u8)> = Vec::with_capacity(5);
        for &v in values {
            match groups.iter_mut().find(|(value, _)| *value == v) {
                Some((_, count)) => *count += 1,
                None => groups.push((v, 1)),
            }
        }
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    /// Ordered kicker list: the largest group first, then smaller groups,
    /// higher values ahead of lower ones at each size.
    pub fn tiebreak(&self) -> Vec<u8> {
        self.groups.iter().map(|(value, _)| *value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad() {
        let groups = RankGroups::from_values(&[13, 14, 14, 14, 14]);
        assert_eq!(groups.groups, vec![(14, 4), (13, 1)]);
        assert_eq!(groups.tiebreak(), vec![14, 13]);
    }

    #[test]
    fn test_full_house_prefers_trips() {
        let groups = RankGroups::from_values(&[14, 14, 3, 3, 3]);
        assert_eq!(groups.tiebreak(), vec![3, 14]);
    }

    #[test]
    fn test_two_pair() {
        let groups = RankGroups::from_values(&[10, 13, 14, 13, 14]);
        assert_eq!(groups.tiebreak(), vec![14, 13, 10]);
    }

    #[test]
    fn test_one_pair() {
        let groups = RankGroups::from_values(&[8, 14, 8, 12, 5]);
        assert_eq!(groups.tiebreak(), vec![8, 14, 12, 5]);
    }

    #[test]
    fn test_high_card() {
        let groups = RankGroups::from_values(&[5, 14, 10, 2, 7]);
        assert_eq!(groups.tiebreak(), vec![14, 10, 7, 5, 2]);
    }
}
