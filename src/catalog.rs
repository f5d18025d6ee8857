use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// Product category stocked in the warehouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum ItemType {
    Electronics,
    Clothing,
    Food,
    Books,
    Toys,
}

impl ItemType {
    pub const ALL: [ItemType; 5] = [
        ItemType::Electronics,
        ItemType::Clothing,
        ItemType::Food,
        ItemType::Books,
        ItemType::Toys,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            ItemType::Electronics => "📱",
            ItemType::Clothing => "👕",
            ItemType::Food => "🍎",
            ItemType::Books => "📚",
            ItemType::Toys => "🎮",
        }
    }

    /// Two-letter tag for terminals without emoji support
    pub fn ascii_icon(&self) -> &'static str {
        match self {
            ItemType::Electronics => "EL",
            ItemType::Clothing => "CL",
            ItemType::Food => "FD",
            ItemType::Books => "BK",
            ItemType::Toys => "TY",
        }
    }
}

impl Distribution<ItemType> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ItemType {
        ItemType::ALL[rng.gen_range(0..ItemType::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn display_names() {
        let names: Vec<String> = ItemType::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Electronics", "Clothing", "Food", "Books", "Toys"]);
    }

    #[test]
    fn ascii_icons_are_distinct() {
        let tags: HashSet<_> = ItemType::ALL.iter().map(|i| i.ascii_icon()).collect();
        assert_eq!(tags.len(), ItemType::ALL.len());
    }

    #[test]
    fn sampling_reaches_every_category() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<ItemType> = (0..500).map(|_| rng.gen()).collect();
        assert_eq!(seen.len(), ItemType::ALL.len());
    }
}
