use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A kind of cereal that can be kept in a storage container.
///
/// Each kind occupies at most one container at a time, so the kind doubles as
/// the container's key inside [`CerealStorageImpl`](crate::storage::CerealStorageImpl).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cereal {
    Buckwheat,
    Bulgur,
    Millet,
    Peas,
    Rice,
}

impl Cereal {
    /// Every cereal kind, in declaration order.
    pub const ALL: [Cereal; 5] = [
        Cereal::Buckwheat,
        Cereal::Bulgur,
        Cereal::Millet,
        Cereal::Peas,
        Cereal::Rice,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Cereal::Buckwheat => "Buckwheat",
            Cereal::Bulgur => "Bulgur",
            Cereal::Millet => "Millet",
            Cereal::Peas => "Peas",
            Cereal::Rice => "Rice",
        }
    }
}

impl Display for Cereal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Cereal::Rice.to_string(), "Rice");
        assert_eq!(Cereal::Buckwheat.to_string(), "Buckwheat");
    }

    #[test]
    fn test_all_is_sorted() {
        let mut sorted = Cereal::ALL;
        sorted.sort();
        assert_eq!(sorted, Cereal::ALL);
    }
}
