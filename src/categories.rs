//! Transaction category catalogue.

/// A selectable category with its chart colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

/// All categories in display order.
pub const CATEGORIES: &[Category] = &[
    Category { key: "purchases", name: "Compras", color: "#5636D3" },
    Category { key: "food", name: "Alimentação", color: "#FF872C" },
    Category { key: "salary", name: "Salário", color: "#12A454" },
    Category { key: "car", name: "Carro", color: "#E83F5B" },
    Category { key: "leisure", name: "Lazer", color: "#26195C" },
    Category { key: "studies", name: "Estudos", color: "#9C001A" },
];

/// Look up a category by key.
#[must_use]
pub fn find(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            assert!(CATEGORIES[i + 1..].iter().all(|b| b.key != a.key), "duplicate key {}", a.key);
        }
    }

    #[test]
    fn find_known_key() {
        assert_eq!(find("food").map(|c| c.name), Some("Alimentação"));
    }

    #[test]
    fn find_unknown_key() {
        assert!(find("category").is_none());
    }
}
